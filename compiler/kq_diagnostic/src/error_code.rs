//! Error codes for all diagnostics.
//!
//! Format: E#### where the first digit indicates the category:
//! - E0xxx: Lexical
//! - E1xxx: Syntax
//! - E2xxx: Name
//! - E3xxx: Type
//! - E4xxx: Range
//! - E5xxx: IO
//! - E6xxx: JSON

use std::fmt;

/// Coarse error kind reported to the host alongside the message.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Name,
    Type,
    Range,
    Io,
    Json,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Lexical => "LexicalError",
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Name => "NameError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Range => "RangeError",
            ErrorCategory::Io => "IOError",
            ErrorCategory::Json => "JSONError",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical (E0xxx)
    /// Unexpected character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Restricted word used in source
    E0003,

    // Syntax (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// `return` outside of a function body
    E1003,

    // Name (E2xxx)
    /// Undefined variable
    E2001,
    /// Undefined function
    E2002,
    /// Immutable binding redeclared, reassigned or deleted
    E2003,
    /// Reserved name `all` used as a binding
    E2004,

    // Type (E3xxx)
    /// Operand of the wrong kind for an operator or helper
    E3001,
    /// Array operation on a non-array
    E3002,
    /// Non-numeric array index
    E3003,
    /// Wrong number of call arguments
    E3004,

    // Range (E4xxx)
    /// Array index out of bounds
    E4001,
    /// Value not found for delete-by-value
    E4002,

    // IO (E5xxx)
    /// File missing or unreadable
    E5001,
    /// `connect` target is not a `.kq` file
    E5002,
    /// `connect` cycle
    E5003,

    // JSON (E6xxx)
    /// Malformed or unrepresentable JSON
    E6001,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E4002 => "E4002",
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E5003 => "E5003",
            ErrorCode::E6001 => "E6001",
        }
    }

    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003 => ErrorCategory::Lexical,
            ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003 => ErrorCategory::Syntax,
            ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003 | ErrorCode::E2004 => {
                ErrorCategory::Name
            }
            ErrorCode::E3001 | ErrorCode::E3002 | ErrorCode::E3003 | ErrorCode::E3004 => {
                ErrorCategory::Type
            }
            ErrorCode::E4001 | ErrorCode::E4002 => ErrorCategory::Range,
            ErrorCode::E5001 | ErrorCode::E5002 | ErrorCode::E5003 => ErrorCategory::Io,
            ErrorCode::E6001 => ErrorCategory::Json,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_prefix_matches_category() {
        let cases = [
            (ErrorCode::E0003, ErrorCategory::Lexical),
            (ErrorCode::E1002, ErrorCategory::Syntax),
            (ErrorCode::E2004, ErrorCategory::Name),
            (ErrorCode::E3004, ErrorCategory::Type),
            (ErrorCode::E4002, ErrorCategory::Range),
            (ErrorCode::E5003, ErrorCategory::Io),
            (ErrorCode::E6001, ErrorCategory::Json),
        ];
        for (code, category) in cases {
            assert_eq!(code.category(), category, "{code}");
        }
    }

    #[test]
    fn category_names() {
        assert_eq!(ErrorCategory::Io.to_string(), "IOError");
        assert_eq!(ErrorCategory::Json.as_str(), "JSONError");
    }
}

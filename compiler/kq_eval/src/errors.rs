//! Runtime errors.
//!
//! Every runtime failure is fatal to the unit being interpreted. Factory
//! functions are the public way to build an [`EvalError`]; the call site
//! attaches the span with [`EvalError::with_span`].

use std::fmt;

use kq_diagnostic::{Diagnostic, ErrorCategory, ErrorCode};
use kq_ir::{BinaryOp, Span, UnaryOp};
use kq_parse::ParseError;
use thiserror::Error;

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalErrorKind {
    /// Lexical or syntax error, including ones from connected files.
    #[error(transparent)]
    Syntax(ParseError),

    // Name
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },
    #[error("undefined function `{name}`")]
    UndefinedFunction { name: String },
    #[error("`{name}` is immutable")]
    ImmutableBinding { name: String },
    #[error("`all` is reserved and cannot be used as a {what} name")]
    ReservedName { what: &'static str },

    // Type
    #[error("cannot apply `{op}` to {left} and {right}")]
    InvalidBinaryOp {
        op: BinaryOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("cannot apply `{op}` to {operand}")]
    InvalidUnaryOp {
        op: UnaryOp,
        operand: &'static str,
    },
    #[error("{context} expects {expected}, found {got}")]
    TypeMismatch {
        context: String,
        expected: &'static str,
        got: &'static str,
    },
    #[error("`{name}` is {got}, not an array")]
    NotAnArray { name: String, got: &'static str },
    #[error("array index must be a number, found {got}")]
    NonNumericIndex { got: &'static str },
    #[error("`{name}` takes {expected} argument{} but {got} were supplied", plural(*.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    // Range
    #[error("index {index} is out of bounds for `{array}` of length {len}")]
    IndexOutOfBounds {
        array: String,
        index: String,
        len: usize,
    },
    #[error("value {value} not found in `{array}`")]
    ValueNotFound { array: String, value: String },

    // IO
    #[error("cannot read `{path}`: {reason}")]
    FileUnreadable { path: String, reason: String },
    #[error("cannot connect `{path}`: only `.kq` files can be connected")]
    NotKqFile { path: String },
    #[error("`{path}` is already being connected")]
    CircularConnect { path: String },

    // JSON
    #[error("JSON error: {message}")]
    Json { message: String },
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::Syntax(err) => err.code(),
            EvalErrorKind::UndefinedVariable { .. } => ErrorCode::E2001,
            EvalErrorKind::UndefinedFunction { .. } => ErrorCode::E2002,
            EvalErrorKind::ImmutableBinding { .. } => ErrorCode::E2003,
            EvalErrorKind::ReservedName { .. } => ErrorCode::E2004,
            EvalErrorKind::InvalidBinaryOp { .. }
            | EvalErrorKind::InvalidUnaryOp { .. }
            | EvalErrorKind::TypeMismatch { .. } => ErrorCode::E3001,
            EvalErrorKind::NotAnArray { .. } => ErrorCode::E3002,
            EvalErrorKind::NonNumericIndex { .. } => ErrorCode::E3003,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E3004,
            EvalErrorKind::IndexOutOfBounds { .. } => ErrorCode::E4001,
            EvalErrorKind::ValueNotFound { .. } => ErrorCode::E4002,
            EvalErrorKind::FileUnreadable { .. } => ErrorCode::E5001,
            EvalErrorKind::NotKqFile { .. } => ErrorCode::E5002,
            EvalErrorKind::CircularConnect { .. } => ErrorCode::E5003,
            EvalErrorKind::Json { .. } => ErrorCode::E6001,
        }
    }
}

/// A fatal error raised while interpreting.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Where in the source the failure happened.
    pub span: Option<Span>,
    /// Path of the connected file the error came from, if not the main source.
    pub origin: Option<String>,
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            origin: None,
            notes: Vec::new(),
        }
    }

    /// Attach a source span unless a more precise one is already set, or
    /// the error came from another file.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() && self.origin.is_none() {
            self.span = Some(span);
        }
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Record the file the error came from unless already recorded.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        if self.origin.is_none() {
            self.origin = Some(origin.into());
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = match &self.kind {
            EvalErrorKind::Syntax(err) => err.to_diagnostic(),
            kind => Diagnostic::error(kind.code()).with_message(kind.to_string()),
        };
        if let Some(span) = self.span {
            diag = diag.with_span(span);
        }
        for note in &self.notes {
            diag = diag.with_note(note.clone());
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind)
    }
}

impl std::error::Error for EvalError {}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        let span = err.span;
        EvalError::from_kind(EvalErrorKind::Syntax(err)).with_span(span)
    }
}

// Name errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    })
}

#[cold]
pub fn immutable_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ImmutableBinding {
        name: name.to_string(),
    })
}

#[cold]
pub fn reserved_name(what: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReservedName { what })
}

// Type errors

#[cold]
pub fn invalid_binary_op(
    op: BinaryOp,
    left: &'static str,
    right: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidBinaryOp { op, left, right })
}

#[cold]
pub fn invalid_unary_op(op: UnaryOp, operand: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOp { op, operand })
}

/// A helper or construct received the wrong kind of value.
#[cold]
pub fn type_mismatch(
    context: impl Into<String>,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        context: context.into(),
        expected,
        got,
    })
}

#[cold]
pub fn not_an_array(name: &str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAnArray {
        name: name.to_string(),
        got,
    })
}

#[cold]
pub fn non_numeric_index(got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonNumericIndex { got })
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

// Range errors

#[cold]
pub fn index_out_of_bounds(array: &str, index: &str, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds {
        array: array.to_string(),
        index: index.to_string(),
        len,
    })
}

#[cold]
pub fn value_not_found(array: &str, value: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ValueNotFound {
        array: array.to_string(),
        value: value.to_string(),
    })
}

// IO errors

#[cold]
pub fn file_unreadable(path: &str, reason: impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FileUnreadable {
        path: path.to_string(),
        reason: reason.to_string(),
    })
}

#[cold]
pub fn not_kq_file(path: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotKqFile {
        path: path.to_string(),
    })
}

#[cold]
pub fn circular_connect(path: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CircularConnect {
        path: path.to_string(),
    })
}

// JSON errors

#[cold]
pub fn json_error(message: impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Json {
        message: message.to_string(),
    })
}

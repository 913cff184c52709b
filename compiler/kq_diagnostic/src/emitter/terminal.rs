//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E2001]: undefined variable `count`
//!   --> demo.kq:3:6
//!    |
//!  3 | show count
//!    |      ^^^^^
//!   = note: NameError
//! ```

use std::io::{self, Write};

use crate::span_utils::{line_text, offset_to_line_col};
use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// When given the source text, spans are resolved to `line:col` and the
/// offending line is echoed with a caret underline. Without it, the raw
/// byte range is printed.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<&'src str>,
    file_path: Option<String>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_location(&mut self, diagnostic: &Diagnostic) {
        let Some(span) = diagnostic.span else {
            if let Some(path) = self.file_path.clone() {
                self.write_colored("  --> ", colors::GUTTER);
                let _ = writeln!(self.writer, "{path}");
            }
            return;
        };

        self.write_colored("  --> ", colors::GUTTER);
        let path = self.file_path.as_deref().unwrap_or("<input>");
        let Some(source) = self.source else {
            let _ = writeln!(self.writer, "{path} {span:?}");
            return;
        };

        let (line, col) = offset_to_line_col(source, span.start);
        let _ = writeln!(self.writer, "{path}:{line}:{col}");

        let text = line_text(source, span);
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());
        let width = text
            .chars()
            .skip(col as usize - 1)
            .count()
            .min(span.len().max(1) as usize)
            .max(1);

        self.write_colored(&format!(" {pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!(" {gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");
        self.write_colored(&format!(" {pad} |"), colors::GUTTER);
        let _ = write!(self.writer, " {}", " ".repeat(col as usize - 1));
        let carets = "^".repeat(width);
        let color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&carets, color);
        let _ = writeln!(self.writer);
    }
}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_location(diagnostic);

        let _ = write!(self.writer, "  = ");
        self.write_colored("note", colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.category());

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for help in &diagnostic.help {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {help}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

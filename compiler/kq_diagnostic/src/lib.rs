//! Diagnostic system for KorvaqScrip.
//!
//! Every failure in the pipeline is fatal to the unit being interpreted, and
//! is reported exactly once. This crate gives those failures a shared shape:
//!
//! - [`ErrorCode`]: searchable code (`E2003`), one per failure mode
//! - [`ErrorCategory`]: the coarse kind a code belongs to (Name, Type, ...)
//! - [`Diagnostic`]: code + message + optional span + notes
//! - [`emitter`]: rendering to a terminal with a source snippet

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::{ErrorCategory, ErrorCode};

//! KorvaqScrip command-line host.
//!
//! The binary (`kq`) is a thin argument dispatcher over [`commands`]; the
//! interactive loop lives in [`repl`] so it can be driven from tests.

pub mod commands;
pub mod repl;
mod tracing_setup;

pub use tracing_setup::init_tracing;

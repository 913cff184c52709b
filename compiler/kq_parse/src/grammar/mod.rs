//! Grammar productions, split by family.
//!
//! - `stmt`: statement dispatch, blocks, declarations and control flow
//! - `expr`: the flat binary level, unary operators, primaries and value forms

mod expr;
mod stmt;

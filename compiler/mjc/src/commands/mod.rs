//! Command handlers besides the default check.
//!
//! Each writes to a caller-supplied stream so `main.rs` stays a thin
//! argument dispatcher.

mod explain;
mod lex;

pub use explain::{explain_error, ExplainError};
pub use lex::lex_file;

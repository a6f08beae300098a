//! Diagnostic system for the MiniJ front end.
//!
//! - [`ErrorCode`]: searchable codes, `E0xxx` lexical and `E1xxx` syntactic
//! - [`Diagnostic`]: one located, message-carrying record
//! - [`ErrorReporter`]: the per-file accumulator the scanner and parser
//!   report into; its state is the only success/failure signal of a parse
//! - [`emitter`]: terminal rendering of accumulated diagnostics
//! - [`ErrorDocs`]: long-form explanations for `--explain`

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod reporter;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use reporter::ErrorReporter;

//! The `explain` command: documentation for diagnostic codes.

use mj_diagnostic::{ErrorCode, ErrorDocs};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExplainError {
    #[error("unknown error code: {0}")]
    Unknown(String),
    #[error("no documentation available for {0}")]
    Undocumented(ErrorCode),
}

/// Look up the long-form explanation for a code such as `E1001`.
pub fn explain_error(code: &str) -> Result<&'static str, ExplainError> {
    let code: ErrorCode = code
        .parse()
        .map_err(|()| ExplainError::Unknown(code.to_string()))?;
    ErrorDocs::get(code).ok_or(ExplainError::Undocumented(code))
}

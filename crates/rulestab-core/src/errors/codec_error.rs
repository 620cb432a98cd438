//! Pattern codec errors.

use super::error_code::{self, StabilityErrorCode};

/// Errors raised while decoding a pattern string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Malformed pattern {input:?}: token {token:?} is not an integer")]
    Format { input: String, token: String },
}

impl StabilityErrorCode for CodecError {
    fn error_code(&self) -> &'static str {
        error_code::FORMAT_ERROR
    }
}

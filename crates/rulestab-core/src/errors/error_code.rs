//! StabilityErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait StabilityErrorCode {
    /// Returns the error code string (e.g., "TRIAL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
pub const TRAINING_ERROR: &str = "TRAINING_ERROR";
pub const TRIAL_ERROR: &str = "TRIAL_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const VISUALIZATION_ERROR: &str = "VISUALIZATION_ERROR";

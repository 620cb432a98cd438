//! Error handling for rulestab.
//! One error enum per subsystem, `thiserror` only.

pub mod codec_error;
pub mod config_error;
pub mod error_code;
pub mod stability_error;
pub mod trial_error;
pub mod visualization_error;

pub use codec_error::CodecError;
pub use config_error::ConfigError;
pub use error_code::StabilityErrorCode;
pub use stability_error::StabilityError;
pub use trial_error::{TrainingError, TrialError};
pub use visualization_error::VisualizationError;

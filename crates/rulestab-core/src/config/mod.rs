//! Configuration system for rulestab.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod fit_config;
pub mod learner_config;
pub mod report_config;
pub mod stability_config;
pub mod trial_config;

pub use fit_config::FitConfig;
pub use learner_config::LearnerConfig;
pub use report_config::ReportConfig;
pub use stability_config::{CliOverrides, StabilityConfig};
pub use trial_config::TrialConfig;

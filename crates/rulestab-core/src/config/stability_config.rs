//! Top-level rulestab configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{FitConfig, LearnerConfig, ReportConfig, TrialConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`RULESTAB_*`)
/// 3. Project config (`rulestab.toml` in project root)
/// 4. User config (`~/.rulestab/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StabilityConfig {
    pub trials: TrialConfig,
    pub learner: LearnerConfig,
    pub fit: FitConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub trials: Option<usize>,
    pub parallelism: Option<usize>,
    pub rule_cutoff: Option<usize>,
    pub variable_cutoff: Option<usize>,
}

impl StabilityConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("rulestab.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &StabilityConfig) -> Result<(), ConfigError> {
        if config.trials.count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "trials.count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.trials.parallelism == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "trials.parallelism".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(fraction) = config.trials.test_fraction {
            if !(fraction > 0.0 && fraction < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "trials.test_fraction".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if config.learner.n_linguistic_values == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "learner.n_linguistic_values".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.learner.parallelism == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "learner.parallelism".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(tolerance) = config.learner.tolerance {
            if !(0.0..=1.0).contains(&tolerance) {
                return Err(ConfigError::ValidationFailed {
                    field: "learner.tolerance".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.rulestab/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut StabilityConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: StabilityConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut StabilityConfig, other: &StabilityConfig) {
        // Trials
        if other.trials.count.is_some() {
            base.trials.count = other.trials.count;
        }
        if other.trials.parallelism.is_some() {
            base.trials.parallelism = other.trials.parallelism;
        }
        if other.trials.test_fraction.is_some() {
            base.trials.test_fraction = other.trials.test_fraction;
        }

        // Learner
        if other.learner.n_rules.is_some() {
            base.learner.n_rules = other.learner.n_rules;
        }
        if other.learner.n_antecedents.is_some() {
            base.learner.n_antecedents = other.learner.n_antecedents;
        }
        if other.learner.n_linguistic_values.is_some() {
            base.learner.n_linguistic_values = other.learner.n_linguistic_values;
        }
        if other.learner.fuzzy_type.is_some() {
            base.learner.fuzzy_type = other.learner.fuzzy_type;
        }
        if other.learner.tolerance.is_some() {
            base.learner.tolerance = other.learner.tolerance;
        }
        if other.learner.verbose.is_some() {
            base.learner.verbose = other.learner.verbose;
        }
        if other.learner.parallelism.is_some() {
            base.learner.parallelism = other.learner.parallelism;
        }

        // Fit
        if other.fit.generations.is_some() {
            base.fit.generations = other.fit.generations;
        }
        if other.fit.population_size.is_some() {
            base.fit.population_size = other.fit.population_size;
        }
        if other.fit.checkpoint_interval.is_some() {
            base.fit.checkpoint_interval = other.fit.checkpoint_interval;
        }

        // Report
        if other.report.rule_cutoff.is_some() {
            base.report.rule_cutoff = other.report.rule_cutoff;
        }
        if other.report.variable_cutoff.is_some() {
            base.report.variable_cutoff = other.report.variable_cutoff;
        }
        if !other.report.class_names.is_empty() {
            base.report.class_names = other.report.class_names.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RULESTAB_TRIALS_COUNT`, `RULESTAB_REPORT_RULE_CUTOFF`, etc.
    fn apply_env_overrides(config: &mut StabilityConfig) {
        if let Some(v) = env_parse::<usize>("RULESTAB_TRIALS_COUNT") {
            config.trials.count = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RULESTAB_TRIALS_PARALLELISM") {
            config.trials.parallelism = Some(v);
        }
        if let Some(v) = env_parse::<f64>("RULESTAB_TRIALS_TEST_FRACTION") {
            config.trials.test_fraction = Some(v);
        }
        if let Some(v) = env_parse("RULESTAB_LEARNER_FUZZY_TYPE") {
            config.learner.fuzzy_type = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RULESTAB_LEARNER_N_RULES") {
            config.learner.n_rules = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RULESTAB_FIT_GENERATIONS") {
            config.fit.generations = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RULESTAB_FIT_POPULATION_SIZE") {
            config.fit.population_size = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RULESTAB_REPORT_RULE_CUTOFF") {
            config.report.rule_cutoff = Some(v);
        }
        if let Some(v) = env_parse::<usize>("RULESTAB_REPORT_VARIABLE_CUTOFF") {
            config.report.variable_cutoff = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut StabilityConfig, cli: &CliOverrides) {
        if let Some(v) = cli.trials {
            config.trials.count = Some(v);
        }
        if let Some(v) = cli.parallelism {
            config.trials.parallelism = Some(v);
        }
        if let Some(v) = cli.rule_cutoff {
            config.report.rule_cutoff = Some(v);
        }
        if let Some(v) = cli.variable_cutoff {
            config.report.variable_cutoff = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse an environment variable, ignoring values that do not parse.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse::<T>().ok())
}

/// Returns the user-level config directory: `~/.rulestab/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".rulestab"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

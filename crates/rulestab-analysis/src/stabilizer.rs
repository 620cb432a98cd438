//! End-to-end pipeline: trials → aggregation → report.

use rulestab_core::config::StabilityConfig;
use rulestab_core::errors::{ConfigError, StabilityError};
use rulestab_core::events::EventDispatcher;
use tracing::info;

use crate::aggregation::{aggregate, AggregateState};
use crate::learner::{Dataset, FitParams, LearnerFactory, LearnerParams};
use crate::report::render_text_report;
use crate::rules::LinguisticVariable;
use crate::trials::run_trials;

/// Owns a dataset, a learner factory and the resolved configuration, and
/// measures how stable the learner's rules are across repeated fits.
#[derive(Debug)]
pub struct PatternStabilizer<F> {
    dataset: Dataset,
    config: StabilityConfig,
    factory: F,
    events: EventDispatcher,
    linguistic_variables: Option<Vec<LinguisticVariable>>,
}

impl<F: LearnerFactory> PatternStabilizer<F> {
    pub fn new(dataset: Dataset, config: StabilityConfig, factory: F) -> Self {
        Self {
            dataset,
            config,
            factory,
            events: EventDispatcher::new(),
            linguistic_variables: None,
        }
    }

    /// Observe trial progress through `events`.
    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    /// Hand the same precomputed partitions to every learner.
    pub fn with_linguistic_variables(mut self, variables: Vec<LinguisticVariable>) -> Self {
        self.linguistic_variables = Some(variables);
        self
    }

    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Run `n` trials and aggregate them.
    pub fn get_patterns_scores(&self, n: usize) -> Result<AggregateState, StabilityError> {
        if n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "trials.count".to_string(),
                message: "must be greater than 0".to_string(),
            }
            .into());
        }

        let mut trials = self.config.trials.clone();
        trials.count = Some(n);

        let mut learner = LearnerParams::from_config(&self.config.learner);
        if let Some(variables) = &self.linguistic_variables {
            learner = learner.with_linguistic_variables(variables.clone());
        }
        let fit = FitParams::from_config(&self.config.fit);

        let outcomes = run_trials(
            &self.dataset,
            &trials,
            &learner,
            &fit,
            &self.factory,
            &self.events,
        )?;
        Ok(aggregate(outcomes))
    }

    /// Run `n` trials, aggregate them and render the text report with the
    /// configured cutoffs and class names.
    pub fn stability_report(&self, n: usize) -> Result<(AggregateState, String), StabilityError> {
        let state = self.get_patterns_scores(n)?;
        let report_config = &self.config.report;
        let class_names = report_config.class_names_or_indices(state.n_classes());
        let report = render_text_report(
            &state,
            &class_names,
            report_config.effective_rule_cutoff(),
            report_config.effective_variable_cutoff(),
        )?;
        info!(trials = n, classes = state.n_classes(), "stability report rendered");
        Ok((state, report))
    }
}

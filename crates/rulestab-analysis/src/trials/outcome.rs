//! Result of one completed trial.

use serde::Serialize;

use crate::rules::MasterRuleBase;

/// The learned rule bases and holdout accuracy of trial `index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialOutcome {
    pub index: usize,
    pub rule_base: MasterRuleBase,
    pub accuracy: f64,
}

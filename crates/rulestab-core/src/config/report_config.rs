//! Text report configuration.

use serde::{Deserialize, Serialize};

/// Display cutoffs and naming for the stability report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Patterns listed per class. Default: 5.
    pub rule_cutoff: Option<usize>,
    /// Linguistic values listed per variable. Default: 10.
    pub variable_cutoff: Option<usize>,
    /// Display names for the output classes, in class-index order.
    /// Empty means "use the class index".
    #[serde(default)]
    pub class_names: Vec<String>,
}

impl ReportConfig {
    pub fn effective_rule_cutoff(&self) -> usize {
        self.rule_cutoff.unwrap_or(5)
    }

    pub fn effective_variable_cutoff(&self) -> usize {
        self.variable_cutoff.unwrap_or(10)
    }

    /// Returns the configured class names, or `"0"`, `"1"`, ... when none
    /// were configured.
    pub fn class_names_or_indices(&self, n_classes: usize) -> Vec<String> {
        if self.class_names.is_empty() {
            (0..n_classes).map(|ix| ix.to_string()).collect()
        } else {
            self.class_names.clone()
        }
    }
}

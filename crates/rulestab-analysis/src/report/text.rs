//! Plain-text stability report.

use rulestab_core::errors::ConfigError;

use super::ranking::{rank_class, RankedClass};
use crate::aggregation::AggregateState;

const RULE: &str = "-------------";

/// Render the stability report for every class, in class-index order.
///
/// `class_names` must name every aggregated class.
pub fn render_text_report(
    state: &AggregateState,
    class_names: &[String],
    rule_cutoff: usize,
    variable_cutoff: usize,
) -> Result<String, ConfigError> {
    if class_names.len() != state.n_classes() {
        return Err(ConfigError::ClassNameMismatch {
            expected: state.n_classes(),
            actual: class_names.len(),
        });
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Pattern stability report for {} generated solutions\n",
        state.n_trials()
    ));
    out.push_str(&format!(
        "Average accuracy: {:.2}±{:.2}\n",
        state.mean_accuracy(),
        state.std_accuracy()
    ));
    out.push_str(RULE);
    out.push('\n');

    for (class, name) in class_names.iter().enumerate() {
        if let Some(ranked) = rank_class(state, class, name, rule_cutoff, variable_cutoff) {
            write_class(&mut out, &ranked);
        }
    }

    Ok(out)
}

fn write_class(out: &mut String, ranked: &RankedClass) {
    out.push_str(&format!("Class {}\n", ranked.name));
    out.push_str(&format!("Number of unique patterns: {}\n", ranked.unique_patterns));
    for p in &ranked.patterns {
        let score = p.score.map_or_else(|| "n/a".to_string(), |s| s.to_string());
        out.push_str(&format!(
            "Pattern {} appears in {:.2} of the trials ({:.1}%) with a Dominance Score of {}\n",
            p.rendered,
            p.frequency,
            p.frequency * 100.0,
            score
        ));
    }
    out.push('\n');

    for variable in &ranked.variables {
        out.push_str(&format!("Variable {}\n", variable.name));
        for value in &variable.values {
            out.push_str(&format!("{} appears {:.2} times\n", value.name, value.frequency));
        }
        out.push('\n');
    }
    out.push('\n');
}

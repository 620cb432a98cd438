//! # rulestab-analysis
//!
//! Multi-trial stability analysis for stochastic fuzzy-rule learners:
//! trial orchestration → pattern extraction → cross-trial aggregation →
//! ranking and reporting.

pub mod aggregation;
pub mod learner;
pub mod patterns;
pub mod report;
pub mod rules;
pub mod stabilizer;
pub mod trials;

pub use aggregation::{aggregate, AggregateState, StabilityAggregator};
pub use learner::{Dataset, FitParams, LearnerFactory, LearnerParams, RuleLearner};
pub use patterns::{decode, encode, ClassStats, Pattern, PatternStats, VariableUsageCounter};
pub use report::{rank_class, render_text_report, RankedClass};
pub use rules::{LinguisticVariable, MasterRuleBase, Rule, RuleBase};
pub use stabilizer::PatternStabilizer;
pub use trials::{run_trials, TrialOutcome};

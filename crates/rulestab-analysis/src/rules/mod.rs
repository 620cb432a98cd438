//! Rule-base interchange types produced by the external learner.
//!
//! The analysis never looks inside a rule beyond its antecedent vector and
//! its quality score; everything else is the learner's business.

pub mod types;

pub use types::{LinguisticVariable, MasterRuleBase, Rule, RuleBase, UNUSED_ANTECEDENT};

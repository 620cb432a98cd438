//! Rules, per-class rule bases and the master rule base.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Antecedent value meaning "this slot is not used by the rule".
pub const UNUSED_ANTECEDENT: i32 = -1;

/// An input variable and the names of its linguistic values
/// (e.g. `petal length` → `low`, `medium`, `high`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinguisticVariable {
    pub name: String,
    pub values: Vec<String>,
}

impl LinguisticVariable {
    pub fn new<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of linguistic values (membership functions) of this variable.
    pub fn n_values(&self) -> usize {
        self.values.len()
    }

    /// Name of the linguistic value at `value`, `None` for the sentinel or
    /// an out-of-range index.
    pub fn value_name(&self, value: i32) -> Option<&str> {
        usize::try_from(value)
            .ok()
            .and_then(|ix| self.values.get(ix))
            .map(String::as_str)
    }

    /// Like `value_name`, but always yields something printable.
    pub fn display_value(&self, value: i32) -> String {
        match self.value_name(value) {
            Some(name) => name.to_string(),
            None => format!("#{value}"),
        }
    }
}

/// One learned rule: which linguistic value each antecedent slot uses, and
/// the learner's quality (dominance) score for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub antecedents: Vec<i32>,
    pub score: f64,
}

impl Rule {
    pub fn new(antecedents: Vec<i32>, score: f64) -> Self {
        Self { antecedents, score }
    }

    /// Number of slots the rule actually conditions on.
    pub fn used_antecedents(&self) -> usize {
        self.antecedents
            .iter()
            .filter(|&&v| v != UNUSED_ANTECEDENT)
            .count()
    }
}

/// The rules learned for one output class, plus the linguistic variables
/// their antecedent indices refer to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleBase {
    pub rules: Vec<Rule>,
    pub antecedents: Vec<LinguisticVariable>,
}

impl RuleBase {
    pub fn new(rules: Vec<Rule>, antecedents: Vec<LinguisticVariable>) -> Self {
        Self { rules, antecedents }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Antecedent vectors of every rule, in the rule base's native order.
    pub fn rule_matrix(&self) -> Vec<&[i32]> {
        self.rules.iter().map(|r| r.antecedents.as_slice()).collect()
    }

    /// Number of antecedent slots (input variables).
    pub fn n_slots(&self) -> usize {
        self.antecedents.len()
    }

    /// Linguistic values per slot.
    pub fn n_linguistic_values(&self) -> Vec<usize> {
        self.antecedents.iter().map(LinguisticVariable::n_values).collect()
    }

    /// Render an antecedent vector as `IF <var> IS <value> AND ...`.
    /// Unused slots are skipped; a vector with no used slot renders as
    /// `IF TRUE`.
    pub fn render(&self, antecedents: &[i32]) -> String {
        let clauses: Vec<String> = antecedents
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != UNUSED_ANTECEDENT)
            .map(|(slot, &v)| match self.antecedents.get(slot) {
                Some(var) => format!("{} IS {}", var.name, var.display_value(v)),
                None => format!("x{slot} IS #{v}"),
            })
            .collect();

        if clauses.is_empty() {
            "IF TRUE".to_string()
        } else {
            format!("IF {}", clauses.join(" AND "))
        }
    }

    /// Render the rule at `ix` in human-readable form.
    pub fn render_rule(&self, ix: usize) -> Option<String> {
        self.rules.get(ix).map(|r| self.render(&r.antecedents))
    }
}

impl Index<usize> for RuleBase {
    type Output = Rule;

    fn index(&self, ix: usize) -> &Rule {
        &self.rules[ix]
    }
}

/// One rule base per output class, in class-index order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MasterRuleBase {
    pub rule_bases: Vec<RuleBase>,
}

impl MasterRuleBase {
    pub fn new(rule_bases: Vec<RuleBase>) -> Self {
        Self { rule_bases }
    }

    pub fn n_classes(&self) -> usize {
        self.rule_bases.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleBase> {
        self.rule_bases.iter()
    }

    pub fn get(&self, class: usize) -> Option<&RuleBase> {
        self.rule_bases.get(class)
    }

    /// Total rules across all classes.
    pub fn n_rules(&self) -> usize {
        self.rule_bases.iter().map(RuleBase::len).sum()
    }
}

impl Index<usize> for MasterRuleBase {
    type Output = RuleBase;

    fn index(&self, class: usize) -> &RuleBase {
        &self.rule_bases[class]
    }
}

impl<'a> IntoIterator for &'a MasterRuleBase {
    type Item = &'a RuleBase;
    type IntoIter = std::slice::Iter<'a, RuleBase>;

    fn into_iter(self) -> Self::IntoIter {
        self.rule_bases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn petal_vars() -> Vec<LinguisticVariable> {
        vec![
            LinguisticVariable::new("petal length", ["low", "medium", "high"]),
            LinguisticVariable::new("petal width", ["low", "medium", "high"]),
        ]
    }

    #[test]
    fn render_skips_unused_slots() {
        let rb = RuleBase::new(vec![Rule::new(vec![2, -1], 0.9)], petal_vars());
        assert_eq!(rb.render_rule(0).unwrap(), "IF petal length IS high");
    }

    #[test]
    fn rule_matrix_follows_native_order() {
        let rb = RuleBase::new(
            vec![
                Rule::new(vec![2, -1], 0.9),
                Rule::new(vec![0, 1], 0.3),
                Rule::new(vec![2, -1], 0.1),
            ],
            petal_vars(),
        );
        let matrix = rb.rule_matrix();
        assert_eq!(matrix, vec![&[2, -1][..], &[0, 1][..], &[2, -1][..]]);
        assert!(RuleBase::new(vec![], petal_vars()).rule_matrix().is_empty());
    }

    #[test]
    fn render_joins_with_and() {
        let rb = RuleBase::new(vec![], petal_vars());
        assert_eq!(
            rb.render(&[0, 1]),
            "IF petal length IS low AND petal width IS medium"
        );
    }

    #[test]
    fn render_all_unused() {
        let rb = RuleBase::new(vec![], petal_vars());
        assert_eq!(rb.render(&[-1, -1]), "IF TRUE");
    }

    #[test]
    fn render_out_of_range_value() {
        let rb = RuleBase::new(vec![], petal_vars());
        assert_eq!(rb.render(&[7, -1]), "IF petal length IS #7");
    }

    #[test]
    fn value_name_rejects_sentinel() {
        let var = LinguisticVariable::new("sepal", ["low", "high"]);
        assert_eq!(var.value_name(UNUSED_ANTECEDENT), None);
        assert_eq!(var.value_name(1), Some("high"));
        assert_eq!(var.value_name(2), None);
    }

    #[test]
    fn master_counts_rules_across_classes() {
        let a = RuleBase::new(vec![Rule::new(vec![0, 1], 0.5); 3], petal_vars());
        let b = RuleBase::new(vec![Rule::new(vec![1, -1], 0.7)], petal_vars());
        let master = MasterRuleBase::new(vec![a, b]);
        assert_eq!(master.n_classes(), 2);
        assert_eq!(master.n_rules(), 4);
        assert_eq!(master[1][0].used_antecedents(), 1);
    }
}

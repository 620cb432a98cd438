//! Shared fixtures: a scripted learner and toy rule bases.
#![allow(dead_code)]

use std::sync::Arc;

use rulestab_analysis::learner::{Dataset, FitParams, LearnerParams, RuleLearner};
use rulestab_analysis::rules::{LinguisticVariable, MasterRuleBase, Rule, RuleBase};
use rulestab_analysis::trials::TrialOutcome;
use rulestab_core::errors::TrainingError;

/// How the scripted learner predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predict {
    /// Reads the label back from the first feature: accuracy 1.0.
    Echo,
    /// Always class 0.
    Zero,
    /// Returns nothing.
    Nothing,
}

/// A learner whose rule base for seed `s` is `script[s % script.len()]`.
pub struct ScriptedLearner {
    script: Arc<Vec<MasterRuleBase>>,
    failing_seeds: Arc<Vec<u64>>,
    predict: Predict,
    current: MasterRuleBase,
}

impl RuleLearner for ScriptedLearner {
    fn fit(&mut self, _train: &Dataset, params: &FitParams) -> Result<(), TrainingError> {
        let seed = params
            .random_seed
            .ok_or_else(|| TrainingError::Learner("missing seed".to_string()))?;
        if self.failing_seeds.contains(&seed) {
            return Err(TrainingError::NoValidRuleSet);
        }
        self.current = self.script[seed as usize % self.script.len()].clone();
        Ok(())
    }

    fn rule_base(&self) -> MasterRuleBase {
        self.current.clone()
    }

    fn forward(&self, features: &[Vec<f64>]) -> Vec<usize> {
        match self.predict {
            Predict::Echo => features.iter().map(|row| row[0] as usize).collect(),
            Predict::Zero => vec![0; features.len()],
            Predict::Nothing => Vec::new(),
        }
    }
}

pub fn scripted(
    script: Vec<MasterRuleBase>,
    failing_seeds: Vec<u64>,
    predict: Predict,
) -> impl Fn(&LearnerParams) -> ScriptedLearner + Sync {
    let script = Arc::new(script);
    let failing_seeds = Arc::new(failing_seeds);
    move |_params: &LearnerParams| ScriptedLearner {
        script: Arc::clone(&script),
        failing_seeds: Arc::clone(&failing_seeds),
        predict,
        current: MasterRuleBase::default(),
    }
}

/// `n` rows whose single feature is their label, labels alternating 0/1.
pub fn toy_dataset(n: usize) -> Dataset {
    Dataset::new(
        (0..n).map(|i| vec![(i % 2) as f64]).collect(),
        (0..n).map(|i| i % 2).collect(),
    )
    .unwrap()
}

pub fn one_slot_vars() -> Vec<LinguisticVariable> {
    vec![LinguisticVariable::new("x", ["low", "high"])]
}

pub fn two_slot_vars() -> Vec<LinguisticVariable> {
    vec![
        LinguisticVariable::new("x", ["low", "medium", "high"]),
        LinguisticVariable::new("y", ["low", "medium", "high"]),
    ]
}

/// Master rule base with one class per entry; each class holds the given
/// `(antecedents, score)` rules.
pub fn master(vars: &[LinguisticVariable], classes: Vec<Vec<(Vec<i32>, f64)>>) -> MasterRuleBase {
    MasterRuleBase::new(
        classes
            .into_iter()
            .map(|rules| {
                RuleBase::new(
                    rules.into_iter().map(|(a, s)| Rule::new(a, s)).collect(),
                    vars.to_vec(),
                )
            })
            .collect(),
    )
}

pub fn outcome(index: usize, rule_base: MasterRuleBase, accuracy: f64) -> TrialOutcome {
    TrialOutcome {
        index,
        rule_base,
        accuracy,
    }
}

/// The three-trial, two-class script: class 0 sees `[0]` at 0.8, `[0]` at
/// 0.5, then `[1]` at 0.9; class 1 always holds `[1]` at 0.4.
pub fn three_trial_script() -> Vec<MasterRuleBase> {
    let vars = one_slot_vars();
    vec![
        master(&vars, vec![vec![(vec![0], 0.8)], vec![(vec![1], 0.4)]]),
        master(&vars, vec![vec![(vec![0], 0.5)], vec![(vec![1], 0.4)]]),
        master(&vars, vec![vec![(vec![1], 0.9)], vec![(vec![1], 0.4)]]),
    ]
}

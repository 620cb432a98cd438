//! End-to-end stability runs over scripted learners.

mod common;

use common::*;
use rulestab_analysis::aggregation::aggregate;
use rulestab_analysis::patterns::encode;
use rulestab_analysis::report::{rank_class, render_text_report};
use rulestab_analysis::rules::LinguisticVariable;
use rulestab_analysis::PatternStabilizer;
use rulestab_core::config::StabilityConfig;
use rulestab_core::errors::{ConfigError, StabilityError};

fn stabilizer(config: StabilityConfig) -> PatternStabilizer<impl rulestab_analysis::LearnerFactory> {
    PatternStabilizer::new(
        toy_dataset(12),
        config,
        scripted(three_trial_script(), vec![], Predict::Echo),
    )
}

#[test]
fn three_trials_keep_first_score_and_count_repeats() {
    let state = stabilizer(StabilityConfig::default())
        .get_patterns_scores(3)
        .unwrap();

    let class0 = &state.class(0).unwrap().patterns;
    assert_eq!(class0.count(&encode(&[0])), 2);
    assert_eq!(class0.count(&encode(&[1])), 1);
    assert_eq!(class0.unique_patterns(), 2);
    assert_eq!(class0.score(&encode(&[0])), Some(0.8));
    assert_eq!(class0.score(&encode(&[1])), Some(0.9));

    let class1 = &state.class(1).unwrap().patterns;
    assert_eq!(class1.count(&encode(&[1])), 3);
    assert_eq!(state.n_trials(), 3);
}

#[test]
fn three_trial_report() {
    let (_, report) = stabilizer(StabilityConfig::default())
        .stability_report(3)
        .unwrap();

    let expected_class0 = "\
Class 0
Number of unique patterns: 2
Pattern IF x IS low appears in 0.67 of the trials (66.7%) with a Dominance Score of 0.8
Pattern IF x IS high appears in 0.33 of the trials (33.3%) with a Dominance Score of 0.9

Variable x
low appears 0.67 times
high appears 0.33 times
";
    assert!(report.starts_with(
        "Pattern stability report for 3 generated solutions\nAverage accuracy: 1.00±0.00\n-------------\n"
    ));
    assert!(report.contains(expected_class0), "report was:\n{report}");
    assert!(report.contains("Class 1\nNumber of unique patterns: 1\n"));
}

#[test]
fn configured_class_names_are_used() {
    let config = StabilityConfig::from_toml(
        r#"
[report]
class_names = ["setosa", "versicolor"]
"#,
    )
    .unwrap();
    let (_, report) = stabilizer(config).stability_report(3).unwrap();
    assert!(report.contains("Class setosa\n"));
    assert!(report.contains("Class versicolor\n"));
}

#[test]
fn wrong_number_of_class_names_is_rejected() {
    let config = StabilityConfig::from_toml(
        r#"
[report]
class_names = ["only-one"]
"#,
    )
    .unwrap();
    let err = stabilizer(config).stability_report(3).unwrap_err();
    assert!(matches!(
        err,
        StabilityError::Config(ConfigError::ClassNameMismatch {
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn zero_trials_is_a_config_error() {
    let err = stabilizer(StabilityConfig::default())
        .get_patterns_scores(0)
        .unwrap_err();
    assert!(matches!(err, StabilityError::Config(ConfigError::ValidationFailed { .. })));
}

#[test]
fn parallel_run_matches_sequential() {
    let sequential = stabilizer(StabilityConfig::default())
        .get_patterns_scores(9)
        .unwrap();

    let mut config = StabilityConfig::default();
    config.trials.parallelism = Some(4);
    let parallel = stabilizer(config).get_patterns_scores(9).unwrap();

    assert_eq!(sequential, parallel);
    // first-write-wins still resolves to trial 0's score
    assert_eq!(
        parallel.class(0).unwrap().patterns.score(&encode(&[0])),
        Some(0.8)
    );
}

#[test]
fn frequency_is_count_over_trials() {
    let vars = one_slot_vars();
    let outcomes = (0..10)
        .map(|ix| {
            let antecedent = if [0, 3, 7].contains(&ix) { 0 } else { 1 };
            outcome(ix, master(&vars, vec![vec![(vec![antecedent], 0.5)]]), 0.9)
        })
        .collect();
    let state = aggregate(outcomes);

    assert_eq!(state.occurrence_frequency(0, &encode(&[0])), Some(0.3));
    let report = render_text_report(&state, &["a".to_string()], 5, 10).unwrap();
    assert!(report.contains("Pattern IF x IS low appears in 0.30 of the trials (30.0%)"));
    assert!(report.contains("Pattern IF x IS high appears in 0.70 of the trials (70.0%)"));
}

#[test]
fn unused_value_stays_at_zero_and_is_not_reported() {
    let vars = two_slot_vars();
    let outcomes = vec![
        outcome(0, master(&vars, vec![vec![(vec![0, 2], 0.5)]]), 1.0),
        outcome(1, master(&vars, vec![vec![(vec![2, -1], 0.5)]]), 1.0),
    ];
    let state = aggregate(outcomes);
    let usage = &state.class(0).unwrap().usage;

    // "medium" was seeded but never used
    assert!(usage.contains(0, 1));
    assert_eq!(usage.count(0, 1), 0);

    let report = render_text_report(&state, &["c".to_string()], 5, 10).unwrap();
    assert!(!report.contains("medium appears"));
    assert!(report.contains("Variable x\nlow appears 0.50 times\nhigh appears 0.50 times\n"));
}

#[test]
fn slot_with_only_unused_entries_is_skipped() {
    let vars = two_slot_vars();
    let state = aggregate(vec![outcome(
        0,
        master(&vars, vec![vec![(vec![1, -1], 0.5), (vec![0, -1], 0.6)]]),
        1.0,
    )]);
    let ranked = rank_class(&state, 0, "c", 5, 10).unwrap();
    assert_eq!(ranked.variables.len(), 1);
    assert_eq!(ranked.variables[0].name, "x");

    let report = render_text_report(&state, &["c".to_string()], 5, 10).unwrap();
    assert!(!report.contains("Variable y"));
}

#[test]
fn cutoffs_limit_listed_patterns_and_values() {
    let vars = two_slot_vars();
    let state = aggregate(vec![
        outcome(0, master(&vars, vec![vec![(vec![0, 0], 0.1), (vec![1, 0], 0.2)]]), 1.0),
        outcome(1, master(&vars, vec![vec![(vec![0, 0], 0.1), (vec![2, 0], 0.3)]]), 1.0),
    ]);

    let ranked = rank_class(&state, 0, "c", 2, 1).unwrap();
    assert_eq!(ranked.unique_patterns, 3);
    assert_eq!(ranked.patterns.len(), 2);
    assert_eq!(ranked.patterns[0].pattern, encode(&[0, 0]));
    // [1, 0] was seen before [2, 0]; the tie keeps that order
    assert_eq!(ranked.patterns[1].pattern, encode(&[1, 0]));

    let x = &ranked.variables[0];
    assert_eq!(x.values.len(), 1);
    assert_eq!(x.values[0].name, "low");
    assert_eq!(x.values[0].count, 2);
}

#[test]
fn coverage_matches_rules_per_class() {
    let vars = two_slot_vars();
    let script = vec![
        master(&vars, vec![vec![(vec![0, 1], 0.2); 3], vec![(vec![-1, 2], 0.4)]]),
        master(&vars, vec![vec![(vec![2, -1], 0.2)], vec![(vec![1, 1], 0.5); 2]]),
    ];
    let outcomes: Vec<_> = script
        .iter()
        .enumerate()
        .map(|(ix, m)| outcome(ix, m.clone(), 1.0))
        .collect();
    let state = aggregate(outcomes);

    for class in 0..2 {
        let rules: usize = script.iter().map(|m| m[class].len()).sum();
        let stats = state.class(class).unwrap();
        assert_eq!(stats.patterns.total_rules(), rules as u64);
        for slot in 0..2 {
            assert_eq!(stats.usage.slot_total(slot), rules as u64);
        }
    }
}

#[test]
fn aggregate_state_serializes() {
    let state = stabilizer(StabilityConfig::default())
        .get_patterns_scores(3)
        .unwrap();
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["n_trials"], 3);
    assert_eq!(json["classes"][0]["patterns"]["counts"][0][0], "[0]");
    assert_eq!(json["classes"][0]["patterns"]["counts"][0][1], 2);
}

#[test]
fn nan_scores_do_not_break_descending_order() {
    let vars = vec![
        LinguisticVariable::new("x", (0..15).map(|i| format!("x{i}"))),
        LinguisticVariable::new("y", (0..10).map(|i| format!("y{i}"))),
    ];
    let rules = (0..150)
        .map(|i| {
            let score = if i % 7 == 0 {
                f64::NAN
            } else {
                ((i * 37) % 101) as f64 / 100.0
            };
            (vec![(i / 10) as i32, (i % 10) as i32], score)
        })
        .collect();
    let state = aggregate(vec![outcome(0, master(&vars, vec![rules]), 1.0)]);

    let scores: Vec<f64> = state.class(0).unwrap().patterns.scores().values().copied().collect();
    assert_eq!(scores.len(), 150);
    let ordered = scores.iter().take_while(|s| !s.is_nan()).count();
    assert_eq!(ordered, 150 - 22);
    assert!(scores[ordered..].iter().all(|s| s.is_nan()));
    assert!(scores[..ordered].windows(2).all(|w| w[0] >= w[1]));
}

//! Property tests for the codec, the merge operators and the trial fold.

mod common;

use common::*;
use proptest::prelude::*;
use rulestab_analysis::aggregation::aggregate;
use rulestab_analysis::patterns::{decode, encode, merge_additive, merge_first_write_wins, OrderedMap};
use rulestab_analysis::rules::MasterRuleBase;

fn count_map() -> impl Strategy<Value = OrderedMap<u8, u64>> {
    prop::collection::vec((0u8..12, 0u64..1000), 0..10)
        .prop_map(|pairs| pairs.into_iter().collect())
}

/// Random trials over the two-slot variables: per trial, 1-2 classes of
/// 0-4 rules each.
fn trial_script() -> impl Strategy<Value = Vec<MasterRuleBase>> {
    let rule = (prop::collection::vec(-1i32..3, 2), 0.0f64..1.0);
    let class = prop::collection::vec(rule, 0..4);
    let trial = prop::collection::vec(class, 1..3);
    prop::collection::vec(trial, 1..6).prop_map(|trials| {
        let vars = two_slot_vars();
        trials
            .into_iter()
            .map(|classes| master(&vars, classes))
            .collect()
    })
}

proptest! {
    #[test]
    fn codec_round_trips(v in prop::collection::vec(any::<i32>(), 0..12)) {
        prop_assert_eq!(decode(encode(&v)).unwrap(), v);
    }

    #[test]
    fn additive_merge_is_commutative(a in count_map(), b in count_map()) {
        let mut ab = a.clone();
        merge_additive(&mut ab, &b);
        let mut ba = b.clone();
        merge_additive(&mut ba, &a);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn additive_merge_is_associative(a in count_map(), b in count_map(), c in count_map()) {
        let mut left = a.clone();
        merge_additive(&mut left, &b);
        merge_additive(&mut left, &c);

        let mut bc = b.clone();
        merge_additive(&mut bc, &c);
        let mut right = a.clone();
        merge_additive(&mut right, &bc);

        prop_assert_eq!(left, right);
    }

    #[test]
    fn first_write_wins_keeps_left_values(a in count_map(), b in count_map()) {
        let mut merged = a.clone();
        merge_first_write_wins(&mut merged, &b);
        for (k, v) in b.iter() {
            let expected = a.get(k).unwrap_or(v);
            prop_assert_eq!(merged.get(k), Some(expected));
        }
        for (k, v) in a.iter() {
            prop_assert_eq!(merged.get(k), Some(v));
        }
    }

    #[test]
    fn counts_do_not_depend_on_fold_order(script in trial_script()) {
        let forward = aggregate(
            script.iter().enumerate().map(|(ix, m)| outcome(ix, m.clone(), 1.0)).collect(),
        );
        let n = script.len();
        let backward = aggregate(
            script.iter().enumerate().map(|(ix, m)| outcome(n - 1 - ix, m.clone(), 1.0)).collect(),
        );

        prop_assert_eq!(forward.n_classes(), backward.n_classes());
        for class in 0..forward.n_classes() {
            let f = forward.class(class).unwrap();
            let b = backward.class(class).unwrap();
            prop_assert_eq!(f.patterns.counts(), b.patterns.counts());
            prop_assert_eq!(&f.usage, &b.usage);
        }
    }

    #[test]
    fn every_rule_is_counted_once(script in trial_script()) {
        let state = aggregate(
            script.iter().enumerate().map(|(ix, m)| outcome(ix, m.clone(), 1.0)).collect(),
        );
        for class in 0..state.n_classes() {
            let rules: usize = script
                .iter()
                .filter_map(|m| m.get(class))
                .map(|rb| rb.len())
                .sum();
            let stats = state.class(class).unwrap();
            prop_assert_eq!(stats.patterns.total_rules(), rules as u64);
            for slot in 0..2 {
                prop_assert_eq!(stats.usage.slot_total(slot), rules as u64);
            }
        }
    }
}

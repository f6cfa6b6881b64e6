//! Top-k invariants.

use alignqa::{extract_top_k, ScoredPassage};
use proptest::prelude::*;

fn passages() -> impl Strategy<Value = Vec<ScoredPassage>> {
    // few distinct scores, so ties are common
    prop::collection::vec(-5i32..=0, 0..40).prop_map(|scores| {
        scores
            .into_iter()
            .enumerate()
            .map(|(i, s)| ScoredPassage::new(i.to_string(), "", f64::from(s)))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_top_k_idempotent(input in passages(), k in 0usize..50) {
        let once = extract_top_k(input, k);
        let twice = extract_top_k(once.clone().into_vec(), k);
        prop_assert_eq!(once, twice);
    }

    /// With k ≥ n everything comes back, sorted, ties in input order.
    #[test]
    fn prop_full_ranking_is_stable_sort(input in passages()) {
        let n = input.len();
        let ranked = extract_top_k(input.clone(), n + 3);
        prop_assert_eq!(ranked.len(), n);
        for pair in ranked.as_slice().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let a: usize = pair[0].id.parse().unwrap();
                let b: usize = pair[1].id.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    /// Top-k is a prefix of the full ranking.
    #[test]
    fn prop_top_k_is_prefix(input in passages(), k in 0usize..50) {
        let full = extract_top_k(input.clone(), usize::MAX);
        let top = extract_top_k(input, k);
        let expected = &full.as_slice()[..k.min(full.len())];
        prop_assert_eq!(top.as_slice(), expected);
    }
}

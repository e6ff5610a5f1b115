use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use skillrec::matching::{
    ScoreVector, SelectionPolicy, Selector, Vocabulary, cosine, normalize, score,
};

proptest! {
    #[test]
    fn test_normalized_tokens_are_clean(raw in "[A-Za-z ,./+#]{0,60}") {
        for token in normalize(&raw) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
            prop_assert!(!token.contains(','));
            prop_assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_unknown_tokens_encode_to_zero(
        known in prop::collection::vec("[a-m]{1,8}", 1..10),
        unknown in prop::collection::vec("[n-z]{1,8}", 0..10),
    ) {
        let vocab = Vocabulary::fit(vec![known]);
        let vector = vocab.encode(&unknown);
        prop_assert!(vector.is_zero());
        prop_assert_eq!(vector.len(), vocab.len());
    }

    #[test]
    fn test_vector_is_binary(
        corpus in prop::collection::vec(prop::collection::vec("[a-f]{1,3}", 0..6), 1..6),
        query in prop::collection::vec("[a-f]{1,3}", 0..10),
    ) {
        let vocab = Vocabulary::fit(&corpus);
        let vector = vocab.encode(&query);
        prop_assert!(vector.as_slice().iter().all(|v| *v == 0.0 || *v == 1.0));
        let expected: HashSet<&str> = vocab.known_tokens(&query).into_iter().collect();
        prop_assert_eq!(vector.active_count(), expected.len());
    }

    #[test]
    fn test_scores_are_bounded(
        corpus in prop::collection::vec(prop::collection::vec("[a-f]{1,3}", 0..6), 1..8),
        query in prop::collection::vec("[a-f]{1,3}", 0..6),
    ) {
        let vocab = Vocabulary::fit(&corpus);
        let query_vector = vocab.encode(&query);
        let candidates = vocab.encode_many(&corpus);
        let scores = score(&query_vector, &candidates).expect("same vocabulary");
        prop_assert_eq!(scores.len(), corpus.len());
        for value in scores.as_slice() {
            prop_assert!((0.0..=1.0).contains(value));
        }
        for candidate in &candidates {
            let forward = cosine(query_vector.as_slice(), candidate.as_slice());
            let backward = cosine(candidate.as_slice(), query_vector.as_slice());
            prop_assert!((forward - backward).abs() < 1e-6);
        }
    }

    #[test]
    fn test_selection_is_bounded_and_distinct(
        scores in prop::collection::vec(0.0f32..=1.0, 0..40),
        top_n in 0usize..12,
        seed in any::<u64>(),
    ) {
        let len = scores.len();
        let scores = ScoreVector::new(scores, true);
        for policy in [SelectionPolicy::TieShuffle, SelectionPolicy::ShuffleSample] {
            let picked = Selector::new(policy).select(&scores, top_n, &mut StdRng::seed_from_u64(seed));
            prop_assert!(picked.len() <= top_n.min(len));
            prop_assert!(picked.iter().all(|&i| i < len));
            let distinct: HashSet<usize> = picked.iter().copied().collect();
            prop_assert_eq!(distinct.len(), picked.len());
        }
    }

    #[test]
    fn test_tie_shuffle_never_skips_a_better_candidate(
        scores in prop::collection::vec(0.0f32..=1.0, 1..40),
        top_n in 1usize..12,
        seed in any::<u64>(),
    ) {
        let values = scores.clone();
        let scores = ScoreVector::new(scores, true);
        let selector = Selector::default();
        let picked = selector.select(&scores, top_n, &mut StdRng::seed_from_u64(seed));
        let chosen: HashSet<usize> = picked.iter().copied().collect();
        let any_overlap = values.iter().any(|v| *v > 0.0);

        for (i, value) in values.iter().enumerate() {
            if chosen.contains(&i) || (any_overlap && *value == 0.0) {
                continue;
            }
            for &j in &picked {
                prop_assert!(values[j] >= value - selector.tie_epsilon() - 1e-7);
            }
        }
    }
}

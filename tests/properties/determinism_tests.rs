use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use skillrec::matching::{ScoreVector, SelectionPolicy, Selector, Vocabulary, normalize};

fn skill_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z ,./+#]{0,40}", 0..12)
}

proptest! {
    #[test]
    fn test_fit_deterministic(raw in skill_lists()) {
        let corpus: Vec<Vec<String>> = raw.iter().map(|s| normalize(s)).collect();
        let first = Vocabulary::fit(&corpus);
        let second = Vocabulary::fit(&corpus);
        prop_assert_eq!(first.tokens(), second.tokens());
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn test_fit_ignores_corpus_order(raw in skill_lists()) {
        let corpus: Vec<Vec<String>> = raw.iter().map(|s| normalize(s)).collect();
        let mut reversed = corpus.clone();
        reversed.reverse();
        let forward = Vocabulary::fit(&corpus);
        let backward = Vocabulary::fit(&reversed);
        prop_assert_eq!(forward.tokens(), backward.tokens());
    }

    #[test]
    fn test_encode_deterministic(raw in skill_lists(), query in "[A-Za-z ,]{0,30}") {
        let corpus: Vec<Vec<String>> = raw.iter().map(|s| normalize(s)).collect();
        let vocab = Vocabulary::fit(&corpus);
        let tokens = normalize(&query);
        prop_assert_eq!(vocab.encode(&tokens), vocab.encode(&tokens));
    }

    #[test]
    fn test_seeded_selection_repeats(
        scores in prop::collection::vec(0.0f32..=1.0, 0..40),
        top_n in 0usize..10,
        seed in any::<u64>(),
    ) {
        let scores = ScoreVector::new(scores, true);
        for policy in [SelectionPolicy::TieShuffle, SelectionPolicy::ShuffleSample] {
            let selector = Selector::new(policy);
            let first = selector.select(&scores, top_n, &mut StdRng::seed_from_u64(seed));
            let second = selector.select(&scores, top_n, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(first, second);
        }
    }
}

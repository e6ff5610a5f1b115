use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use skillrec::matching::{ScoreVector, SelectionPolicy, Selector, Vocabulary, score};

#[test]
fn unmatched_query_selects_nothing_regardless_of_candidates() {
    let vocab = Vocabulary::fit(vec![vec!["python", "sql"], vec!["java"]]);
    let query = vocab.encode(&["cobol"]);
    assert!(query.is_zero());

    let candidates = vocab.encode_many(&[vec!["python"], vec!["java", "sql"]]);
    let scores = score(&query, &candidates).expect("same vocabulary");

    for policy in [SelectionPolicy::TieShuffle, SelectionPolicy::ShuffleSample] {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Selector::new(policy).select(&scores, 5, &mut rng).is_empty());
    }
}

#[test]
fn tied_pair_beats_weaker_candidate_every_time() {
    let scores = ScoreVector::new(vec![0.8, 0.8, 0.1], true);
    let selector = Selector::default();
    let mut seen_orders = HashSet::new();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = selector.select(&scores, 2, &mut rng);
        assert_eq!(picked.len(), 2);
        assert!(picked.contains(&0));
        assert!(picked.contains(&1));
        assert!(!picked.contains(&2));
        seen_orders.insert(picked);
    }

    assert!(seen_orders.contains(&vec![0, 1]));
    assert!(seen_orders.contains(&vec![1, 0]));
}

#[test]
fn empty_candidate_list_is_not_an_error() {
    let scores = ScoreVector::new(Vec::new(), true);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(Selector::default().select(&scores, 3, &mut rng).is_empty());
}

#[test]
fn result_length_is_bounded() {
    let scores = ScoreVector::new(vec![0.9, 0.5, 0.5, 0.2], true);
    for top_n in 0..8 {
        let mut rng = StdRng::seed_from_u64(top_n as u64);
        let picked = Selector::default().select(&scores, top_n, &mut rng);
        assert_eq!(picked.len(), top_n.min(4));
        let distinct: HashSet<_> = picked.iter().collect();
        assert_eq!(distinct.len(), picked.len());
    }
}

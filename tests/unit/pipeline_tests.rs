use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::Value;

use skillrec::SkillrecError;
use skillrec::matching::{Recommender, SharedVocabulary};
use skillrec::test_utils::fixtures::{UnitTestFixture, sample_projects};

fn projects() -> Vec<Value> {
    sample_projects().as_array().cloned().unwrap_or_default()
}

fn ids(values: &[Value]) -> Vec<i64> {
    let mut ids: Vec<i64> = values
        .iter()
        .filter_map(|value| value["project_id"].as_i64())
        .collect();
    ids.sort_unstable();
    ids
}

fn recommender(fixture: &UnitTestFixture) -> Recommender {
    let path = fixture.create_vocabulary("vocab.json");
    Recommender::new(Arc::new(SharedVocabulary::open(&path)))
}

#[test]
fn python_profile_gets_python_projects() {
    let fixture = UnitTestFixture::new();
    let rec = recommender(&fixture);
    let mut rng = StdRng::seed_from_u64(21);

    let out = rec
        .recommend("Python, SQL", projects(), 5, &mut rng)
        .expect("vocabulary loaded");
    assert_eq!(ids(&out), vec![1, 4]);
}

#[test]
fn top_n_truncates_results() {
    let fixture = UnitTestFixture::new();
    let rec = recommender(&fixture);
    let mut rng = StdRng::seed_from_u64(2);

    let out = rec
        .recommend("python, react, aws, cryptography", projects(), 2, &mut rng)
        .expect("vocabulary loaded");
    assert_eq!(out.len(), 2);
}

#[test]
fn missing_artifact_fails_closed() {
    let fixture = UnitTestFixture::new();
    let shared = SharedVocabulary::open(&fixture.data_path.join("missing.json"));
    assert!(!shared.is_loaded());

    let rec = Recommender::new(Arc::new(shared));
    let mut rng = StdRng::seed_from_u64(0);
    let err = rec
        .recommend("python", projects(), 5, &mut rng)
        .expect_err("no vocabulary");
    assert!(matches!(err, SkillrecError::VocabularyUnavailable(_)));
}

#[test]
fn in_flight_snapshot_is_unaffected_by_refit() {
    let fixture = UnitTestFixture::new();
    let rec = recommender(&fixture);
    let snapshot = rec.vocabulary().snapshot().expect("loaded");

    rec.vocabulary().refit(vec![vec!["cobol"]]);

    assert!(snapshot.contains("python"));
    let mut rng = StdRng::seed_from_u64(0);
    let out = rec
        .recommend("python", projects(), 5, &mut rng)
        .expect("vocabulary loaded");
    assert!(out.is_empty(), "new vocabulary no longer knows python");
}

use skillrec::matching::{Vocabulary, normalize};
use skillrec::storage::{load_vocabulary, save_vocabulary};
use skillrec::test_utils::fixtures::{UnitTestFixture, sample_corpus};
use skillrec::test_utils::{TestCase, run_table_tests};

fn scenario_a() -> Vocabulary {
    Vocabulary::fit(vec![vec!["python", "sql"], vec!["java"]])
}

#[test]
fn scenario_a_encoding() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "python_sql",
            input: vec!["python", "sql"],
            expected: vec![0.0f32, 1.0, 1.0],
            should_panic: false,
        },
        TestCase {
            name: "java_only",
            input: vec!["java"],
            expected: vec![1.0f32, 0.0, 0.0],
            should_panic: false,
        },
        TestCase {
            name: "unknown_dropped",
            input: vec!["cobol", "sql"],
            expected: vec![0.0f32, 0.0, 1.0],
            should_panic: false,
        },
        TestCase {
            name: "all_unknown",
            input: vec!["cobol"],
            expected: vec![0.0f32, 0.0, 0.0],
            should_panic: false,
        },
    ];

    run_table_tests(cases, |tokens| scenario_a().encode(&tokens).as_slice().to_vec())?;
    Ok(())
}

#[test]
fn vocabulary_is_sorted_and_contiguous() {
    let corpus: Vec<Vec<String>> = sample_corpus().into_iter().map(normalize).collect();
    let vocab = Vocabulary::fit(&corpus);

    let tokens = vocab.tokens();
    assert!(tokens.windows(2).all(|pair| pair[0] < pair[1]));
    for (dim, token) in tokens.iter().enumerate() {
        assert_eq!(vocab.index_of(token), Some(dim));
    }
    assert!(vocab.contains("ci/cd"));
    assert!(!vocab.contains("CI/CD"));
}

#[test]
fn encode_many_keeps_row_order() {
    let vocab = scenario_a();
    let rows = vocab.encode_many(&[vec!["sql"], vec!["java"], vec![]]);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].active_dims(), vec![2]);
    assert_eq!(rows[1].active_dims(), vec![0]);
    assert!(rows[2].is_zero());
}

#[test]
fn artifact_round_trip_keeps_dimensions() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_vocabulary("vocab.json");
    let loaded = load_vocabulary(&path).expect("load vocabulary");

    let again = fixture.data_path.join("copy.json");
    save_vocabulary(&again, &loaded).expect("save vocabulary");
    let reloaded = load_vocabulary(&again).expect("reload vocabulary");

    assert_eq!(loaded.tokens(), reloaded.tokens());
    let tokens = normalize("python, docker");
    assert_eq!(loaded.encode(&tokens), reloaded.encode(&tokens));
}

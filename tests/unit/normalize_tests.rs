use serde_json::json;
use skillrec::matching::{normalize, normalize_value};
use skillrec::test_utils::{TestCase, run_table_tests};

#[test]
fn normalize_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "simple_list",
            input: "Python, SQL",
            expected: vec!["python".to_string(), "sql".to_string()],
            should_panic: false,
        },
        TestCase {
            name: "no_space_after_comma",
            input: "Docker,Kubernetes",
            expected: vec!["docker".to_string(), "kubernetes".to_string()],
            should_panic: false,
        },
        TestCase {
            name: "padding_and_case",
            input: "  Machine Learning ,  NLP  ",
            expected: vec!["machine learning".to_string(), "nlp".to_string()],
            should_panic: false,
        },
        TestCase {
            name: "empty_pieces_dropped",
            input: ",,React,,",
            expected: vec!["react".to_string()],
            should_panic: false,
        },
        TestCase {
            name: "slashes_and_dots_kept",
            input: "CI/CD, Node.js, UI/UX Design",
            expected: vec![
                "ci/cd".to_string(),
                "node.js".to_string(),
                "ui/ux design".to_string(),
            ],
            should_panic: false,
        },
        TestCase {
            name: "empty_input",
            input: "",
            expected: Vec::new(),
            should_panic: false,
        },
    ];

    run_table_tests(cases, normalize)?;
    Ok(())
}

#[test]
fn json_values_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "null",
            input: json!(null),
            expected: Vec::<String>::new(),
            should_panic: false,
        },
        TestCase {
            name: "number",
            input: json!(3.5),
            expected: vec!["3.5".to_string()],
            should_panic: false,
        },
        TestCase {
            name: "array_of_strings",
            input: json!(["Go", "Rust, WASM"]),
            expected: vec!["go".to_string(), "rust".to_string(), "wasm".to_string()],
            should_panic: false,
        },
    ];

    run_table_tests(cases, |value| normalize_value(&value))?;
    Ok(())
}

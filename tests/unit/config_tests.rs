use std::fs;
use std::path::PathBuf;

use skillrec::config::{Config, RobotFormat};
use skillrec::matching::SelectionPolicy;
use skillrec::test_utils::{TestCase, run_table_tests};

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn recommend_section_from_fixture() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "custom",
            input: "tests/fixtures/configs/custom.toml",
            expected: (3u32, false, SelectionPolicy::ShuffleSample, Some(42u64)),
            should_panic: false,
        },
        TestCase {
            name: "default",
            input: "tests/fixtures/configs/default.toml",
            expected: (5u32, true, SelectionPolicy::TieShuffle, None),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |relative_path| {
        let path = fixture_path(relative_path);
        let content = fs::read_to_string(&path).expect("read fixture");
        let config: Config = toml::from_str(&content).expect("parse config");
        (
            config.recommend.top_n,
            config.recommend.shuffle_candidates,
            config.recommend.policy,
            config.recommend.seed,
        )
    })?;
    Ok(())
}

#[test]
fn vocabulary_and_robot_from_fixture() {
    let content =
        fs::read_to_string(fixture_path("tests/fixtures/configs/custom.toml")).expect("read fixture");
    let config: Config = toml::from_str(&content).expect("parse config");
    assert_eq!(
        config.vocabulary.path,
        PathBuf::from("/var/lib/skillrec/vocab.json")
    );
    assert!((config.recommend.tie_epsilon - 0.01).abs() < f32::EPSILON);
    assert_eq!(config.robot.format, RobotFormat::Json);
    assert!(!config.robot.include_metadata);
}

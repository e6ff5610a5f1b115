use std::path::PathBuf;

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::matching::Vocabulary;
use crate::storage::save_vocabulary;

/// Test fixture providing isolated filesystem environment.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();

        println!("[FIXTURE] Created temp directory: {data_path:?}");

        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a test file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Fit the sample vocabulary and save it as an artifact.
    #[must_use]
    pub fn create_vocabulary(&self, relative_path: &str) -> PathBuf {
        let path = self.data_path.join(relative_path);
        let corpus: Vec<Vec<String>> = sample_corpus()
            .iter()
            .map(|skills| crate::matching::normalize(skills))
            .collect();
        save_vocabulary(&path, &Vocabulary::fit(&corpus)).expect("Failed to save vocabulary");
        println!("[FIXTURE] Created vocabulary: {path:?}");
        path
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}

/// Skill strings covering every sample project plus a few student profiles.
#[must_use]
pub fn sample_corpus() -> Vec<&'static str> {
    vec![
        "Python, Machine Learning, Deep Learning, TensorFlow",
        "JavaScript, React, Node.js, REST API",
        "AWS, Docker, Kubernetes, CI/CD",
        "Python, Data Analysis, SQL, Data Visualization",
        "Cybersecurity, Cryptography, Network Security",
        "Linux, Python, Networking",
    ]
}

/// Candidate projects in the shape the recommend endpoint receives.
#[must_use]
pub fn sample_projects() -> Value {
    json!([
        {"project_id": 1, "title": "AI/ML Project 1", "tech_stack": "Python, Machine Learning, Deep Learning, TensorFlow"},
        {"project_id": 2, "title": "Web Dev Project 2", "tech_stack": "JavaScript, React, Node.js, REST API"},
        {"project_id": 3, "title": "Cloud Project 3", "tech_stack": "AWS, Docker, Kubernetes, CI/CD"},
        {"project_id": 4, "title": "Data Science Project 4", "tech_stack": "Python, Data Analysis, SQL, Data Visualization"},
        {"project_id": 5, "title": "Security Project 5", "tech_stack": "Cybersecurity, Cryptography, Network Security"}
    ])
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkillrecError};
use crate::matching::SelectionPolicy;
use crate::matching::selector::DEFAULT_TIE_EPSILON;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub robot: RobotConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SKILLREC_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillrec/config.toml"))
    }

    fn load_project(root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&root.join("config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            SkillrecError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            SkillrecError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.vocabulary {
            self.vocabulary.merge(patch);
        }
        if let Some(patch) = patch.recommend {
            self.recommend.merge(patch);
        }
        if let Some(patch) = patch.robot {
            self.robot.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("SKILLREC_VOCABULARY_PATH") {
            self.vocabulary.path = PathBuf::from(value);
        }

        if let Some(value) = env_u32("SKILLREC_TOP_N")? {
            self.recommend.top_n = value;
        }
        if let Some(value) = env_bool("SKILLREC_SHUFFLE_CANDIDATES") {
            self.recommend.shuffle_candidates = value;
        }
        if let Some(value) = env_string("SKILLREC_POLICY") {
            self.recommend.policy = value.parse().map_err(SkillrecError::Config)?;
        }
        if let Some(value) = env_f32("SKILLREC_TIE_EPSILON")? {
            self.recommend.tie_epsilon = value;
        }
        if let Some(value) = env_u64("SKILLREC_SEED")? {
            self.recommend.seed = Some(value);
        }

        if let Some(value) = env_string("SKILLREC_ROBOT_FORMAT") {
            self.robot.format = value.parse().map_err(SkillrecError::Config)?;
        }
        if let Some(value) = env_bool("SKILLREC_ROBOT_INCLUDE_METADATA") {
            self.robot.include_metadata = value;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.recommend.tie_epsilon.is_finite() || self.recommend.tie_epsilon < 0.0 {
            return Err(SkillrecError::Config(format!(
                "recommend.tie_epsilon must be a non-negative number, got {}",
                self.recommend.tie_epsilon
            )));
        }
        if self.vocabulary.path.as_os_str().is_empty() {
            return Err(SkillrecError::Config(
                "vocabulary.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default = "default_vocabulary_path")]
    pub path: PathBuf,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: default_vocabulary_path(),
        }
    }
}

impl VocabularyConfig {
    fn merge(&mut self, patch: VocabularyPatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }

    /// Vocabulary path, relative paths resolved against `root`.
    #[must_use]
    pub fn resolved_path(&self, root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            root.join(&self.path)
        }
    }
}

fn default_vocabulary_path() -> PathBuf {
    PathBuf::from("skills_vocabulary.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_top_n")]
    pub top_n: u32,
    #[serde(default = "default_true")]
    pub shuffle_candidates: bool,
    #[serde(default)]
    pub policy: SelectionPolicy,
    #[serde(default = "default_tie_epsilon")]
    pub tie_epsilon: f32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            shuffle_candidates: true,
            policy: SelectionPolicy::TieShuffle,
            tie_epsilon: DEFAULT_TIE_EPSILON,
            seed: None,
        }
    }
}

impl RecommendConfig {
    fn merge(&mut self, patch: RecommendPatch) {
        if let Some(value) = patch.top_n {
            self.top_n = value;
        }
        if let Some(value) = patch.shuffle_candidates {
            self.shuffle_candidates = value;
        }
        if let Some(value) = patch.policy {
            self.policy = value;
        }
        if let Some(value) = patch.tie_epsilon {
            self.tie_epsilon = value;
        }
        if let Some(value) = patch.seed {
            self.seed = Some(value);
        }
    }
}

const fn default_top_n() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

const fn default_tie_epsilon() -> f32 {
    DEFAULT_TIE_EPSILON
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    #[serde(default)]
    pub format: RobotFormat,
    #[serde(default)]
    pub include_metadata: bool,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            format: RobotFormat::Json,
            include_metadata: true,
        }
    }
}

impl RobotConfig {
    fn merge(&mut self, patch: RobotPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.include_metadata {
            self.include_metadata = value;
        }
    }
}

/// Layout of robot-mode JSON on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotFormat {
    /// Pretty-printed, one field per line.
    #[default]
    Json,
    /// One document per line.
    Compact,
}

impl std::str::FromStr for RobotFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "json" | "pretty" => Ok(Self::Json),
            "compact" | "jsonl" => Ok(Self::Compact),
            other => Err(format!("invalid robot format {other} (expected json|compact)")),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub vocabulary: Option<VocabularyPatch>,
    pub recommend: Option<RecommendPatch>,
    pub robot: Option<RobotPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct VocabularyPatch {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RecommendPatch {
    pub top_n: Option<u32>,
    pub shuffle_candidates: Option<bool>,
    pub policy: Option<SelectionPolicy>,
    pub tie_epsilon: Option<f32>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RobotPatch {
    pub format: Option<RobotFormat>,
    pub include_metadata: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_u32(key: &str) -> Result<Option<u32>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|err| SkillrecError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| SkillrecError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_f32(key: &str) -> Result<Option<f32>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<f32>()
            .map(Some)
            .map_err(|err| SkillrecError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

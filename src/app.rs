use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::error::{Result, SkillrecError};
use crate::matching::{Recommender, SharedVocabulary};

pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = Self::find_root()?;
        let config = Config::load(cli.config.as_deref(), &root)?;

        Ok(Self {
            root,
            robot_mode: cli.robot || env_robot(),
            config,
            verbosity: cli.verbose,
        })
    }

    fn find_root() -> Result<PathBuf> {
        if let Ok(root) = std::env::var("SKILLREC_ROOT") {
            return Ok(PathBuf::from(root));
        }
        let cwd = std::env::current_dir()?;
        if let Some(found) = find_upwards(&cwd, ".skillrec") {
            return Ok(found);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| SkillrecError::MissingConfig("data directory not found".to_string()))?;
        Ok(data_dir.join("skillrec"))
    }

    /// Vocabulary artifact path, honoring a per-command override.
    #[must_use]
    pub fn vocabulary_path(&self, override_path: Option<&Path>) -> PathBuf {
        override_path.map_or_else(
            || self.config.vocabulary.resolved_path(&self.root),
            Path::to_path_buf,
        )
    }

    /// Load the vocabulary artifact, failing closed when it is unusable.
    pub fn load_vocabulary(&self, override_path: Option<&Path>) -> Result<Arc<SharedVocabulary>> {
        let path = self.vocabulary_path(override_path);
        let shared = SharedVocabulary::empty();
        shared.reload(&path)?;
        Ok(Arc::new(shared))
    }

    #[must_use]
    pub fn recommender(&self, vocabulary: Arc<SharedVocabulary>) -> Recommender {
        Recommender::from_config(vocabulary, &self.config.recommend)
    }

    /// RNG for selection: seeded when a seed is given or configured.
    #[must_use]
    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        match seed.or(self.config.recommend.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Whether `SKILLREC_ROBOT` asks for robot mode.
#[must_use]
pub fn env_robot() -> bool {
    std::env::var("SKILLREC_ROBOT")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

fn find_upwards(start: &Path, name: &str) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(name);
        if candidate.is_dir() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

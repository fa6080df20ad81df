use crate::domain::models::GOAL_SCORE;
use crate::error::{HogError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub evaluation: EvaluationConfig,
    pub experiments: ExperimentsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub goal: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    pub num_samples: usize,
    pub baseline_rolls: u32,
    pub parallel: bool,
}

/// Which experiments `--run_experiments` performs.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ExperimentsConfig {
    pub max_scoring_num_rolls: bool,
    pub always_roll_8: bool,
    pub bacon_strategy: bool,
    pub swap_strategy: bool,
    pub final_strategy: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(|e| {
                HogError::Config(format!("failed to read {}: {e}", config_path.display()))
            })?;
            Self::from_toml_str(&contents)?
        } else {
            warn!("{} not found, using defaults", config_path.display());
            Self::default()
        };

        config.merge_env();

        info!(
            goal = config.game.goal,
            num_samples = config.evaluation.num_samples,
            baseline_rolls = config.evaluation.baseline_rolls,
            parallel = config.evaluation.parallel,
            "Hog configuration"
        );
        info!(experiments = ?config.experiments, "Enabled experiments");

        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| HogError::Config(e.to_string()))
    }

    fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("HOG_GOAL") {
            if let Ok(parsed) = val.parse() {
                self.game.goal = parsed;
            }
        }
        if let Ok(val) = std::env::var("HOG_NUM_SAMPLES") {
            if let Ok(parsed) = val.parse() {
                self.evaluation.num_samples = parsed;
            }
        }
        if let Ok(val) = std::env::var("HOG_BASELINE_ROLLS") {
            if let Ok(parsed) = val.parse() {
                self.evaluation.baseline_rolls = parsed;
            }
        }
        if let Ok(val) = std::env::var("HOG_PARALLEL") {
            if let Ok(parsed) = val.parse() {
                self.evaluation.parallel = parsed;
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { goal: GOAL_SCORE }
    }
}
impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            num_samples: 1000,
            baseline_rolls: 5,
            parallel: false,
        }
    }
}

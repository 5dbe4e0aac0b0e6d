use anyhow::{bail, Context};
use lotto_engine::GameConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub config_path: PathBuf,
    /// Set when the path came from `--config` and must exist
    pub explicit: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("lotto")
                .join("game.json"),
            explicit: false,
        }
    }
}

impl CliConfig {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        match config_path {
            Some(config_path) => Self {
                config_path,
                explicit: true,
            },
            None => Self::default(),
        }
    }

    /// Game constants from the config file, or the built-in defaults when
    /// no file was asked for and none exists
    pub fn load_game_config(&self) -> anyhow::Result<GameConfig> {
        if !self.config_path.exists() {
            if self.explicit {
                bail!("Config file {} not found", self.config_path.display());
            }
            tracing::debug!("No config at {}, using defaults", self.config_path.display());
            return Ok(GameConfig::default());
        }

        GameConfig::from_file(&self.config_path)
            .with_context(|| format!("Failed to load {}", self.config_path.display()))
    }
}

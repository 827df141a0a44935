//! Front-end configuration file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TICTACTOE_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings read from `tictactoe.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent used when `play` is given no `--strategy`.
    #[serde(default = "default_strategy")]
    default_strategy: String,

    /// Whether the human takes X and moves first.
    #[serde(default = "default_human_first")]
    human_first: bool,

    /// Fixed seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_strategy() -> String {
    "alphabeta".to_string()
}

fn default_human_first() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_strategy: default_strategy(),
            human_first: default_human_first(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(strategy = %config.default_strategy, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config, falling back to defaults when no file exists.
    ///
    /// Resolution order:
    /// 1. `explicit` (from `--config`); must exist
    /// 2. `$TICTACTOE_CONFIG`; must exist when set
    /// 3. `./tictactoe.toml`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a named path is missing or any chosen
    /// file fails to parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve(explicit, from_env.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Applies the [`GameConfig::load`] order to already-read inputs.
    #[instrument]
    fn resolve(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        fallback: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.or(from_env) {
            if !path.exists() {
                return Err(ConfigError::new(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            if explicit.is_none() {
                debug!(path = %path.display(), "Using TICTACTOE_CONFIG env var");
            }
            return Self::from_file(path);
        }

        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            info!(path = %fallback.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

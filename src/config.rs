use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Board, Player, COLS};
use crate::solver::Solver;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side the engine plays; the human plays the other one.
    pub engine_side: Player,
    /// Column of the engine's pre-placed opening stone. The human always
    /// moves first interactively; with a stone here the engine has, in
    /// effect, taken the first move of the game.
    pub opening_column: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            engine: EngineConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            engine_side: Player::Red,
            opening_column: Some(3),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(col) = self.engine.opening_column {
            if col >= COLS {
                return Err(ConfigError::Validation(
                    "engine.opening_column must be in 0-6".into(),
                ));
            }
        }
        Ok(())
    }

    /// Build a fresh solver for the configured opening position.
    pub fn new_solver(&self) -> Solver {
        let mut board = Board::new();
        if let Some(col) = self.engine.opening_column {
            board
                .drop_piece(col, self.engine.engine_side.to_cell())
                .expect("opening column validated");
        }
        // The human replies to the opening stone (or simply opens, if there
        // is none); either way it is their turn.
        Solver::new(board, self.engine.engine_side.other(), self.engine.engine_side)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

use std::path::PathBuf;

/// Errors for moves a caller asked for but the board cannot perform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (0-6)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is empty, nothing to remove")]
    ColumnEmpty(usize),
}

/// Errors detected while validating a starting position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("floating piece at row {row}, column {col}: cells below it are empty")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::ColumnFull(3);
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::FloatingPiece { row: 2, col: 5 };
        assert_eq!(
            err.to_string(),
            "floating piece at row 2, column 5: cells below it are empty"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.opening_column must be in 0-6".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.opening_column must be in 0-6"
        );
    }
}

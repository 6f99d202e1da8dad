use std::io;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),

    #[error("missing value for '{0}'")]
    MissingValue(String),

    #[error("invalid value '{value}' for '{flag}'")]
    InvalidValue { flag: String, value: String },

    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("population thresholds {0:?} must be within [0, 1] and non-decreasing")]
    Population([f64; 3]),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to draw to the terminal: {0}")]
    Io(#[from] io::Error),
}

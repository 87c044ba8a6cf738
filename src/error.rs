//! Error type shared by configuration loading and grade conversion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid grade value: {0} (expected 1, 5, 7 or 10)")]
    InvalidGrade(u8),
}

pub type Result<T> = std::result::Result<T, ScoreError>;


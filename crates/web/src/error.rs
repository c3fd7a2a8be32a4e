use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Bundle directory not found: {0}")]
    MissingBundle(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WebError>;

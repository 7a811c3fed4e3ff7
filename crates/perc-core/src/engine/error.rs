use thiserror::Error;

use super::config::ConfigError;
use crate::core::error::PercolationError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Percolation(#[from] PercolationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

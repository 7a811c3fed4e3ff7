use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PercolationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, PercolationError>;

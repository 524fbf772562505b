//! Error types for the core engine.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while preparing engine inputs or writing output.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid policy file: {0}")]
    PolicyParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

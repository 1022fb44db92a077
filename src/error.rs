use thiserror::Error;

use crate::builder::BuildError;
use crate::condition::ConditionParseError;
use crate::config::ConfigError;
use crate::request::RequestError;
use crate::validate::ValidationError;

/// Custom error types for `sqlmaker`
#[derive(Error, Debug)]
pub enum SqlMakerError {
    /// The request failed collector-side validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The builder rendered a message instead of SQL
    #[error("{message}")]
    NotGenerated {
        /// Why nothing was generated
        reason: BuildError,
        /// User-facing message
        message: String,
    },

    /// A `--where` argument could not be parsed
    #[error("Invalid condition: {0}")]
    Condition(#[from] ConditionParseError),

    /// Configuration could not be loaded
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    /// Request file could not be loaded
    #[error("Failed to load request: {0}")]
    Request(#[from] RequestError),

    /// Configuration file creation failed
    #[error("Failed to create configuration file: {message}")]
    ConfigCreationFailed {
        /// Error message details
        message: String,
    },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error wrapper
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias for `sqlmaker` operations
pub type Result<T> = std::result::Result<T, SqlMakerError>;

//! Error types for configuration loading, validation, and persistence.

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not well-formed TOML.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The aggregate could not be serialized back to TOML.
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field violates its bound or enum. Carries the section (or
    /// top-level field) name and the first rule found violated.
    #[error("invalid {section} configuration: {message}")]
    Validation {
        section: &'static str,
        message: String,
    },

    #[error("configuration already initialized")]
    AlreadyInitialized,

    #[error("configuration not initialized")]
    NotInitialized,
}

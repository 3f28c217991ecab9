//! Error types and error handling

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while loading or scanning a schema file
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema file exists but could not be read
    #[error("failed to read schema file {path}: {source}")]
    Io {
        /// Path of the schema file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A `model` or `enum` block was opened but its closing brace never appeared
    #[error("unterminated {kind} block '{name}' starting at byte {offset}")]
    UnterminatedBlock {
        /// Block keyword (`model`, `enum`, ...)
        kind: String,
        /// Declared block name
        name: String,
        /// Byte offset of the block keyword
        offset: usize,
    },
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Default configuration could not be serialized as the base layer
    #[error("failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// Layered configuration could not be extracted
    #[error("invalid configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(Box::new(err))
    }
}

//! Error types for the symtab crate
//!
//! Every fallible operation reports one of these synchronously to its caller.
//! A failed call never leaves the symbol table in a partially updated state.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for symbol interning and lookup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternError {
    /// A new symbol was submitted after every identifier was handed out
    ///
    /// Not retryable: the table has reached its capacity for novel symbols.
    /// Symbols interned earlier remain valid.
    #[error("identifier space exhausted: all {capacity} identifiers are assigned")]
    ExhaustedIdentifierSpace { capacity: u32 },

    /// Reverse lookup of a string that was never interned
    #[error("symbol not found: {symbol:?}")]
    SymbolNotFound { symbol: String },

    /// Lookup of an identifier outside the assigned range
    ///
    /// `id` is signed so that rejected raw inputs are reported verbatim.
    #[error("identifier not found: {id}")]
    IdentifierNotFound { id: i64 },
}

/// Error type for loading and validating an [`InternerConfig`](crate::InternerConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has wrongly typed fields
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but describes an unusable table
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for interning operations
pub type InternResult<T> = std::result::Result<T, InternError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

//! Configuration for [`Interner`](crate::Interner) instances.
//!
//! A config can be built in code or loaded from a TOML document:
//!
//! ```toml
//! capacity_limit = 65536
//! initial_capacity = 1024
//! ```
//!
//! Missing fields fall back to their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::symbol::SymbolId;

/// Number of entries pre-allocated by default.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Settings for constructing an interner.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InternerConfig {
    /// Maximum number of distinct symbols the table will accept.
    ///
    /// Identifiers are assigned from `0` up to `capacity_limit - 1`.
    #[serde(default = "default_capacity_limit")]
    pub capacity_limit: u32,

    /// Number of entries to reserve up front.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_capacity_limit() -> u32 {
    SymbolId::MAX_CAPACITY
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

impl Default for InternerConfig {
    fn default() -> Self {
        Self {
            capacity_limit: default_capacity_limit(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl InternerConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: InternerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check that the settings describe a usable table.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.capacity_limit == 0 {
            return Err(ConfigError::Invalid(
                "capacity_limit must be at least 1".to_string(),
            ));
        }
        if self.initial_capacity > self.capacity_limit as usize {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity {} exceeds capacity_limit {}",
                self.initial_capacity, self.capacity_limit
            )));
        }
        Ok(())
    }
}

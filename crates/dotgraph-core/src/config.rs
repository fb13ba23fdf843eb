//! Serialization settings for the tree writer and the DOT renderer.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables prefixed with `DOTGRAPH_` (e.g. `DOTGRAPH_MAX_DEPTH=8`).

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix picked up by [`WriterConfig::load`].
pub const ENV_PREFIX: &str = "DOTGRAPH_";

/// Configuration for writing a graph to its syntax tree and to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Maximum subgraph nesting depth.
    pub max_depth: usize,
    /// Indentation unit used per nesting level.
    pub indent: String,
    /// Emit nodes whose parent scope cannot be reached from the root.
    pub emit_orphans: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            indent: "\t".to_string(),
            emit_orphans: true,
        }
    }
}

impl WriterConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth (builder pattern).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the indentation unit (builder pattern).
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets whether unreachable nodes are emitted (builder pattern).
    #[must_use]
    pub fn with_emit_orphans(mut self, emit_orphans: bool) -> Self {
        self.emit_orphans = emit_orphans;
        self
    }

    /// Loads a config from defaults, an optional TOML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source cannot be parsed or the merged
    /// result fails [`WriterConfig::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a config from a TOML string layered over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on malformed TOML or an invalid result.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(source))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings for consistency.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if `max_depth` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}

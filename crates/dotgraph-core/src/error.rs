//! Error types for dotgraph-core.

use thiserror::Error;

/// Errors raised by the graph model and the tree writer.
#[derive(Error, Debug)]
pub enum Error {
    /// A parent scope name resolved to neither the graph nor a registered subgraph.
    ///
    /// This is a caller contract violation: subgraphs must be declared before
    /// attributes or children are attached to them.
    #[error("graph or subgraph '{name}' does not exist")]
    UnknownScope {
        /// The offending scope name.
        name: String,
    },

    /// A subgraph was reached again while it was still being written.
    #[error("relation cycle detected at '{name}'")]
    RelationCycle {
        /// The scope that closed the cycle.
        name: String,
    },

    /// Subgraph nesting exceeded the configured limit.
    #[error("subgraph nesting under '{name}' exceeds the limit of {limit}")]
    NestingTooDeep {
        /// The scope at which the limit was hit.
        name: String,
        /// The configured maximum depth.
        limit: usize,
    },

    /// An edge endpoint refers to a subgraph but also carries a port.
    #[error("subgraph '{name}' cannot have a port: {port}")]
    PortOnSubgraph {
        /// The subgraph name.
        name: String,
        /// The rejected port.
        port: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Builds an [`Error::UnknownScope`] for the given name.
    #[must_use]
    pub fn unknown_scope(name: &str) -> Self {
        Self::UnknownScope {
            name: name.to_string(),
        }
    }

    /// Returns true for structural errors found while writing the tree.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::RelationCycle { .. } | Self::NestingTooDeep { .. } | Self::PortOnSubgraph { .. }
        )
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

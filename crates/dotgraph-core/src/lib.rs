//! # dotgraph-core
//!
//! In-memory model of graphs described in the DOT language, with a
//! deterministic path back to text.
//!
//! - [`graph`]: nodes, edges, subgraphs, attribute scopes and membership
//!   relations, plus the mutation API a DOT front end drives.
//! - [`writer`]: rebuilds the subgraph nesting and orders statements into
//!   an [`ast::SyntaxTree`].
//! - [`ast`]: the intermediate tree and its DOT renderer.
//!
//! ## Quick Start
//!
//! ```rust
//! use dotgraph_core::graph::{AttributeSet, Graph};
//!
//! fn main() -> Result<(), dotgraph_core::Error> {
//!     let mut graph = Graph::new();
//!     graph.set_name("deps");
//!     graph.set_directed(true);
//!     graph.add_attr("deps", "rankdir", "LR")?;
//!     graph.add_node("deps", "app", AttributeSet::from([("shape", "box")]));
//!     graph.add_node("deps", "lib", AttributeSet::new());
//!     graph.add_edge("app", "lib", true, AttributeSet::new());
//!
//!     let text = graph.to_text()?;
//!     assert_eq!(
//!         text,
//!         "digraph deps {\n\trankdir=LR;\n\tapp [shape=box];\n\tlib;\n\tapp -> lib;\n}\n"
//!     );
//!     Ok(())
//! }
//! ```
//!
//! The model is single-threaded: a [`Graph`](graph::Graph) has no internal
//! synchronization and must be guarded externally if shared.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod ast;
pub mod config;
pub mod error;
pub mod graph;
pub mod names;
pub mod writer;
#[cfg(test)]
mod writer_tests;

pub use ast::SyntaxTree;
pub use config::WriterConfig;
pub use error::{Error, Result};
pub use graph::Graph;
pub use names::safe_name;
pub use writer::TreeWriter;

//! In-memory DOT graph model.
//!
//! A [`Graph`] composes four independent sets: nodes, edges, subgraphs and
//! the parent/child relations between scopes and their members. Attribute
//! scoping is resolved by name against the graph itself or a subgraph.
//!
//! # Example
//!
//! ```rust
//! use dotgraph_core::graph::{AttributeSet, Graph};
//!
//! let mut graph = Graph::new();
//! graph.set_name("G");
//! graph.add_subgraph("G", "cluster_0", AttributeSet::from([("label", "workers")])).unwrap();
//! graph.add_node("cluster_0", "w1", AttributeSet::new());
//! graph.add_node("G", "main", AttributeSet::new());
//! graph.add_edge("main", "w1", false, AttributeSet::new());
//!
//! assert!(graph.is_subgraph("cluster_0"));
//! assert_eq!(graph.relations().children("cluster_0"), vec!["w1"]);
//! assert!(graph.add_attr("nowhere", "color", "red").is_err());
//! ```

mod attrs;
mod capability;
mod edges;
mod model;
mod nodes;
mod relations;
mod subgraphs;


pub use attrs::AttributeSet;
pub use capability::{EdgeSource, GraphableNode, NodeSource};
pub use edges::{Edge, EdgeSet};
pub use model::Graph;
pub use nodes::{Node, NodeSet};
pub use relations::RelationSet;
pub use subgraphs::{Subgraph, SubgraphSet};

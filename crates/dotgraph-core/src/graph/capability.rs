//! Capabilities that let arbitrary types feed nodes and edges into a graph.
//!
//! [`NodeSource`] and [`EdgeSource`] are independent; a type implementing
//! both is a [`GraphableNode`] through a blanket impl.

use super::attrs::AttributeSet;
use super::edges::{Edge, EdgeSet};
use super::nodes::Node;

/// Anything that can describe itself as a named node with attributes.
pub trait NodeSource {
    /// Returns the node name.
    fn node_name(&self) -> &str;

    /// Returns the node attributes.
    fn node_attrs(&self) -> AttributeSet;
}

/// Anything that can provide a list of edges.
pub trait EdgeSource {
    /// Returns the edges in the order they should be added.
    fn edge_list(&self) -> Vec<Edge>;
}

/// A node that also declares edges, e.g. to its dependencies.
pub trait GraphableNode: NodeSource + EdgeSource {}

impl<T: NodeSource + EdgeSource + ?Sized> GraphableNode for T {}

impl NodeSource for Node {
    fn node_name(&self) -> &str {
        self.name()
    }

    fn node_attrs(&self) -> AttributeSet {
        self.attrs().clone()
    }
}

impl EdgeSource for EdgeSet {
    fn edge_list(&self) -> Vec<Edge> {
        self.iter().cloned().collect()
    }
}

impl EdgeSource for [Edge] {
    fn edge_list(&self) -> Vec<Edge> {
        self.to_vec()
    }
}

impl EdgeSource for Vec<Edge> {
    fn edge_list(&self) -> Vec<Edge> {
        self.clone()
    }
}

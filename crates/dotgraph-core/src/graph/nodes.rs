//! Node records and the graph-wide node namespace.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::attrs::AttributeSet;

/// A named node with its attributes.
///
/// Node names are unique across the whole graph, not per subgraph.
/// Subgraph membership lives in the [`RelationSet`](super::RelationSet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    attrs: AttributeSet,
}

impl Node {
    /// Creates a node without attributes.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: AttributeSet::new(),
        }
    }

    /// Sets the node attributes (builder pattern).
    #[must_use]
    pub fn with_attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = attrs;
        self
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node attributes.
    #[must_use]
    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Returns the node attributes for modification.
    pub fn attrs_mut(&mut self) -> &mut AttributeSet {
        &mut self.attrs
    }
}

/// All nodes of a graph, keyed by name, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSet {
    lookup: IndexMap<String, Node>,
}

impl NodeSet {
    /// Creates an empty node set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node, or refines an existing one.
    ///
    /// A repeated declaration merges its attributes into the stored node
    /// instead of replacing it.
    pub fn add(&mut self, node: Node) {
        match self.lookup.get_mut(node.name()) {
            Some(existing) => existing.attrs.extend_from(&node.attrs),
            None => {
                self.lookup.insert(node.name.clone(), node);
            }
        }
    }

    /// Removes a node by name. Absent names are ignored.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        self.lookup.shift_remove(name)
    }

    /// Returns true if a node with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Gets a node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.lookup.get(name)
    }

    /// Gets a mutable node by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.lookup.get_mut(name)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Iterates over nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.lookup.values()
    }

    /// Returns all node names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.lookup.keys().map(String::as_str).collect()
    }

    /// Returns all nodes sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.lookup.values().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        nodes
    }
}

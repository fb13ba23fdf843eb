//! Edge records and the source-to-destinations index.
//!
//! Edges are not named and may reference nodes that were never declared.
//! This lets a front end stream edges before the node statements they use.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::attrs::AttributeSet;

/// An edge between two endpoints, with optional ports.
///
/// The `directed` flag is per edge and may differ from the graph's.
///
/// # Example
///
/// ```rust
/// use dotgraph_core::graph::Edge;
///
/// let edge = Edge::new("a", "b", true).with_ports(Some("out"), None);
/// assert_eq!(edge.src(), "a");
/// assert_eq!(edge.src_port(), Some("out"));
/// assert_eq!(edge.dst_port(), None);
/// assert!(edge.is_directed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src_port: Option<String>,
    dst: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dst_port: Option<String>,
    directed: bool,
    attrs: AttributeSet,
}

fn port(value: Option<&str>) -> Option<String> {
    value.filter(|p| !p.is_empty()).map(str::to_string)
}

impl Edge {
    /// Creates an edge without ports or attributes.
    #[must_use]
    pub fn new(src: &str, dst: &str, directed: bool) -> Self {
        Self {
            src: src.to_string(),
            src_port: None,
            dst: dst.to_string(),
            dst_port: None,
            directed,
            attrs: AttributeSet::new(),
        }
    }

    /// Sets the endpoint ports (builder pattern). Empty ports count as none.
    #[must_use]
    pub fn with_ports(mut self, src_port: Option<&str>, dst_port: Option<&str>) -> Self {
        self.src_port = port(src_port);
        self.dst_port = port(dst_port);
        self
    }

    /// Sets the edge attributes (builder pattern).
    #[must_use]
    pub fn with_attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = attrs;
        self
    }

    /// Returns the source endpoint name.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Returns the source port, if any.
    #[must_use]
    pub fn src_port(&self) -> Option<&str> {
        self.src_port.as_deref()
    }

    /// Returns the destination endpoint name.
    #[must_use]
    pub fn dst(&self) -> &str {
        &self.dst
    }

    /// Returns the destination port, if any.
    #[must_use]
    pub fn dst_port(&self) -> Option<&str> {
        self.dst_port.as_deref()
    }

    /// Returns true for `->` edges, false for `--`.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the edge attributes.
    #[must_use]
    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }
}

/// All edges of a graph in insertion order, plus a source index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeSet {
    edges: Vec<Edge>,
    /// Source name -> destination names.
    src_to_dsts: IndexMap<String, IndexSet<String>>,
}

impl EdgeSet {
    /// Creates an empty edge set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edge and indexes its destination under its source.
    pub fn add(&mut self, edge: Edge) {
        self.src_to_dsts
            .entry(edge.src.clone())
            .or_default()
            .insert(edge.dst.clone());
        self.edges.push(edge);
    }

    /// Returns the destinations reachable from `name` by one edge.
    #[must_use]
    pub fn edges_from(&self, name: &str) -> Vec<&str> {
        self.src_to_dsts
            .get(name)
            .map(|dsts| dsts.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns true if `name` is the source of at least one edge.
    #[must_use]
    pub fn has_source(&self, name: &str) -> bool {
        self.src_to_dsts.contains_key(name)
    }

    /// Returns true if `name` is the destination of at least one edge.
    ///
    /// There is no destination index; this scans every source bucket.
    #[must_use]
    pub fn has_destination(&self, name: &str) -> bool {
        self.src_to_dsts.values().any(|dsts| dsts.contains(name))
    }

    /// Returns true if `name` appears as either endpoint of any edge.
    #[must_use]
    pub fn participates(&self, name: &str) -> bool {
        self.has_source(name) || self.has_destination(name)
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if there are no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Returns edges sorted by `(src, dst)`, ties kept in insertion order.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges.iter().collect();
        edges.sort_by(|a, b| (&a.src, &a.dst).cmp(&(&b.src, &b.dst)));
        edges
    }
}

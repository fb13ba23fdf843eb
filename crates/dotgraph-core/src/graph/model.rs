//! The graph aggregate root and its mutation API.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::ast::SyntaxTree;
use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::writer::TreeWriter;

use super::attrs::AttributeSet;
use super::capability::{EdgeSource, GraphableNode, NodeSource};
use super::edges::{Edge, EdgeSet};
use super::nodes::{Node, NodeSet};
use super::relations::RelationSet;
use super::subgraphs::{Subgraph, SubgraphSet};

/// An in-memory DOT graph.
///
/// The graph is populated incrementally, either by a front-end parser
/// scanning DOT source or directly by application code. Every operation
/// that takes a `parent` expects the graph's own name or the name of a
/// registered subgraph.
///
/// Edges may reference nodes that do not exist (yet), and removing a node
/// leaves the edges that mention it in place.
///
/// # Example
///
/// ```rust
/// use dotgraph_core::graph::{AttributeSet, Graph};
///
/// let mut graph = Graph::new();
/// graph.set_name("G");
/// graph.set_directed(true);
/// graph.add_node("G", "a", AttributeSet::new());
/// graph.add_node("G", "b", AttributeSet::from([("shape", "box")]));
/// graph.add_edge("a", "b", true, AttributeSet::new());
///
/// let text = graph.to_text().unwrap();
/// assert!(text.starts_with("digraph G {"));
/// assert!(text.contains("a -> b;"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    name: String,
    directed: bool,
    strict: bool,
    attrs: AttributeSet,
    nodes: NodeSet,
    edges: EdgeSet,
    subgraphs: SubgraphSet,
    relations: RelationSet,
}

impl Graph {
    /// Creates an empty, unnamed, undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Header ─────────────────────────────────────────────────────────

    /// Marks the graph as strict (no duplicate edges, see the dot man page).
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Sets whether the graph is a `digraph` (true) or a `graph` (false).
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Sets the graph name.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Returns the graph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true for a `digraph`.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true for a strict graph.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the graph-level attributes.
    #[must_use]
    pub fn attrs(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Returns all nodes.
    #[must_use]
    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Returns all edges.
    #[must_use]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Returns all subgraphs.
    #[must_use]
    pub fn subgraphs(&self) -> &SubgraphSet {
        &self.subgraphs
    }

    /// Returns the membership relations.
    #[must_use]
    pub fn relations(&self) -> &RelationSet {
        &self.relations
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Adds an edge from `src` to `dst` with optional ports.
    ///
    /// Missing endpoints are not created.
    pub fn add_port_edge(
        &mut self,
        src: &str,
        src_port: Option<&str>,
        dst: &str,
        dst_port: Option<&str>,
        directed: bool,
        attrs: AttributeSet,
    ) {
        self.edges.add(
            Edge::new(src, dst, directed)
                .with_ports(src_port, dst_port)
                .with_attrs(attrs),
        );
    }

    /// Adds an edge from `src` to `dst` without ports.
    pub fn add_edge(&mut self, src: &str, dst: &str, directed: bool, attrs: AttributeSet) {
        self.add_port_edge(src, None, dst, None, directed, attrs);
    }

    /// Adds every edge provided by `source`, in order.
    pub fn add_edges_from<S: EdgeSource + ?Sized>(&mut self, source: &S) {
        for edge in source.edge_list() {
            self.edges.add(edge);
        }
    }

    /// Removes every node that is neither the source nor the destination of
    /// an edge, reporting each removal on stderr.
    ///
    /// Returns the removed node names.
    pub fn remove_edgeless_nodes(&mut self, parent: &str) -> Vec<String> {
        self.remove_edgeless_nodes_to(parent, &mut io::stderr())
    }

    /// Same as [`Graph::remove_edgeless_nodes`], writing one line per removed
    /// node to `sink`. Write failures are ignored.
    pub fn remove_edgeless_nodes_to<W: Write + ?Sized>(
        &mut self,
        parent: &str,
        sink: &mut W,
    ) -> Vec<String> {
        let edgeless: Vec<String> = self
            .nodes
            .iter()
            .map(Node::name)
            .filter(|name| !self.edges.participates(name))
            .map(str::to_string)
            .collect();

        for name in &edgeless {
            let _ = writeln!(sink, "removing the node: {name}");
            tracing::info!(node = %name, parent = %parent, "Removing edgeless node");
            self.remove_node(parent, name);
        }
        edgeless
    }

    // ── Nodes ──────────────────────────────────────────────────────────

    /// Adds a node under `parent`, merging attributes if it already exists.
    ///
    /// `parent` is not required to exist yet.
    pub fn add_node(&mut self, parent: &str, name: &str, attrs: AttributeSet) {
        self.nodes.add(Node::new(name).with_attrs(attrs));
        self.relations.add(parent, name);
    }

    /// Removes a node and its membership in `parent`.
    ///
    /// Edges referencing the node are kept.
    pub fn remove_node(&mut self, parent: &str, name: &str) {
        self.nodes.remove(name);
        self.relations.remove(parent, name);
    }

    /// Adds a node described by any [`NodeSource`].
    pub fn add_node_from<N: NodeSource + ?Sized>(&mut self, parent: &str, node: &N) {
        self.add_node(parent, node.node_name(), node.node_attrs());
    }

    /// Adds a node and every edge it declares.
    pub fn add_graphable_node<N: GraphableNode + ?Sized>(&mut self, parent: &str, node: &N) {
        self.add_node_from(parent, node);
        self.add_edges_from(node);
    }

    /// Adds several graphable nodes, preserving input order.
    pub fn add_graphable_nodes<'a, N, I>(&mut self, parent: &str, nodes: I)
    where
        N: GraphableNode + ?Sized + 'a,
        I: IntoIterator<Item = &'a N>,
    {
        for node in nodes {
            self.add_graphable_node(parent, node);
        }
    }

    /// Returns true if a node with this name exists.
    #[must_use]
    pub fn is_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    /// Gets a node by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    // ── Scopes ─────────────────────────────────────────────────────────

    fn scope_attrs_mut(&mut self, scope: &str) -> Result<&mut AttributeSet> {
        if self.name == scope {
            return Ok(&mut self.attrs);
        }
        self.subgraphs
            .get_mut(scope)
            .map(Subgraph::attrs_mut)
            .ok_or_else(|| Error::unknown_scope(scope))
    }

    fn is_scope(&self, name: &str) -> bool {
        self.name == name || self.subgraphs.contains(name)
    }

    /// Adds an attribute to the graph or to a subgraph.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownScope` if `parent` is neither the graph's name
    /// nor a registered subgraph. Nothing is modified in that case.
    pub fn add_attr(&mut self, parent: &str, key: &str, value: &str) -> Result<()> {
        self.scope_attrs_mut(parent)?.add(key, value);
        Ok(())
    }

    /// Registers a subgraph under `parent` and applies `attrs` to it.
    ///
    /// Registering an existing subgraph again merges the attributes.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownScope` if `parent` is neither the graph's name
    /// nor a registered subgraph. Nothing is modified in that case.
    pub fn add_subgraph(&mut self, parent: &str, name: &str, attrs: AttributeSet) -> Result<()> {
        if !self.is_scope(parent) {
            return Err(Error::unknown_scope(parent));
        }
        self.subgraphs.add(name);
        self.relations.add(parent, name);
        for (key, value) in attrs.iter() {
            self.add_attr(name, key, value)?;
        }
        tracing::debug!(subgraph = %name, parent = %parent, attrs = attrs.len(), "Registered subgraph");
        Ok(())
    }

    /// Returns true if a subgraph with this name exists.
    #[must_use]
    pub fn is_subgraph(&self, name: &str) -> bool {
        self.subgraphs.contains(name)
    }

    /// Gets a subgraph by name.
    #[must_use]
    pub fn subgraph(&self, name: &str) -> Option<&Subgraph> {
        self.subgraphs.get(name)
    }

    // ── Serialization ──────────────────────────────────────────────────

    /// Builds the syntax tree with default settings.
    ///
    /// # Errors
    ///
    /// Returns a structural error if the relations contain a cycle, nest
    /// too deeply, or an edge puts a port on a subgraph.
    pub fn write_tree(&self) -> Result<SyntaxTree> {
        self.write_tree_with(&WriterConfig::default())
    }

    /// Builds the syntax tree with explicit settings.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::write_tree`], with `config.max_depth` as the nesting
    /// limit.
    pub fn write_tree_with(&self, config: &WriterConfig) -> Result<SyntaxTree> {
        TreeWriter::new(self, config).write()
    }

    /// Renders the graph as DOT text with default settings.
    ///
    /// # Errors
    ///
    /// Fails whenever [`Graph::write_tree`] does.
    pub fn to_text(&self) -> Result<String> {
        self.to_text_with(&WriterConfig::default())
    }

    /// Renders the graph as DOT text with explicit settings.
    ///
    /// # Errors
    ///
    /// Fails whenever [`Graph::write_tree_with`] does.
    pub fn to_text_with(&self, config: &WriterConfig) -> Result<String> {
        Ok(self.write_tree_with(config)?.to_text(&config.indent))
    }
}

impl EdgeSource for Graph {
    fn edge_list(&self) -> Vec<Edge> {
        self.edges.edge_list()
    }
}

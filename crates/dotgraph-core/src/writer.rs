//! Turns a [`Graph`] into an ordered [`SyntaxTree`].
//!
//! Starting from the graph's own name, each scope is expanded into its
//! attribute statements followed by its direct children in relation order.
//! Child subgraphs are written recursively before the next sibling. All
//! edges follow at the top level in insertion order.
//!
//! The model does not forbid relation cycles, so the writer tracks the
//! current nesting path and fails with [`Error::RelationCycle`] instead of
//! recursing forever. A subgraph reachable through two parents is not a
//! cycle: its body is written under the first parent, later parents get an
//! empty `subgraph name {}` block that only records the membership.
//!
//! Scopes the root cannot reach (for example after the graph was renamed)
//! are written at the top level when [`WriterConfig::emit_orphans`] is set:
//! unreachable subgraphs first, then the nodes still missing.

use std::collections::HashSet;

use crate::ast::{
    Attr, AttrStmt, EdgeStmt, Endpoint, GraphDecl, Id, NodeId, NodeStmt, Stmt, SubgraphBlock,
    SyntaxTree,
};
use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::graph::{AttributeSet, Edge, Graph};

/// Single-use writer for one graph.
#[derive(Debug)]
pub struct TreeWriter<'g> {
    graph: &'g Graph,
    config: &'g WriterConfig,
    /// Scopes currently being expanded, root first.
    path: Vec<&'g str>,
    /// Nodes that already received a node statement.
    written: HashSet<&'g str>,
    /// Subgraphs whose body has been written.
    expanded: HashSet<&'g str>,
}

impl<'g> TreeWriter<'g> {
    /// Creates a writer for `graph`.
    #[must_use]
    pub fn new(graph: &'g Graph, config: &'g WriterConfig) -> Self {
        Self {
            graph,
            config,
            path: Vec::new(),
            written: HashSet::new(),
            expanded: HashSet::new(),
        }
    }

    /// Produces the syntax tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::RelationCycle`, `Error::NestingTooDeep` or
    /// `Error::PortOnSubgraph` when the model cannot be written.
    pub fn write(mut self) -> Result<SyntaxTree> {
        let result = self.write_inner();
        if let Err(ref err) = result {
            tracing::warn!(graph = %self.graph.name(), error = %err, "Failed to write syntax tree");
        }
        result
    }

    fn write_inner(&mut self) -> Result<SyntaxTree> {
        let graph = self.graph;
        let root = graph.name();

        let mut stmts: Vec<Stmt> = attr_stmts(root, graph.attrs())
            .into_iter()
            .map(Stmt::Attr)
            .collect();

        self.path.push(root);
        stmts.extend(self.scope_stmts(root, 0)?);
        self.path.pop();

        if self.config.emit_orphans {
            stmts.extend(self.orphan_subgraphs()?);
            for node in graph.nodes().iter() {
                if !self.written.contains(node.name()) {
                    stmts.push(Stmt::Node(node_stmt(node.name(), node.attrs())));
                }
            }
        }

        let node_stmts = stmts.len();
        for edge in graph.edges().iter() {
            stmts.push(Stmt::Edge(self.edge_stmt(edge)?));
        }

        tracing::debug!(
            graph = %root,
            stmts = node_stmts,
            edges = graph.edges().len(),
            "Wrote syntax tree"
        );

        Ok(SyntaxTree {
            decl: GraphDecl {
                id: (!root.is_empty()).then(|| Id::from_name(root)),
                directed: graph.is_directed(),
                strict: graph.is_strict(),
            },
            stmts,
        })
    }

    /// Node and subgraph statements for the direct children of `scope`.
    fn scope_stmts(&mut self, scope: &str, depth: usize) -> Result<Vec<Stmt>> {
        let graph = self.graph;
        let mut stmts = Vec::new();
        for child in graph.relations().children(scope) {
            if let Some(node) = graph.node(child) {
                self.written.insert(node.name());
                stmts.push(Stmt::Node(node_stmt(node.name(), node.attrs())));
            } else if graph.is_subgraph(child) {
                stmts.push(Stmt::Subgraph(self.subgraph_block(child, depth + 1)?));
            }
            // anything else was removed after being related; skip it
        }
        Ok(stmts)
    }

    /// Top-level blocks for subgraphs that were never expanded.
    ///
    /// A subgraph waits while one of its parents is itself a pending
    /// subgraph, so each unreachable tree is written once from its top.
    /// Whatever is left after that sits on a cycle and is written directly,
    /// which reports the cycle.
    fn orphan_subgraphs(&mut self) -> Result<Vec<Stmt>> {
        let graph = self.graph;
        let mut stmts = Vec::new();
        for sub in graph.subgraphs().iter() {
            let name = sub.name();
            let waits = graph
                .relations()
                .parents(name)
                .into_iter()
                .any(|parent| parent != name && self.is_pending(parent));
            if self.is_pending(name) && !waits {
                stmts.push(Stmt::Subgraph(self.subgraph_block(name, 1)?));
            }
        }
        for sub in graph.subgraphs().iter() {
            if self.is_pending(sub.name()) {
                stmts.push(Stmt::Subgraph(self.subgraph_block(sub.name(), 1)?));
            }
        }
        if !stmts.is_empty() {
            tracing::debug!(
                graph = %graph.name(),
                blocks = stmts.len(),
                "Wrote unreachable subgraphs"
            );
        }
        Ok(stmts)
    }

    /// A subgraph (not shadowed by a node) whose body is still unwritten.
    fn is_pending(&self, name: &str) -> bool {
        !self.expanded.contains(name) && self.graph.is_subgraph(name) && !self.graph.is_node(name)
    }

    fn subgraph_block(&mut self, name: &'g str, depth: usize) -> Result<SubgraphBlock> {
        if self.path.contains(&name) {
            return Err(Error::RelationCycle {
                name: name.to_string(),
            });
        }
        if !self.expanded.insert(name) {
            return Ok(SubgraphBlock {
                id: Id::from_name(name),
                attrs: Vec::new(),
                stmts: Vec::new(),
            });
        }
        if depth > self.config.max_depth {
            return Err(Error::NestingTooDeep {
                name: name.to_string(),
                limit: self.config.max_depth,
            });
        }

        let attrs = self
            .graph
            .subgraph(name)
            .map(|sub| attr_stmts(name, sub.attrs()))
            .unwrap_or_default();

        self.path.push(name);
        let stmts = self.scope_stmts(name, depth);
        self.path.pop();

        Ok(SubgraphBlock {
            id: Id::from_name(name),
            attrs,
            stmts: stmts?,
        })
    }

    fn endpoint(&self, name: &str, port: Option<&str>) -> Result<Endpoint> {
        if !self.graph.is_node(name) && self.graph.is_subgraph(name) {
            if let Some(port) = port {
                return Err(Error::PortOnSubgraph {
                    name: name.to_string(),
                    port: port.to_string(),
                });
            }
            return Ok(Endpoint::Subgraph(Id::from_name(name)));
        }
        Ok(Endpoint::Node(NodeId {
            id: Id::from_name(name),
            port: port.map(str::to_string),
        }))
    }

    fn edge_stmt(&self, edge: &Edge) -> Result<EdgeStmt> {
        Ok(EdgeStmt {
            src: self.endpoint(edge.src(), edge.src_port())?,
            dst: self.endpoint(edge.dst(), edge.dst_port())?,
            directed: edge.is_directed(),
            attrs: attr_list(edge.attrs()),
        })
    }
}

fn attr_stmts(scope: &str, attrs: &AttributeSet) -> Vec<AttrStmt> {
    attrs
        .iter()
        .map(|(key, value)| AttrStmt {
            scope: scope.to_string(),
            key: Id::literal(key),
            value: Id::literal(value),
        })
        .collect()
}

fn attr_list(attrs: &AttributeSet) -> Vec<Attr> {
    attrs.iter().map(|(key, value)| Attr::new(key, value)).collect()
}

fn node_stmt(name: &str, attrs: &AttributeSet) -> NodeStmt {
    NodeStmt {
        node: NodeId {
            id: Id::from_name(name),
            port: None,
        },
        attrs: attr_list(attrs),
    }
}

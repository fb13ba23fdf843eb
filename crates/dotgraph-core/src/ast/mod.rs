//! Intermediate syntax tree produced by the tree writer.
//!
//! The tree fixes the statement set, nesting and ordering of a graph. Turning
//! it into bytes is the job of [`render`], which owns indentation and the
//! exact DOT punctuation.

mod render;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::names::{quote_id, safe_name};

/// A DOT identifier as it will be emitted.
///
/// `Display` quotes the identifier when it is not a bare literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Builds an identifier for a graph, subgraph or node name.
    ///
    /// Reserved keywords get the disambiguating suffix, see
    /// [`safe_name`](crate::names::safe_name).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(safe_name(name).into_owned())
    }

    /// Builds an identifier used verbatim, e.g. an attribute key or value.
    #[must_use]
    pub fn literal(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the unquoted identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_id(&self.0))
    }
}

/// `key=value` inside an attribute list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// Attribute name.
    pub key: Id,
    /// Attribute value.
    pub value: Id,
}

impl Attr {
    /// Creates an attribute pair.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: Id::literal(key),
            value: Id::literal(value),
        }
    }
}

/// The `[strict] (graph|digraph) [ID]` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDecl {
    /// Graph name, `None` for an anonymous graph.
    pub id: Option<Id>,
    /// `digraph` when true, `graph` otherwise.
    pub directed: bool,
    /// Prefix the header with `strict`.
    pub strict: bool,
}

/// An attribute statement attached to the graph or a subgraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrStmt {
    /// Name of the owning scope as stored in the model.
    pub scope: String,
    /// Attribute name.
    pub key: Id,
    /// Attribute value.
    pub value: Id,
}

/// A node reference with an optional port (`name:port`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeId {
    /// Node identifier.
    pub id: Id,
    /// Port, possibly with a compass point (`p:ne`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

/// A node statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStmt {
    /// The declared node.
    pub node: NodeId,
    /// Node attributes in insertion order.
    pub attrs: Vec<Attr>,
}

/// A subgraph block with its own attributes and nested statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphBlock {
    /// Subgraph identifier.
    pub id: Id,
    /// Attribute statements of this subgraph.
    pub attrs: Vec<AttrStmt>,
    /// Nested node and subgraph statements.
    pub stmts: Vec<Stmt>,
}

/// One side of an edge statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endpoint {
    /// A node, possibly with a port.
    Node(NodeId),
    /// A reference to a subgraph (`subgraph X`).
    Subgraph(Id),
}

/// An edge statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeStmt {
    /// Source endpoint.
    pub src: Endpoint,
    /// Destination endpoint.
    pub dst: Endpoint,
    /// `->` when true, `--` otherwise.
    pub directed: bool,
    /// Edge attributes in insertion order.
    pub attrs: Vec<Attr>,
}

/// A statement inside a graph or subgraph body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    /// `key=value;`
    Attr(AttrStmt),
    /// `name [attrs];`
    Node(NodeStmt),
    /// `subgraph name { ... }`
    Subgraph(SubgraphBlock),
    /// `a -> b [attrs];`
    Edge(EdgeStmt),
}

/// The full tree for one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    /// Graph header.
    pub decl: GraphDecl,
    /// Top-level statements: graph attributes, nodes, subgraphs, then edges.
    pub stmts: Vec<Stmt>,
}

impl SyntaxTree {
    /// Returns the top-level edge statements in emission order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeStmt> + '_ {
        self.stmts.iter().filter_map(|stmt| match stmt {
            Stmt::Edge(edge) => Some(edge),
            _ => None,
        })
    }

    /// Counts node statements at every nesting level.
    #[must_use]
    pub fn node_count(&self) -> usize {
        count_nodes(&self.stmts)
    }

    /// Renders the tree as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if serialization fails.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn count_nodes(stmts: &[Stmt]) -> usize {
    stmts
        .iter()
        .map(|stmt| match stmt {
            Stmt::Node(_) => 1,
            Stmt::Subgraph(block) => count_nodes(&block.stmts),
            Stmt::Attr(_) | Stmt::Edge(_) => 0,
        })
        .sum()
}

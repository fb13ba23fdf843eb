//! DOT text rendering for the syntax tree.

use std::fmt::{self, Write as _};

use super::{Attr, AttrStmt, Endpoint, GraphDecl, NodeId, Stmt, SyntaxTree};
use crate::names::quote_id;

impl SyntaxTree {
    /// Renders the tree as DOT text, using `indent` once per nesting level.
    #[must_use]
    pub fn to_text(&self, indent: &str) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "{} {{", self.decl);
        render_stmts(&self.stmts, &mut output, indent, 1);
        output.push_str("}\n");
        output
    }
}

fn push_indent(output: &mut String, indent: &str, depth: usize) {
    for _ in 0..depth {
        output.push_str(indent);
    }
}

fn render_attr_stmt(attr: &AttrStmt, output: &mut String, indent: &str, depth: usize) {
    push_indent(output, indent, depth);
    let _ = writeln!(output, "{}={};", attr.key, attr.value);
}

fn render_stmts(stmts: &[Stmt], output: &mut String, indent: &str, depth: usize) {
    for stmt in stmts {
        match stmt {
            Stmt::Attr(attr) => render_attr_stmt(attr, output, indent, depth),
            Stmt::Node(node) => {
                push_indent(output, indent, depth);
                let _ = writeln!(output, "{}{};", node.node, AttrList(&node.attrs));
            }
            Stmt::Subgraph(block) => {
                push_indent(output, indent, depth);
                let _ = writeln!(output, "subgraph {} {{", block.id);
                for attr in &block.attrs {
                    render_attr_stmt(attr, output, indent, depth + 1);
                }
                render_stmts(&block.stmts, output, indent, depth + 1);
                push_indent(output, indent, depth);
                output.push_str("}\n");
            }
            Stmt::Edge(edge) => {
                push_indent(output, indent, depth);
                let op = if edge.directed { "->" } else { "--" };
                let _ = writeln!(
                    output,
                    "{} {} {}{};",
                    edge.src,
                    op,
                    edge.dst,
                    AttrList(&edge.attrs)
                );
            }
        }
    }
}

/// Renders ` [k=v, k=v]`, or nothing for an empty list.
struct AttrList<'a>(&'a [Attr]);

impl fmt::Display for AttrList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" [")?;
        for (i, attr) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{attr}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

impl fmt::Display for GraphDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.strict {
            f.write_str("strict ")?;
        }
        f.write_str(if self.directed { "digraph" } else { "graph" })?;
        if let Some(id) = &self.id {
            write!(f, " {id}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(port) = &self.port {
            for part in port.split(':') {
                write!(f, ":{}", quote_id(part))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "{node}"),
            Self::Subgraph(id) => write!(f, "subgraph {id} {{}}"),
        }
    }
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text("\t"))
    }
}

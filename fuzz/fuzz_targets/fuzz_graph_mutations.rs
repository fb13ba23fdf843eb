//! Fuzz target for the graph mutation API and the tree writer.
//!
//! Drives arbitrary sequences of mutations through a `Graph` and then
//! serializes it, looking for:
//! - Panics in any mutation
//! - Non-terminating writes on cyclic relations
//! - Writer errors other than the structural ones
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_mutations
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dotgraph_core::graph::{AttributeSet, Graph};
use libfuzzer_sys::fuzz_target;

/// Small name pool so that operations collide often.
const NAMES: [&str; 8] = ["G", "a", "b", "s1", "s2", "graph", "x y", ""];

fn pick(index: u8) -> &'static str {
    NAMES[usize::from(index) % NAMES.len()]
}

#[derive(Debug, Arbitrary)]
enum Op {
    AddNode { parent: u8, name: u8 },
    RemoveNode { parent: u8, name: u8 },
    AddEdge { src: u8, dst: u8, directed: bool, port: Option<u8> },
    AddSubgraph { parent: u8, name: u8 },
    AddAttr { scope: u8, key: u8, value: u8 },
    RemoveEdgeless { parent: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph = Graph::new();
    graph.set_name("G");

    for op in ops {
        match op {
            Op::AddNode { parent, name } => {
                graph.add_node(pick(parent), pick(name), AttributeSet::new());
            }
            Op::RemoveNode { parent, name } => graph.remove_node(pick(parent), pick(name)),
            Op::AddEdge { src, dst, directed, port } => graph.add_port_edge(
                pick(src),
                port.map(pick),
                pick(dst),
                None,
                directed,
                AttributeSet::new(),
            ),
            Op::AddSubgraph { parent, name } => {
                let _ = graph.add_subgraph(pick(parent), pick(name), AttributeSet::new());
            }
            Op::AddAttr { scope, key, value } => {
                let _ = graph.add_attr(pick(scope), pick(key), pick(value));
            }
            Op::RemoveEdgeless { parent } => {
                graph.remove_edgeless_nodes_to(pick(parent), &mut std::io::sink());
            }
        }
    }

    if let Err(err) = graph.to_text() {
        assert!(err.is_structural(), "unexpected writer error: {err}");
    }
});

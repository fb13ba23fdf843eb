//! Tests for TreeWriter and DOT rendering of whole graphs.

use super::ast::{Endpoint, Stmt};
use super::config::WriterConfig;
use super::error::Error;
use super::graph::{AttributeSet, Graph};

fn no_attrs() -> AttributeSet {
    AttributeSet::new()
}

fn named_graph(name: &str) -> Graph {
    let mut graph = Graph::new();
    graph.set_name(name);
    graph
}

#[test]
fn test_two_nodes_one_edge() {
    let mut graph = Graph::new();
    graph.add_node("", "A", no_attrs());
    graph.add_node("", "B", no_attrs());
    graph.add_edge("A", "B", true, no_attrs());

    let tree = graph.write_tree().unwrap();
    assert_eq!(tree.node_count(), 2);
    assert_eq!(tree.edges().count(), 1);
    assert!(tree.decl.id.is_none());
    assert_eq!(graph.to_text().unwrap(), "graph {\n\tA;\n\tB;\n\tA -> B;\n}\n");

    graph.set_directed(true);
    assert!(graph.to_text().unwrap().starts_with("digraph {\n"));
}

#[test]
fn test_nested_subgraphs_and_statement_order() {
    let mut graph = named_graph("G");
    graph.set_directed(true);
    graph.add_attr("G", "rankdir", "LR").unwrap();
    graph
        .add_subgraph("G", "cluster_0", AttributeSet::from([("label", "outer")]))
        .unwrap();
    graph.add_node("cluster_0", "a", no_attrs());
    graph.add_subgraph("cluster_0", "inner", no_attrs()).unwrap();
    graph.add_node("inner", "b", no_attrs());
    graph.add_node("G", "c", AttributeSet::from([("shape", "box")]));
    graph.add_edge("a", "b", true, no_attrs());
    graph.add_edge("c", "a", true, AttributeSet::from([("color", "red")]));

    let expected = "digraph G {\n\
                    \trankdir=LR;\n\
                    \tsubgraph cluster_0 {\n\
                    \t\tlabel=outer;\n\
                    \t\ta;\n\
                    \t\tsubgraph inner {\n\
                    \t\t\tb;\n\
                    \t\t}\n\
                    \t}\n\
                    \tc [shape=box];\n\
                    \ta -> b;\n\
                    \tc -> a [color=red];\n\
                    }\n";
    assert_eq!(graph.to_text().unwrap(), expected);
}

#[test]
fn test_tree_structure() {
    let mut graph = named_graph("G");
    graph.add_attr("G", "splines", "ortho").unwrap();
    graph.add_subgraph("G", "s", AttributeSet::from([("k", "v")])).unwrap();
    graph.add_node("s", "n", no_attrs());
    graph.add_edge("n", "n", false, no_attrs());

    let tree = graph.write_tree().unwrap();
    assert_eq!(tree.stmts.len(), 3);
    match &tree.stmts[0] {
        Stmt::Attr(attr) => {
            assert_eq!(attr.scope, "G");
            assert_eq!(attr.key.as_str(), "splines");
        }
        other => panic!("expected attribute statement, got {other:?}"),
    }
    match &tree.stmts[1] {
        Stmt::Subgraph(block) => {
            assert_eq!(block.id.as_str(), "s");
            assert_eq!(block.attrs.len(), 1);
            assert_eq!(block.attrs[0].scope, "s");
            assert_eq!(block.stmts.len(), 1);
        }
        other => panic!("expected subgraph block, got {other:?}"),
    }
    assert!(matches!(tree.stmts[2], Stmt::Edge(_)));
}

#[test]
fn test_edges_keep_insertion_order() {
    let mut graph = Graph::new();
    graph.add_edge("z", "y", true, no_attrs());
    graph.add_edge("a", "b", true, no_attrs());
    graph.add_edge("z", "y", true, no_attrs());

    let tree = graph.write_tree().unwrap();
    let rendered: Vec<String> = tree
        .edges()
        .map(|e| format!("{}{}", e.src, e.dst))
        .collect();
    assert_eq!(rendered, vec!["zy", "ab", "zy"]);
    assert_eq!(tree.node_count(), 0);
}

#[test]
fn test_relation_cycle_is_an_error() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "a", no_attrs()).unwrap();
    graph.add_subgraph("a", "b", no_attrs()).unwrap();
    graph.add_subgraph("b", "a", no_attrs()).unwrap();

    let err = graph.write_tree().unwrap_err();
    match err {
        Error::RelationCycle { name } => assert_eq!(name, "a"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_self_containing_subgraph_is_an_error() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "s", no_attrs()).unwrap();
    graph.add_subgraph("s", "s", no_attrs()).unwrap();
    assert!(matches!(
        graph.to_text(),
        Err(Error::RelationCycle { .. })
    ));
}

#[test]
fn test_shared_subgraph_is_not_a_cycle() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "left", no_attrs()).unwrap();
    graph.add_subgraph("G", "right", no_attrs()).unwrap();
    graph.add_subgraph("left", "shared", no_attrs()).unwrap();
    graph.add_subgraph("right", "shared", no_attrs()).unwrap();
    graph.add_node("shared", "x", no_attrs());

    let tree = graph.write_tree().unwrap();
    assert_eq!(tree.node_count(), 1);
    let expected = "graph G {\n\
                    \tsubgraph left {\n\
                    \t\tsubgraph shared {\n\
                    \t\t\tx;\n\
                    \t\t}\n\
                    \t}\n\
                    \tsubgraph right {\n\
                    \t\tsubgraph shared {\n\
                    \t\t}\n\
                    \t}\n\
                    }\n";
    assert_eq!(graph.to_text().unwrap(), expected);
}

#[test]
fn test_layered_diamonds_stay_linear() {
    let mut graph = named_graph("G");
    let mut layer = vec!["G".to_string()];
    for depth in 0..20 {
        let next = vec![format!("l{depth}a"), format!("l{depth}b")];
        for parent in &layer {
            for child in &next {
                graph.add_subgraph(parent, child, no_attrs()).unwrap();
            }
        }
        layer = next;
    }
    graph.add_node("l19a", "leaf", no_attrs());

    let text = graph.to_text().unwrap();
    assert_eq!(text.matches("leaf;").count(), 1);
    assert_eq!(text.matches("subgraph l19a {").count(), 2);
}

#[test]
fn test_nesting_limit() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "s1", no_attrs()).unwrap();
    graph.add_subgraph("s1", "s2", no_attrs()).unwrap();
    graph.add_subgraph("s2", "s3", no_attrs()).unwrap();

    let shallow = WriterConfig::new().with_max_depth(2);
    match graph.write_tree_with(&shallow).unwrap_err() {
        Error::NestingTooDeep { name, limit } => {
            assert_eq!(name, "s3");
            assert_eq!(limit, 2);
        }
        other => panic!("unexpected error: {other}"),
    }

    let deep_enough = WriterConfig::new().with_max_depth(3);
    assert!(graph.write_tree_with(&deep_enough).is_ok());
}

#[test]
fn test_reserved_names_are_escaped_on_output_only() {
    let mut graph = named_graph("digraph");
    graph.add_subgraph("digraph", "Subgraph", no_attrs()).unwrap();
    graph.add_node("Subgraph", "graph", no_attrs());
    graph.add_node("digraph", "Node", no_attrs());
    graph.add_edge("graph", "Node", false, no_attrs());

    assert!(graph.is_node("graph"));
    assert!(graph.is_subgraph("Subgraph"));
    let expected = "graph digraphTYPE {\n\
                    \tsubgraph SubgraphTYPE {\n\
                    \t\tgraphTYPE;\n\
                    \t}\n\
                    \tNodeTYPE;\n\
                    \tgraphTYPE -- NodeTYPE;\n\
                    }\n";
    assert_eq!(graph.to_text().unwrap(), expected);
}

#[test]
fn test_subgraph_endpoint() {
    let mut graph = named_graph("G");
    graph.set_directed(true);
    graph.add_subgraph("G", "s", no_attrs()).unwrap();
    graph.add_node("G", "a", no_attrs());
    graph.add_edge("s", "a", true, no_attrs());

    let tree = graph.write_tree().unwrap();
    let edge = tree.edges().next().unwrap();
    assert!(matches!(edge.src, Endpoint::Subgraph(_)));
    assert!(matches!(edge.dst, Endpoint::Node(_)));
    assert!(graph.to_text().unwrap().contains("\tsubgraph s {} -> a;\n"));
}

#[test]
fn test_port_on_subgraph_is_an_error() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "s", no_attrs()).unwrap();
    graph.add_port_edge("s", Some("p"), "a", None, true, no_attrs());

    match graph.write_tree().unwrap_err() {
        Error::PortOnSubgraph { name, port } => {
            assert_eq!(name, "s");
            assert_eq!(port, "p");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_ports_and_quoting() {
    let mut graph = named_graph("my graph");
    graph.set_directed(true);
    graph.add_node("my graph", "two words", AttributeSet::from([("label", "hi there")]));
    graph.add_port_edge("two words", Some("out:se"), "b", None, true, no_attrs());

    let expected = "digraph \"my graph\" {\n\
                    \t\"two words\" [label=\"hi there\"];\n\
                    \t\"two words\":out:se -> b;\n\
                    }\n";
    assert_eq!(graph.to_text().unwrap(), expected);
}

#[test]
fn test_keywords_are_quoted_in_every_position() {
    let mut graph = named_graph("G");
    graph.add_attr("G", "label", "node").unwrap();
    graph.add_attr("G", "Edge", "x").unwrap();
    graph.add_node("G", "a", AttributeSet::from([("shape", "Graph")]));
    graph.add_node("G", "strict", no_attrs());
    graph.add_port_edge("a", Some("edge"), "strict", Some("n:SUBGRAPH"), false, no_attrs());

    let expected = "graph G {\n\
                    \tlabel=\"node\";\n\
                    \t\"Edge\"=x;\n\
                    \ta [shape=\"Graph\"];\n\
                    \t\"strict\";\n\
                    \ta:\"edge\" -- \"strict\":n:\"SUBGRAPH\";\n\
                    }\n";
    assert_eq!(graph.to_text().unwrap(), expected);
}

#[test]
fn test_malformed_quoted_values_are_requoted() {
    let mut graph = named_graph("G");
    graph.add_node("G", "a", AttributeSet::from([("label", "\"x\" y \"z\"")]));
    graph.add_node("G", "b", AttributeSet::from([("label", "\"ok \\\" inside\"")]));
    graph.add_node("G", "c", AttributeSet::from([("label", "\"open\\\"")]));

    let text = graph.to_text().unwrap();
    assert!(text.contains("\ta [label=\"\\\"x\\\" y \\\"z\\\"\"];\n"));
    assert!(text.contains("\tb [label=\"ok \\\" inside\"];\n"));
    assert!(text.contains("\tc [label=\"\\\"open\\\"\"];\n"));
}

#[test]
fn test_orphan_nodes() {
    let mut graph = Graph::new();
    graph.add_node("", "a", no_attrs());
    graph.set_name("G");

    assert_eq!(graph.to_text().unwrap(), "graph G {\n\ta;\n}\n");

    let config = WriterConfig::new().with_emit_orphans(false);
    assert_eq!(graph.to_text_with(&config).unwrap(), "graph G {\n}\n");
}

#[test]
fn test_unreachable_subgraph_is_kept() {
    let mut graph = Graph::new();
    graph
        .add_subgraph("", "cluster_0", AttributeSet::from([("label", "x")]))
        .unwrap();
    graph.add_subgraph("cluster_0", "inner", no_attrs()).unwrap();
    graph.add_node("cluster_0", "a", no_attrs());
    graph.add_node("inner", "b", no_attrs());
    graph.set_name("G");

    let expected = "graph G {\n\
                    \tsubgraph cluster_0 {\n\
                    \t\tlabel=x;\n\
                    \t\tsubgraph inner {\n\
                    \t\t\tb;\n\
                    \t\t}\n\
                    \t\ta;\n\
                    \t}\n\
                    }\n";
    assert_eq!(graph.to_text().unwrap(), expected);

    let config = WriterConfig::new().with_emit_orphans(false);
    assert_eq!(graph.to_text_with(&config).unwrap(), "graph G {\n}\n");
}

#[test]
fn test_unreachable_subgraph_cycle_is_an_error() {
    let mut graph = named_graph("old");
    graph.add_subgraph("old", "a", no_attrs()).unwrap();
    graph.add_subgraph("a", "b", no_attrs()).unwrap();
    graph.add_subgraph("b", "a", no_attrs()).unwrap();
    graph.set_name("G");

    assert!(matches!(
        graph.write_tree(),
        Err(Error::RelationCycle { .. })
    ));
}

#[test]
fn test_stale_relation_is_skipped() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "s", no_attrs()).unwrap();
    graph.add_node("G", "a", no_attrs());
    graph.add_node("s", "a", no_attrs());
    graph.remove_node("s", "a");

    assert_eq!(
        graph.to_text().unwrap(),
        "graph G {\n\tsubgraph s {\n\t}\n}\n"
    );
}

#[test]
fn test_node_under_two_parents() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "s", no_attrs()).unwrap();
    graph.add_node("G", "a", no_attrs());
    graph.add_node("s", "a", no_attrs());

    assert_eq!(
        graph.to_text().unwrap(),
        "graph G {\n\tsubgraph s {\n\t\ta;\n\t}\n\ta;\n}\n"
    );
}

#[test]
fn test_strict_header_and_indent() {
    let mut graph = named_graph("G");
    graph.set_strict(true);
    graph.set_directed(true);
    graph.add_subgraph("G", "s", no_attrs()).unwrap();
    graph.add_node("s", "a", no_attrs());

    let config = WriterConfig::new().with_indent("  ");
    assert_eq!(
        graph.to_text_with(&config).unwrap(),
        "strict digraph G {\n  subgraph s {\n    a;\n  }\n}\n"
    );
}

#[test]
fn test_output_is_deterministic() {
    let mut graph = named_graph("G");
    for i in 0..20 {
        graph.add_node("G", &format!("n{i}"), AttributeSet::from([("x", "1"), ("y", "2")]));
    }
    let first = graph.to_text().unwrap();
    for _ in 0..5 {
        assert_eq!(graph.to_text().unwrap(), first);
    }
}

#[test]
fn test_to_json() {
    let mut graph = named_graph("G");
    graph.add_subgraph("G", "s", no_attrs()).unwrap();
    graph.add_node("s", "a", no_attrs());

    let json = graph.write_tree().unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["decl"]["id"], "G");
    assert_eq!(value["stmts"][0]["Subgraph"]["id"], "s");
}

//! Tests for the graph model and its mutation rules.
mod common;
use common::*;
use flowgraph::model::{LEGACY_OUTPUT_PREFIX, Properties};
use flowgraph::prelude::*;
use serde_json::json;

#[test]
fn test_add_preserves_insertion_order() {
    let graph = create_chain_graph();
    let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(graph.edges()[0].key(), "a->b");
    assert_eq!(graph.edges()[1].key(), "b->c");
}

#[test]
fn test_update_node_position_only_touches_position() {
    let mut graph = create_chain_graph();
    let mut node = graph.node("b").cloned().unwrap();
    node.metadata
        .extra
        .insert("color".to_string(), json!("red"));
    graph.update_node(node);
    let before = graph.node("b").cloned().unwrap();

    assert!(graph.update_node_position("b", Point::new(10.0, 20.0)));

    let after = graph.node("b").unwrap();
    assert_eq!(after.position(), Point::new(10.0, 20.0));
    assert_eq!(after.label, before.label);
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.properties, before.properties);
    assert_eq!(after.metadata.extra.get("color"), Some(&json!("red")));
}

#[test]
fn test_update_unknown_node_is_noop() {
    let mut graph = create_chain_graph();
    let revision = graph.revision();
    assert!(!graph.update_node_position("missing", Point::new(1.0, 1.0)));
    assert!(!graph.update_node(Node::new("missing", "input", "x")));
    assert_eq!(graph.revision(), revision);
}

#[test]
fn test_update_node_replaces_wholesale() {
    let mut graph = create_chain_graph();
    let replacement = Node::new("a", "custom", "Renamed").with_position(5.0, 6.0);
    assert!(graph.update_node(replacement.clone()));
    assert_eq!(graph.node("a"), Some(&replacement));
    assert_eq!(graph.nodes()[0].id, "a");
}

#[test]
fn test_remove_node_removes_incident_edges() {
    let mut graph = create_chain_graph();
    graph.add_node(Node::new("d", "output", "Other"));
    graph.add_edge(Edge::new("c", "output_x", "d", "in"));

    let removed = graph.remove_node("b").unwrap();
    assert_eq!(removed.id, "b");

    let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0], Edge::new("c", "output_x", "d", "in"));
}

#[test]
fn test_remove_edge_matches_node_pair_only() {
    // Ports are deliberately ignored: parallel edges between the same pair go together.
    let mut graph = create_chain_graph();
    graph.add_edge(Edge::new("a", "output_text", "b", "operation"));
    graph.add_edge(Edge::new("b", "output_result", "a", "unused"));

    let removed = graph.remove_edge(&Edge::new("a", "whatever", "b", "other"));
    assert_eq!(removed, 2);
    let keys: Vec<_> = graph.edges().iter().map(Edge::key).collect();
    assert_eq!(keys, vec!["b->c", "b->a"]);
}

#[test]
fn test_self_loops_and_dangling_edges_are_accepted() {
    let mut graph = create_chain_graph();
    graph.add_edge(Edge::new("b", "output_result", "b", "text"));
    graph.add_edge(Edge::new("ghost", "output", "c", "text"));

    assert_eq!(graph.edges().len(), 4);
    assert!(graph.edges()[2].is_self_loop());
    let dangling: Vec<_> = graph.dangling_edges().map(Edge::key).collect();
    assert_eq!(dangling, vec!["ghost->c"]);
}

#[test]
fn test_selection() {
    let mut graph = create_chain_graph();
    assert!(graph.select_node(Some("b")));
    assert_eq!(graph.selected_node().map(|n| n.label.as_str()), Some("Transform"));

    graph.remove_node("b");
    assert_eq!(graph.selected_node_id(), None);

    assert!(!graph.select_node(Some("nope")));
    assert_eq!(graph.selected_node_id(), None);
}

#[test]
fn test_replace_keeps_resolvable_selection() {
    let mut graph = create_chain_graph();
    graph.select_node(Some("a"));
    graph.replace(vec![Node::new("a", "input", "A")], vec![]);
    assert_eq!(graph.selected_node_id(), Some("a"));
    graph.replace(vec![Node::new("z", "input", "Z")], vec![]);
    assert_eq!(graph.selected_node_id(), None);
}

#[test]
fn test_revision_tracks_mutations() {
    let mut graph = GraphModel::new();
    let r0 = graph.revision();
    graph.add_node(Node::new("x", "input", "X"));
    let r1 = graph.revision();
    assert!(r1 > r0);
    graph.select_node(Some("x"));
    assert_eq!(graph.revision(), r1);
    graph.remove_edge(&Edge::new("x", "p", "y", "q"));
    assert_eq!(graph.revision(), r1);
}

#[test]
fn test_legacy_prefix_migration() {
    let mut props = Properties::new();
    props.insert_value("output", json!(1));
    props.insert_value("outputs_total", json!(2));
    props.insert_value("input_text", json!("a"));
    props.insert_value("text_output", json!("b"));

    let directions: Vec<_> = props.iter().map(|p| p.direction).collect();
    assert_eq!(
        directions,
        vec![
            PortDirection::Output,
            PortDirection::Output,
            PortDirection::Input,
            PortDirection::Input
        ]
    );
    assert_eq!(LEGACY_OUTPUT_PREFIX, "output");
    assert_eq!(props.outputs().count(), 2);
}

#[test]
fn test_tagged_direction_wins_over_name() {
    let node = Node::new("n", "processing", "N")
        .with_property(Property::input("output_like_name", json!(0)));
    assert_eq!(
        node.port_direction("output_like_name"),
        Some(PortDirection::Input)
    );
}

#[test]
fn test_properties_keep_order_on_replace() {
    let mut props = Properties::new();
    props.insert(Property::input("first", json!(1)));
    props.insert(Property::input("second", json!(2)));
    props.insert(Property::output("first", json!(3)));

    let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(props.get("first").unwrap().direction, PortDirection::Output);
    assert_eq!(props.remove("second").map(|p| p.value), Some(json!(2)));
    assert_eq!(props.len(), 1);
}

#[test]
fn test_remove_node_drops_every_duplicate() {
    let mut graph = create_chain_graph();
    graph.add_node(Node::new("b", "processing", "Second b"));

    let removed = graph.remove_node("b").unwrap();
    assert_eq!(removed.label, "Transform");
    assert!(!graph.contains_node("b"));
    let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert!(graph.edges().is_empty());
    assert!(graph.remove_node("b").is_none());
}

//! Tests for saving and loading flowgraph documents.
mod common;
use common::*;
use flowgraph::persistence::{DirectorySink, GraphDocument, MIME_TYPE};
use flowgraph::prelude::*;
use serde_json::json;
use std::fs;

#[test]
fn test_save_produces_pretty_json_file() {
    let graph = create_chain_graph();
    let file = PersistenceAdapter::default().save(&graph).unwrap();

    assert_eq!(file.file_name, "flow.json");
    assert_eq!(file.mime_type, MIME_TYPE);
    assert!(file.contents.starts_with("{\n  \"nodes\": ["));
    assert!(file.contents.contains("\n  \"edges\": ["));
    assert!(file.contents.contains("\"type\": \"processing\""));
    assert!(file.contents.contains("\"direction\": \"output\""));
}

#[test]
fn test_save_then_load_round_trips() {
    let mut original = create_chain_graph();
    let mut edge = Edge::new("c", "text", "a", "output_text");
    edge.metadata = Some(json!({ "label": "feedback" }));
    original.add_edge(edge);

    let adapter = PersistenceAdapter::default();
    let file = adapter.save(&original).unwrap();

    let mut restored = GraphModel::new();
    adapter.load(&mut restored, file.contents.as_bytes()).unwrap();

    assert_eq!(restored.nodes(), original.nodes());
    assert_eq!(restored.edges(), original.edges());
    assert_eq!(
        restored.edges()[2].metadata,
        Some(json!({ "label": "feedback" }))
    );
}

#[test]
fn test_malformed_document_leaves_graph_untouched() {
    let mut graph = create_chain_graph();
    let before = graph.clone();
    let adapter = PersistenceAdapter::default();

    let err = adapter.load(&mut graph, b"{ \"nodes\": [ ").unwrap_err();
    assert!(matches!(err, PersistenceError::Parse(_)));
    assert_eq!(graph, before);

    // Valid JSON with the wrong shape is rejected too.
    let err = adapter
        .load(&mut graph, br#"{ "nodes": {}, "edges": [] }"#)
        .unwrap_err();
    assert!(matches!(err, PersistenceError::Parse(_)));
    assert_eq!(graph, before);
}

#[test]
fn test_load_replaces_rather_than_merges() {
    let mut graph = create_chain_graph();
    PersistenceAdapter::default()
        .load(&mut graph, LEGACY_DOCUMENT_JSON.as_bytes())
        .unwrap();

    let ids: Vec<_> = graph.nodes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["node-1", "node-2"]);
    assert_eq!(graph.edges().len(), 1);
    assert!(!graph.contains_node("a"));
}

#[test]
fn test_legacy_document_is_migrated() {
    let mut graph = GraphModel::new();
    PersistenceAdapter::default()
        .load(&mut graph, LEGACY_DOCUMENT_JSON.as_bytes())
        .unwrap();

    let source = graph.node("node-1").unwrap();
    assert_eq!(source.position(), Point::new(120.0, 80.0));
    assert_eq!(source.metadata.extra.get("color"), Some(&json!("teal")));
    assert_eq!(source.port_direction("placeholder"), Some(PortDirection::Input));
    assert_eq!(source.port_direction("output"), Some(PortDirection::Output));

    let upper = graph.node("node-2").unwrap();
    assert!(upper.inputs.is_empty());
    let names: Vec<_> = upper.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["text", "operation", "output_text"]);
    assert_eq!(upper.port_direction("output_text"), Some(PortDirection::Output));
    assert_eq!(
        upper.properties.get("operation").map(|p| &p.value),
        Some(&json!("uppercase"))
    );

    // Saving writes the tagged form, which reads back without consulting names.
    let saved = PersistenceAdapter::default().save(&graph).unwrap();
    let document: serde_json::Value = serde_json::from_str(&saved.contents).unwrap();
    assert_eq!(
        document["nodes"][1]["properties"]["output_text"],
        json!({ "direction": "output", "value": null })
    );
    assert_eq!(document["nodes"][0]["metadata"]["color"], json!("teal"));
}

#[test]
fn test_tagged_direction_survives_reload() {
    let mut graph = GraphModel::new();
    graph.add_node(
        Node::new("n", "processing", "N")
            .with_property(Property::input("output_hint", json!("not a port out"))),
    );
    let adapter = PersistenceAdapter::default();
    let file = adapter.save(&graph).unwrap();

    let document = GraphDocument::from_slice(file.contents.as_bytes()).unwrap();
    assert_eq!(
        document.nodes[0].port_direction("output_hint"),
        Some(PortDirection::Input)
    );
}

#[test]
fn test_export_to_directory_sink() {
    let dir = std::env::temp_dir().join(format!("flowgraph-export-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let graph = create_chain_graph();
    let adapter = PersistenceAdapter::new("chain.json");
    let mut sink = DirectorySink::new(&dir);
    adapter.export(&graph, &mut sink).unwrap();

    let written = dir.join("chain.json");
    let mut reloaded = GraphModel::new();
    adapter.load_file(&mut reloaded, &written).unwrap();
    assert_eq!(reloaded.nodes(), graph.nodes());

    let err = adapter
        .load_file(&mut reloaded, &dir.join("missing.json"))
        .unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));

    fs::remove_dir_all(&dir).unwrap();
}

struct RecordingSink {
    files: Vec<ExportedFile>,
}

impl FileSink for RecordingSink {
    fn save_file(&mut self, file: &ExportedFile) -> std::result::Result<(), PersistenceError> {
        self.files.push(file.clone());
        Ok(())
    }
}

#[test]
fn test_export_hands_file_to_sink() {
    let graph = create_chain_graph();
    let mut sink = RecordingSink { files: Vec::new() };
    PersistenceAdapter::default()
        .export(&graph, &mut sink)
        .unwrap();

    assert_eq!(sink.files.len(), 1);
    assert_eq!(sink.files[0].file_name, "flow.json");
    assert_eq!(sink.files[0].mime_type, "application/json");
}

//! Common test utilities for building graphs and documents.
use flowgraph::prelude::*;
use serde_json::json;

/// Three nodes wired in a chain: `a.output_text -> b.text`, `b.output_result -> c.text`.
///
/// With the default row layout every node is 160 wide. `a` and `c` have one property
/// (60 tall), `b` has three (108 tall).
#[allow(dead_code)]
pub fn create_chain_graph() -> GraphModel {
    let mut graph = GraphModel::new();
    graph.add_node(
        Node::new("a", "input", "Source")
            .with_position(100.0, 100.0)
            .with_property(Property::output("output_text", json!(""))),
    );
    graph.add_node(
        Node::new("b", "processing", "Transform")
            .with_position(400.0, 100.0)
            .with_property(Property::input("text", json!("")))
            .with_property(Property::input("operation", json!("uppercase")))
            .with_property(Property::output("output_result", json!(null))),
    );
    graph.add_node(
        Node::new("c", "output", "Sink")
            .with_position(700.0, 200.0)
            .with_property(Property::input("text", json!(""))),
    );
    graph.add_edge(Edge::new("a", "output_text", "b", "text"));
    graph.add_edge(Edge::new("b", "output_result", "c", "text"));
    graph
}

/// An editor holding [`create_chain_graph`] with the frame at the screen origin.
#[allow(dead_code)]
pub fn create_chain_editor() -> Editor {
    Editor::with_graph(EditorConfig::default(), create_chain_graph())
}

/// A document written before port directions were tagged: bare property values whose
/// direction is implied by the `output` name prefix.
#[allow(dead_code)]
pub const LEGACY_DOCUMENT_JSON: &str = r#"{
  "nodes": [
    {
      "id": "node-1",
      "type": "input",
      "label": "Text",
      "inputs": [],
      "outputs": [],
      "metadata": { "position": { "x": 120, "y": 80 }, "color": "teal" },
      "properties": { "placeholder": "type here", "output": "" }
    },
    {
      "id": "node-2",
      "type": "processing",
      "label": "Upper",
      "metadata": { "position": { "x": 420, "y": 90 } },
      "properties": { "text": "", "operation": "uppercase", "output_text": null }
    }
  ],
  "edges": [
    { "from_node": "node-1", "from_port": "output", "to_node": "node-2", "to_port": "text" }
  ]
}"#;

//! # Flowgraph - Node-Link Graph Editor Core
//!
//! **Flowgraph** is the engine behind an interactive flow graph editor: typed nodes placed on
//! a scrolling canvas, directed connections between named ports, dragging, and JSON
//! import/export. It has no opinion about the GUI toolkit on top; the host forwards pointer
//! gestures in screen coordinates and draws whatever [`editor::Frame`] it gets back.
//!
//! ## Core Workflow
//!
//! 1.  **Create an Editor**: `Editor::new(EditorConfig::default())`, or load a config with
//!     `EditorConfig::from_file`.
//! 2.  **Build or Load a Graph**: panel commands (`add_node`, `load`) or direct
//!     `GraphModel` mutations through `graph_mut`.
//! 3.  **Forward Gestures**: port activations start and commit connections, drags move nodes.
//! 4.  **Draw**: `frame()` runs the measure-then-compute cycle and returns SVG path data for
//!     every renderable edge plus the pending-connection preview.
//! 5.  **Save**: `save()` produces a pretty-printed `flow.json` for the host to store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowgraph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut editor = Editor::new(EditorConfig::default());
//!
//!     editor.graph_mut().add_node(
//!         Node::new("source", "input", "Source")
//!             .with_position(100.0, 100.0)
//!             .with_property(Property::output("output_text", serde_json::json!(""))),
//!     );
//!     editor.graph_mut().add_node(
//!         Node::new("sink", "output", "Sink")
//!             .with_position(400.0, 150.0)
//!             .with_property(Property::input("text", serde_json::json!(""))),
//!     );
//!
//!     // Double click the output port, then the input port.
//!     editor.port_activate("source", "output_text", Point::new(260.0, 140.0));
//!     editor.port_activate("sink", "text", Point::new(400.0, 190.0));
//!
//!     for edge in editor.frame().edges {
//!         println!("{}: {}", edge.key, edge.d());
//!     }
//!
//!     let file = editor.save()?;
//!     std::fs::write(&file.file_name, file.contents)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connection;
pub mod drag;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod model;
pub mod persistence;
pub mod prelude;
pub mod viewport;

//! Prelude module for convenient imports
//!
//! Re-exports the types most hosts need to drive an editor session.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowgraph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let mut editor = Editor::new(EditorConfig::from_file("editor.json")?);
//! editor.load_file(Path::new("flow.json"))?;
//!
//! let frame = editor.frame();
//! println!("{} edges to draw", frame.edges.len());
//! # Ok(())
//! # }
//! ```

// Editor session and configuration
pub use crate::config::{EditorConfig, LayoutMetrics, SpawnWindow};
pub use crate::editor::{Editor, Frame};

// Services
pub use crate::connection::{ConnectionBuilder, PendingConnection, PortGestureOutcome};
pub use crate::drag::DragPositionTracker;
pub use crate::persistence::{ExportedFile, FileSink, GraphDocument, PersistenceAdapter};
pub use crate::viewport::{EdgePath, LayoutEngine, ViewportController};

// Data model
pub use crate::model::{Edge, GraphModel, Node, PortDirection, Property};

// Geometry
pub use crate::geometry::{Path as EdgeCurve, PathStyle, Point, Rect, build_path, build_path_d};

// Error types
pub use crate::error::{ConfigError, GestureError, PersistenceError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

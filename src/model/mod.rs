//! The flow graph data model: nodes with ordered, direction-tagged properties, edges
//! between named ports, and the [`GraphModel`] that owns and mutates them.

mod edge;
mod graph;
mod node;
mod properties;

pub use edge::Edge;
pub use graph::GraphModel;
pub use node::{Node, NodeMetadata};
pub use properties::{LEGACY_OUTPUT_PREFIX, PortDirection, Properties, Property};

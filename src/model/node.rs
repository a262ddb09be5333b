use super::properties::{PortDirection, Properties};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node metadata. `position` is in canvas space; any other keys are kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(default)]
    pub position: Point,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A positioned, typed unit in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Open tag such as `input`, `processing` or `output`. Purely descriptive.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub inputs: Vec<Value>,
    #[serde(default)]
    pub outputs: Vec<Value>,
    #[serde(default)]
    pub metadata: NodeMetadata,
    #[serde(default)]
    pub properties: Properties,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: label.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            metadata: NodeMetadata::default(),
            properties: Properties::new(),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.metadata.position = Point::new(x, y);
        self
    }

    pub fn with_property(mut self, property: super::Property) -> Self {
        self.properties.insert(property);
        self
    }

    pub fn position(&self) -> Point {
        self.metadata.position
    }

    /// Direction of the port named `port`, if the node has one.
    pub fn port_direction(&self, port: &str) -> Option<PortDirection> {
        self.properties.get(port).map(|p| p.direction)
    }
}

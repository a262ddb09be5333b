use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A directed connection from an output port of one node to an input port of another.
///
/// Edges refer to nodes by id only; nothing guarantees the ids resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from_node: String,
    pub from_port: String,
    pub to_node: String,
    pub to_port: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Edge {
    pub fn new(
        from_node: impl Into<String>,
        from_port: impl Into<String>,
        to_node: impl Into<String>,
        to_port: impl Into<String>,
    ) -> Self {
        Self {
            from_node: from_node.into(),
            from_port: from_port.into(),
            to_node: to_node.into(),
            to_port: to_port.into(),
            metadata: None,
        }
    }

    /// Render key, `from->to`. Parallel edges between the same pair share a key.
    pub fn key(&self) -> String {
        format!("{}->{}", self.from_node, self.to_node)
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.from_node == node_id || self.to_node == node_id
    }

    /// True when both edges run between the same source and target nodes, ports ignored.
    pub fn same_node_pair(&self, other: &Edge) -> bool {
        self.from_node == other.from_node && self.to_node == other.to_node
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_node == self.to_node
    }
}

//! Node drag tracking.
//!
//! The rendered box of a node does not follow the pointer during a drag; only a committed
//! position moves it, after the next layout pass. So at grab time we remember where inside
//! the box the pointer was, and at release we compare the pointer against the box origin
//! again. `delta = pointer - box_origin - grab_offset` is how far the node must move.

use crate::error::GestureError;
use crate::geometry::Point;
use crate::model::GraphModel;
use ahash::AHashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    grab_offset: Point,
}

/// Per-node drag offset bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct DragPositionTracker {
    sessions: AHashMap<String, DragSession>,
}

impl DragPositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self, node_id: &str) -> bool {
        self.sessions.contains_key(node_id)
    }

    /// Pointer offset inside the node's box recorded at grab time.
    pub fn grab_offset(&self, node_id: &str) -> Option<Point> {
        self.sessions.get(node_id).map(|s| s.grab_offset)
    }

    /// Records the grab. `pointer` and `node_origin` must be in the same coordinate space.
    pub fn start(&mut self, node_id: &str, pointer: Point, node_origin: Point) {
        let grab_offset = pointer - node_origin;
        log::debug!(
            "Drag started on '{}' with offset ({}, {})",
            node_id,
            grab_offset.x,
            grab_offset.y
        );
        self.sessions
            .insert(node_id.to_string(), DragSession { grab_offset });
    }

    /// Where the node would land if released now. Nothing is committed.
    pub fn update(
        &self,
        node_id: &str,
        pointer: Point,
        node_origin: Point,
        logical_position: Point,
    ) -> Result<Point, GestureError> {
        let session = self
            .sessions
            .get(node_id)
            .ok_or_else(|| GestureError::NoActiveDrag(node_id.to_string()))?;
        Ok(logical_position + (pointer - node_origin - session.grab_offset))
    }

    /// Ends the drag and commits the new position to the graph.
    pub fn finish(
        &mut self,
        graph: &mut GraphModel,
        node_id: &str,
        pointer: Point,
        node_origin: Point,
    ) -> Result<Point, GestureError> {
        let session = self
            .sessions
            .remove(node_id)
            .ok_or_else(|| GestureError::NoActiveDrag(node_id.to_string()))?;
        let logical = graph
            .node(node_id)
            .ok_or_else(|| GestureError::NodeNotFound(node_id.to_string()))?
            .position();

        let delta = pointer - node_origin - session.grab_offset;
        let position = logical + delta;
        log::debug!(
            "Drag ended on '{}', moved by ({}, {})",
            node_id,
            delta.x,
            delta.y
        );
        graph.update_node_position(node_id, position);
        Ok(position)
    }

    /// Drops a drag without moving the node.
    pub fn abort(&mut self, node_id: &str) -> bool {
        self.sessions.remove(node_id).is_some()
    }

    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}

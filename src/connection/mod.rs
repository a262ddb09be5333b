//! Building connections between ports.
//!
//! A connection is drawn in two gestures: one on an output port starts it, one on an input
//! port commits it. In between the free end follows the pointer and is rendered as an
//! uncommitted preview.

use crate::error::GestureError;
use crate::geometry::{Path, PathStyle, Point, build_path};
use crate::model::{Edge, GraphModel, PortDirection};

/// An in-progress connection that has not been committed to the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConnection {
    pub from_node_id: String,
    pub from_port: String,
    /// Canvas-space point where the gesture began.
    pub start: Point,
    /// Canvas-space point the free end currently tracks.
    pub end: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConnectionState {
    #[default]
    Idle,
    Connecting(PendingConnection),
}

/// What a port gesture did.
#[derive(Debug, Clone, PartialEq)]
pub enum PortGestureOutcome {
    /// A new pending connection was started (possibly replacing an older one).
    Started,
    /// The pending connection was committed as this edge.
    Committed(Edge),
    /// Input port gesture while nothing was pending.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionBuilder {
    state: ConnectionState,
}

impl ConnectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn pending(&self) -> Option<&PendingConnection> {
        match &self.state {
            ConnectionState::Connecting(pending) => Some(pending),
            ConnectionState::Idle => None,
        }
    }

    pub fn is_connecting(&self) -> bool {
        self.pending().is_some()
    }

    /// Starts a connection from an output port. Any pending connection is discarded.
    pub fn begin(&mut self, from_node_id: &str, from_port: &str, at: Point) {
        if let Some(previous) = self.pending() {
            log::debug!(
                "Discarding pending connection from {}:{}",
                previous.from_node_id,
                previous.from_port
            );
        }
        log::debug!("Starting connection from {}:{}", from_node_id, from_port);
        self.state = ConnectionState::Connecting(PendingConnection {
            from_node_id: from_node_id.to_string(),
            from_port: from_port.to_string(),
            start: at,
            end: at,
        });
    }

    /// Moves the free end of the pending connection. No-op when idle.
    pub fn track(&mut self, at: Point) {
        if let ConnectionState::Connecting(pending) = &mut self.state {
            pending.end = at;
        }
    }

    /// Commits the pending connection to `to_node:to_port` and returns to idle.
    ///
    /// Self-loops are accepted. Returns `None` when no connection was pending.
    pub fn complete(&mut self, graph: &mut GraphModel, to_node: &str, to_port: &str) -> Option<Edge> {
        let ConnectionState::Connecting(pending) = std::mem::take(&mut self.state) else {
            return None;
        };
        let edge = Edge::new(pending.from_node_id, pending.from_port, to_node, to_port);
        graph.add_edge(edge.clone());
        Some(edge)
    }

    /// Drops the pending connection without creating an edge.
    pub fn cancel(&mut self) -> bool {
        let was_connecting = self.is_connecting();
        if was_connecting {
            log::debug!("Connection cancelled");
        }
        self.state = ConnectionState::Idle;
        was_connecting
    }

    /// Routes a gesture on a port by the port's direction: output ports start a
    /// connection, input ports commit the pending one.
    pub fn port_gesture(
        &mut self,
        graph: &mut GraphModel,
        node_id: &str,
        port: &str,
        at: Point,
    ) -> Result<PortGestureOutcome, GestureError> {
        let node = graph
            .node(node_id)
            .ok_or_else(|| GestureError::NodeNotFound(node_id.to_string()))?;
        let direction = node
            .port_direction(port)
            .ok_or_else(|| GestureError::PortNotFound {
                node_id: node_id.to_string(),
                port: port.to_string(),
            })?;

        match direction {
            PortDirection::Output => {
                self.begin(node_id, port, at);
                Ok(PortGestureOutcome::Started)
            }
            PortDirection::Input => Ok(self
                .complete(graph, node_id, port)
                .map_or(PortGestureOutcome::Ignored, PortGestureOutcome::Committed)),
        }
    }

    /// Path of the uncommitted connection, from its start to the tracked end.
    pub fn preview(&self, style: &PathStyle) -> Option<Path> {
        self.pending()
            .map(|pending| build_path(pending.start, pending.end, style))
    }
}

//! The editor session.
//!
//! [`Editor`] owns one instance of each service (graph, connection builder, drag tracker,
//! viewport, persistence) and routes host gestures to them. Gestures arrive in screen
//! coordinates and are converted to canvas space through the viewport. A gesture that
//! cannot be applied is logged and dropped; it never fails the host.

mod panel;
mod svg;

use crate::config::EditorConfig;
use crate::connection::{ConnectionBuilder, PortGestureOutcome};
use crate::drag::DragPositionTracker;
use crate::error::GestureError;
use crate::geometry::{Path, Point, Rect};
use crate::model::GraphModel;
use crate::persistence::PersistenceAdapter;
use crate::viewport::{EdgePath, ViewportController};

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub edges: Vec<EdgePath>,
    /// Uncommitted connection preview, in canvas space.
    pub preview: Option<Path>,
}

pub struct Editor {
    config: EditorConfig,
    graph: GraphModel,
    connections: ConnectionBuilder,
    drags: DragPositionTracker,
    viewport: ViewportController,
    persistence: PersistenceAdapter,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self::with_graph(config, GraphModel::new())
    }

    pub fn with_graph(config: EditorConfig, graph: GraphModel) -> Self {
        let viewport = ViewportController::new(&config);
        let persistence = PersistenceAdapter::new(config.file_name.clone());
        Self {
            config,
            graph,
            connections: ConnectionBuilder::new(),
            drags: DragPositionTracker::new(),
            viewport,
            persistence,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// Direct access for commands the editor does not wrap (delete, rename, ...).
    pub fn graph_mut(&mut self) -> &mut GraphModel {
        &mut self.graph
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    pub fn connections(&self) -> &ConnectionBuilder {
        &self.connections
    }

    pub fn drags(&self) -> &DragPositionTracker {
        &self.drags
    }

    /// Brings the measured layout and edge paths up to date with the graph.
    pub fn sync(&mut self) -> bool {
        self.viewport.sync(&self.graph)
    }

    /// Syncs and returns the drawable state.
    pub fn frame(&mut self) -> Frame {
        self.sync();
        Frame {
            edges: self.viewport.edge_paths().to_vec(),
            preview: self.connections.preview(&self.config.preview_style),
        }
    }

    /// Canvas-space box of a node. Syncs first so the box and the scroll offset agree.
    pub fn node_canvas_box(&mut self, node_id: &str) -> Option<Rect> {
        self.sync();
        let origin = self.viewport.canvas_rect().origin();
        self.viewport
            .node_box(node_id)
            .map(|b| b.translate(Point::default() - origin))
    }

    // --- connection gestures ---

    /// Activation (double click) of a port at a screen point.
    pub fn port_activate(
        &mut self,
        node_id: &str,
        port: &str,
        screen: Point,
    ) -> Option<PortGestureOutcome> {
        let at = self.viewport.to_canvas(screen);
        self.connections
            .port_gesture(&mut self.graph, node_id, port, at)
            .inspect_err(|e| log::warn!("Port gesture ignored: {}", e))
            .ok()
    }

    pub fn pointer_moved(&mut self, screen: Point) {
        if self.connections.is_connecting() {
            let at = self.viewport.to_canvas(screen);
            self.connections.track(at);
        }
    }

    pub fn cancel_connection(&mut self) -> bool {
        self.connections.cancel()
    }

    /// A click that hit neither a node nor a port: cancels any pending connection and
    /// clears the selection.
    pub fn click_empty_canvas(&mut self) {
        self.connections.cancel();
        self.graph.select_node(None);
    }

    /// Routes a double click by hit testing: ports first, then nodes, then empty canvas.
    pub fn double_click(&mut self, screen: Point) -> Option<PortGestureOutcome> {
        self.sync();
        if let Some(hit) = self.viewport.port_at(screen) {
            return self.port_activate(&hit.node_id, &hit.port, screen);
        }
        match self.viewport.node_at(screen).map(str::to_string) {
            Some(node_id) => {
                self.graph.select_node(Some(&node_id));
            }
            None => self.click_empty_canvas(),
        }
        None
    }

    // --- drag gestures ---

    fn measured_origin(&mut self, node_id: &str) -> Result<Point, GestureError> {
        self.sync();
        self.viewport
            .node_box(node_id)
            .map(|b| b.origin())
            .ok_or_else(|| GestureError::NodeNotMeasured(node_id.to_string()))
    }

    /// Grabs a node at a screen point.
    pub fn drag_start(&mut self, node_id: &str, screen: Point) -> bool {
        match self.measured_origin(node_id) {
            Ok(origin) => {
                self.drags.start(node_id, screen, origin);
                true
            }
            Err(e) => {
                log::warn!("Drag start ignored: {}", e);
                false
            }
        }
    }

    /// Live drag tick. Returns where the node would land, without committing.
    pub fn drag_move(&mut self, node_id: &str, screen: Point) -> Option<Point> {
        let result = self.measured_origin(node_id).and_then(|origin| {
            let logical = self
                .graph
                .node(node_id)
                .ok_or_else(|| GestureError::NodeNotFound(node_id.to_string()))?
                .position();
            self.drags.update(node_id, screen, origin, logical)
        });
        result.inspect_err(|e| log::debug!("Drag tick ignored: {}", e)).ok()
    }

    /// Releases a node and commits its new position.
    pub fn drag_end(&mut self, node_id: &str, screen: Point) -> Option<Point> {
        let result = match self.measured_origin(node_id) {
            Ok(origin) => self.drags.finish(&mut self.graph, node_id, screen, origin),
            Err(e) => {
                self.drags.abort(node_id);
                Err(e)
            }
        };
        result
            .inspect_err(|e| log::warn!("Drag end ignored: {}", e))
            .ok()
    }

    pub fn drag_abort(&mut self, node_id: &str) -> bool {
        self.drags.abort(node_id)
    }
}

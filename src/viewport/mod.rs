//! The canvas and its viewport.
//!
//! The canvas is a fixed-size coordinate space that scrolls inside a smaller frame on
//! screen. [`ViewportController::sync`] runs the update cycle: once the graph has been
//! mutated, every node is measured into a screen-space box, then edge anchors are read
//! off those boxes and handed to the path geometry engine.

mod background;
mod layout;

pub use background::DotGrid;
pub use layout::{LayoutEngine, MeasuredNode, NodeLayout, PortAnchor, RowLayout};

use crate::config::EditorConfig;
use crate::geometry::{Path, PathStyle, Point, Rect, build_path};
use crate::model::{GraphModel, PortDirection};
use ahash::AHashMap;

/// A computed edge, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    /// `from->to` node key.
    pub key: String,
    /// Index of the edge in the graph's edge list.
    pub edge_index: usize,
    /// Canvas-local anchor on the right edge of the source box.
    pub from: Point,
    /// Canvas-local anchor on the left edge of the target box.
    pub to: Point,
    pub path: Path,
}

impl EdgePath {
    /// SVG path data.
    pub fn d(&self) -> String {
        self.path.to_string()
    }
}

/// A port found by hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct PortHit {
    pub node_id: String,
    pub port: String,
    pub direction: PortDirection,
}

pub struct ViewportController {
    canvas_width: f64,
    canvas_height: f64,
    frame_origin: Point,
    frame_width: f64,
    frame_height: f64,
    scroll: Point,
    edge_style: PathStyle,
    port_hit_radius: f64,
    background: DotGrid,
    layout: Box<dyn LayoutEngine>,

    boxes: AHashMap<String, MeasuredNode>,
    paint_order: Vec<String>,
    paths: Vec<EdgePath>,
    skipped_edges: usize,
    synced_revision: Option<u64>,
    dirty: bool,
}

impl ViewportController {
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_layout(config, Box::new(RowLayout::new(config.layout)))
    }

    /// Uses a custom measurement pass instead of the default row layout.
    pub fn with_layout(config: &EditorConfig, layout: Box<dyn LayoutEngine>) -> Self {
        Self {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            frame_origin: config.frame_origin,
            frame_width: config.frame_width,
            frame_height: config.frame_height,
            scroll: Point::default(),
            edge_style: config.edge_style,
            port_hit_radius: config.layout.port_hit_radius,
            background: DotGrid::new(config.background_spacing),
            layout,
            boxes: AHashMap::new(),
            paint_order: Vec::new(),
            paths: Vec::new(),
            skipped_edges: 0,
            synced_revision: None,
            dirty: true,
        }
    }

    pub fn edge_style(&self) -> &PathStyle {
        &self.edge_style
    }

    pub fn set_edge_style(&mut self, style: PathStyle) {
        if self.edge_style != style {
            self.edge_style = style;
            self.dirty = true;
        }
    }

    pub fn set_layout(&mut self, layout: Box<dyn LayoutEngine>) {
        self.layout = layout;
        self.dirty = true;
    }

    pub fn scroll(&self) -> Point {
        self.scroll
    }

    /// Scrolls to `offset`, clamped so the frame never leaves the canvas.
    pub fn set_scroll(&mut self, offset: Point) {
        let max_x = (self.canvas_width - self.frame_width).max(0.0);
        let max_y = (self.canvas_height - self.frame_height).max(0.0);
        let clamped = Point::new(offset.x.clamp(0.0, max_x), offset.y.clamp(0.0, max_y));
        if clamped != self.scroll {
            self.scroll = clamped;
            self.dirty = true;
        }
    }

    pub fn scroll_by(&mut self, delta: Point) {
        self.set_scroll(self.scroll + delta);
    }

    /// Moves or resizes the visible frame. The scroll offset is re-clamped.
    pub fn set_frame(&mut self, origin: Point, width: f64, height: f64) {
        self.frame_origin = origin;
        self.frame_width = width;
        self.frame_height = height;
        self.dirty = true;
        self.set_scroll(self.scroll);
    }

    /// The canvas' box in screen space. Its origin moves as the frame scrolls.
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(
            self.frame_origin.x - self.scroll.x,
            self.frame_origin.y - self.scroll.y,
            self.canvas_width,
            self.canvas_height,
        )
    }

    /// Canvas-space region currently visible through the frame.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(
            self.scroll.x,
            self.scroll.y,
            self.frame_width.min(self.canvas_width),
            self.frame_height.min(self.canvas_height),
        )
    }

    pub fn to_canvas(&self, screen: Point) -> Point {
        screen - self.canvas_rect().origin()
    }

    pub fn to_screen(&self, canvas: Point) -> Point {
        canvas + self.canvas_rect().origin()
    }

    /// Runs the measure-then-compute cycle if the graph, scroll, frame or style changed
    /// since the last run. Returns whether anything was recomputed.
    pub fn sync(&mut self, graph: &GraphModel) -> bool {
        if !self.dirty && self.synced_revision == Some(graph.revision()) {
            return false;
        }
        self.measure(graph);
        self.compute_paths(graph);
        self.synced_revision = Some(graph.revision());
        self.dirty = false;
        true
    }

    /// Marks the layout stale so the next `sync` re-measures even without a graph change.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    fn measure(&mut self, graph: &GraphModel) {
        let canvas_origin = self.canvas_rect().origin();
        self.boxes.clear();
        self.paint_order.clear();
        for node in graph.nodes() {
            let layout = self.layout.measure(node);
            let origin = canvas_origin + node.position();
            let measured = MeasuredNode {
                bounds: Rect::new(origin.x, origin.y, layout.width, layout.height),
                ports: layout.ports,
            };
            if self.boxes.insert(node.id.clone(), measured).is_some() {
                log::warn!("Duplicate node id '{}', keeping the last one", node.id);
                self.paint_order.retain(|id| id != &node.id);
            }
            self.paint_order.push(node.id.clone());
        }
    }

    fn compute_paths(&mut self, graph: &GraphModel) {
        let canvas_origin = self.canvas_rect().origin();
        let mut paths = Vec::with_capacity(graph.edges().len());
        let mut skipped = 0;

        for (edge_index, edge) in graph.edges().iter().enumerate() {
            let (Some(from_box), Some(to_box)) =
                (self.boxes.get(&edge.from_node), self.boxes.get(&edge.to_node))
            else {
                log::warn!(
                    "Connection refers to non-existent node: {} (from found: {}, to found: {})",
                    edge.key(),
                    self.boxes.contains_key(&edge.from_node),
                    self.boxes.contains_key(&edge.to_node)
                );
                skipped += 1;
                continue;
            };

            let from = from_box.bounds.right_center() - canvas_origin;
            let to = to_box.bounds.left_center() - canvas_origin;
            paths.push(EdgePath {
                key: edge.key(),
                edge_index,
                from,
                to,
                path: build_path(from, to, &self.edge_style),
            });
        }

        self.paths = paths;
        self.skipped_edges = skipped;
    }

    /// Edges computed by the last `sync`, in graph order. Dangling edges are absent.
    pub fn edge_paths(&self) -> &[EdgePath] {
        &self.paths
    }

    /// Number of edges the last `sync` had to skip.
    pub fn skipped_edges(&self) -> usize {
        self.skipped_edges
    }

    /// Screen-space box of a node as of the last `sync`.
    pub fn node_box(&self, node_id: &str) -> Option<Rect> {
        self.boxes.get(node_id).map(|m| m.bounds)
    }

    pub fn measured(&self, node_id: &str) -> Option<&MeasuredNode> {
        self.boxes.get(node_id)
    }

    /// Topmost node under a screen point.
    pub fn node_at(&self, screen: Point) -> Option<&str> {
        self.paint_order
            .iter()
            .rev()
            .find(|id| self.boxes.get(*id).is_some_and(|m| m.bounds.contains(screen)))
            .map(String::as_str)
    }

    /// Topmost port whose anchor lies within the hit radius of a screen point.
    pub fn port_at(&self, screen: Point) -> Option<PortHit> {
        self.paint_order.iter().rev().find_map(|id| {
            let measured = self.boxes.get(id)?;
            measured
                .ports
                .iter()
                .find(|p| (measured.bounds.origin() + p.offset).distance(screen) <= self.port_hit_radius)
                .map(|p| PortHit {
                    node_id: id.clone(),
                    port: p.name.clone(),
                    direction: p.direction,
                })
        })
    }

    /// Background dot centers inside the visible part of the canvas.
    pub fn background_dots(&self) -> Vec<Point> {
        self.background.dots_in(self.visible_rect())
    }

    pub fn background(&self) -> &DotGrid {
        &self.background
    }
}

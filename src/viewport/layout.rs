use crate::config::LayoutMetrics;
use crate::geometry::{Point, Rect};
use crate::model::{Node, PortDirection};

/// Where a port's connection point sits, relative to its node's box origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PortAnchor {
    pub name: String,
    pub direction: PortDirection,
    pub offset: Point,
}

/// The realized size of a node and the anchors of its ports.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
    pub width: f64,
    pub height: f64,
    pub ports: Vec<PortAnchor>,
}

/// A node after the layout pass: its box in screen space plus its port anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredNode {
    pub bounds: Rect,
    pub ports: Vec<PortAnchor>,
}

impl MeasuredNode {
    pub fn port_point(&self, port: &str) -> Option<Point> {
        self.ports
            .iter()
            .find(|p| p.name == port)
            .map(|p| self.bounds.origin() + p.offset)
    }
}

/// Measures nodes the way the host would render them.
///
/// Port anchors for edges come from realized boxes, not from positions alone, so the
/// viewport needs a measurement pass before it can compute any geometry.
pub trait LayoutEngine {
    fn measure(&self, node: &Node) -> NodeLayout;
}

/// Title bar on top, one row per property below it. Input ports sit on the left edge and
/// output ports on the right edge, vertically centered on their row.
#[derive(Debug, Clone, Default)]
pub struct RowLayout {
    pub metrics: LayoutMetrics,
}

impl RowLayout {
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }
}

impl LayoutEngine for RowLayout {
    fn measure(&self, node: &Node) -> NodeLayout {
        let m = &self.metrics;
        let label_width = node.label.chars().count() as f64 * m.char_width + 2.0 * m.padding_x;
        let width = m.min_node_width.max(label_width);
        let rows = node.properties.len() as f64;
        let height = m.title_height + rows * m.row_height + m.body_padding;

        let ports = node
            .properties
            .iter()
            .enumerate()
            .map(|(i, prop)| {
                let y = m.title_height + m.row_height * (i as f64 + 0.5);
                let x = match prop.direction {
                    PortDirection::Input => 0.0,
                    PortDirection::Output => width,
                };
                PortAnchor {
                    name: prop.name.clone(),
                    direction: prop.direction,
                    offset: Point::new(x, y),
                }
            })
            .collect();

        NodeLayout {
            width,
            height,
            ports,
        }
    }
}

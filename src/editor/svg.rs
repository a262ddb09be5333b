use super::Editor;
use crate::geometry::{Num, Point, Rect};
use crate::model::PortDirection;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Editor {
    /// Renders the current frame as a standalone SVG document in canvas coordinates.
    pub fn render_svg(&mut self) -> String {
        let frame = self.frame();
        let width = self.config.canvas_width;
        let height = self.config.canvas_height;
        let canvas_origin = self.viewport.canvas_rect().origin();

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = Num(width),
            h = Num(height)
        );

        svg.push_str("  <g class=\"flowgraph-background\" fill=\"#94ec5d\">\n");
        let canvas = Rect::new(0.0, 0.0, width, height);
        for dot in self.viewport.background().dots_in(canvas) {
            svg.push_str(&format!(
                "    <circle cx=\"{}\" cy=\"{}\" r=\"1\"/>\n",
                Num(dot.x),
                Num(dot.y)
            ));
        }
        svg.push_str("  </g>\n");

        svg.push_str("  <g class=\"flowgraph-nodes\">\n");
        for node in self.graph.nodes() {
            let Some(measured) = self.viewport.measured(&node.id) else {
                continue;
            };
            let b = measured.bounds.translate(Point::default() - canvas_origin);
            svg.push_str(&format!(
                "    <g class=\"node node-{}\" data-id=\"{}\">\n",
                escape(&node.kind),
                escape(&node.id)
            ));
            svg.push_str(&format!(
                "      <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"4\" fill=\"#fff\" stroke=\"#ccc\"/>\n",
                Num(b.x),
                Num(b.y),
                Num(b.width),
                Num(b.height)
            ));
            svg.push_str(&format!(
                "      <text x=\"{}\" y=\"{}\" class=\"node-title\">{}</text>\n",
                Num(b.x + self.config.layout.padding_x),
                Num(b.y + self.config.layout.title_height * 0.7),
                escape(&node.label)
            ));
            for port in &measured.ports {
                let anchor = Point::new(b.x, b.y) + port.offset;
                let class = match port.direction {
                    PortDirection::Input => "input",
                    PortDirection::Output => "output",
                };
                svg.push_str(&format!(
                    "      <circle class=\"connection-point {}\" cx=\"{}\" cy=\"{}\" r=\"4\" data-port=\"{}\"/>\n",
                    class,
                    Num(anchor.x),
                    Num(anchor.y),
                    escape(&port.name)
                ));
            }
            svg.push_str("    </g>\n");
        }
        svg.push_str("  </g>\n");

        svg.push_str("  <g class=\"flowgraph-edges\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\">\n");
        for edge in &frame.edges {
            svg.push_str(&format!(
                "    <path class=\"connection-line\" data-key=\"{}\" d=\"{}\"/>\n",
                escape(&edge.key),
                edge.path
            ));
        }
        svg.push_str("  </g>\n");

        if let Some(preview) = &frame.preview {
            svg.push_str(&format!(
                "  <path class=\"pending-connection\" d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-dasharray=\"12 10\"/>\n",
                preview
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

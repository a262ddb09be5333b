//! Edge path geometry.
//!
//! Pure functions turning two endpoints and a [`PathStyle`] into SVG path data. Identical
//! inputs always produce byte-identical output, so these are safe to call on every
//! recomputation pass.

mod path;
mod primitives;
mod style;

pub use path::{Path, PathCommand};
pub use primitives::{Num, Point, Rect};
pub use style::{
    DEFAULT_ARC_CURVATURE, DEFAULT_CORNER_RADIUS, DEFAULT_CUBIC_STRENGTH, DEFAULT_QUAD_BEND,
    ElbowMode, PathStyle, UnknownStyle,
};

/// Builds the SVG `d` attribute for an edge from `(x1, y1)` to `(x2, y2)`.
pub fn build_path_d(x1: f64, y1: f64, x2: f64, y2: f64, style: &PathStyle) -> String {
    build_path(Point::new(x1, y1), Point::new(x2, y2), style).to_string()
}

/// Builds the structured path for an edge from `from` to `to`.
pub fn build_path(from: Point, to: Point, style: &PathStyle) -> Path {
    match *style {
        PathStyle::Line => line(from, to),
        PathStyle::Curved => curved(from, to),
        PathStyle::CubicH { strength } => {
            cubic_horizontal(from, to, strength.unwrap_or(DEFAULT_CUBIC_STRENGTH))
        }
        PathStyle::CubicV { strength } => {
            cubic_vertical(from, to, strength.unwrap_or(DEFAULT_CUBIC_STRENGTH))
        }
        PathStyle::Quad { bend } => quadratic(from, to, bend.unwrap_or(DEFAULT_QUAD_BEND)),
        PathStyle::Elbow { mode } => elbow(from, to, mode.unwrap_or_default()),
        PathStyle::RoundedElbowHV { r } => {
            rounded_elbow_hv(from, to, r.unwrap_or(DEFAULT_CORNER_RADIUS))
        }
        PathStyle::Arc { curvature } => arc(from, to, curvature.unwrap_or(DEFAULT_ARC_CURVATURE)),
    }
}

pub fn line(from: Point, to: Point) -> Path {
    Path::starting_at(from).line_to(to)
}

/// Horizontal S-curve with both control points on the x-midpoint.
pub fn curved(from: Point, to: Point) -> Path {
    let mid_x = (from.x + to.x) / 2.0;
    Path::starting_at(from).cubic_to(Point::new(mid_x, from.y), Point::new(mid_x, to.y), to)
}

/// Cubic curve leaving and entering horizontally. `strength` is in `0..=1`.
pub fn cubic_horizontal(from: Point, to: Point, strength: f64) -> Path {
    let c = (to.x - from.x).abs() * strength;
    Path::starting_at(from).cubic_to(
        Point::new(from.x + c, from.y),
        Point::new(to.x - c, to.y),
        to,
    )
}

/// Cubic curve leaving and entering vertically.
pub fn cubic_vertical(from: Point, to: Point, strength: f64) -> Path {
    let c = (to.y - from.y).abs() * strength;
    Path::starting_at(from).cubic_to(
        Point::new(from.x, from.y + c),
        Point::new(to.x, to.y - c),
        to,
    )
}

/// Quadratic curve bowed sideways by `bend` times the segment length.
pub fn quadratic(from: Point, to: Point, bend: f64) -> Path {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    // perpendicular to the segment
    let px = -dy;
    let py = dx;

    let mid = from.midpoint(to);
    let dist = dx.hypot(dy);
    let perp_len = px.hypot(py);
    let k = dist * bend / if perp_len == 0.0 { 1.0 } else { perp_len };

    Path::starting_at(from).quad_to(Point::new(mid.x + px * k, mid.y + py * k), to)
}

/// Orthogonal connector with two bends.
pub fn elbow(from: Point, to: Point, mode: ElbowMode) -> Path {
    match mode {
        ElbowMode::HV => {
            let mx = (from.x + to.x) / 2.0;
            Path::starting_at(from)
                .line_to(Point::new(mx, from.y))
                .line_to(Point::new(mx, to.y))
                .line_to(to)
        }
        ElbowMode::VH => {
            let my = (from.y + to.y) / 2.0;
            Path::starting_at(from)
                .line_to(Point::new(from.x, my))
                .line_to(Point::new(to.x, my))
                .line_to(to)
        }
    }
}

/// HV elbow with rounded corners. Each corner radius is clamped to the length of the
/// segments meeting at it.
pub fn rounded_elbow_hv(from: Point, to: Point, r: f64) -> Path {
    let (x1, y1, x2, y2) = (from.x, from.y, to.x, to.y);
    let mx = (x1 + x2) / 2.0;
    let rise = (y2 - y1).abs();

    let r1 = r.min((mx - x1).abs()).min(rise);
    let r2 = r.min((x2 - mx).abs()).min(rise);

    let sx = if mx >= x1 { 1.0 } else { -1.0 };
    let sy = if y2 >= y1 { 1.0 } else { -1.0 };

    Path::starting_at(from)
        .line_to(Point::new(mx - sx * r1, y1))
        .quad_to(Point::new(mx, y1), Point::new(mx, y1 + sy * r1))
        .line_to(Point::new(mx, y2 - sy * r2))
        .quad_to(Point::new(mx, y2), Point::new(mx + sx * r2, y2))
        .line_to(to)
}

/// Circular arc whose radius scales with the endpoint distance. Always sweeps clockwise.
pub fn arc(from: Point, to: Point, curvature: f64) -> Path {
    let r = (from.distance(to) * curvature).max(1.0);
    Path::starting_at(from).arc_to(r, true, to)
}

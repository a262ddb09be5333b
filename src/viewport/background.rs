use crate::geometry::{Point, Rect};

/// Dotted canvas background: two square lattices of the same spacing, the second shifted
/// by half a cell on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGrid {
    pub spacing: f64,
}

impl DotGrid {
    pub fn new(spacing: f64) -> Self {
        Self { spacing }
    }

    /// All dot centers inside `area` (canvas space), row by row.
    pub fn dots_in(&self, area: Rect) -> Vec<Point> {
        let finite = [self.spacing, area.x, area.y, area.width, area.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.spacing <= 0.0 || area.width < 0.0 || area.height < 0.0 {
            return Vec::new();
        }
        let half = self.spacing / 2.0;
        let first = (area.top() / half).ceil() as i64;
        let last = (area.bottom() / half).floor() as i64;

        let mut dots = Vec::new();
        for row in first..=last {
            let y = row as f64 * half;
            // even half-rows hold the base lattice, odd ones the shifted one
            let shift = if row.rem_euclid(2) == 0 { 0.0 } else { half };
            let mut col = ((area.left() - shift) / self.spacing).ceil() as i64;
            loop {
                let x = col as f64 * self.spacing + shift;
                if x > area.right() {
                    break;
                }
                dots.push(Point::new(x, y));
                col += 1;
            }
        }
        dots
    }
}

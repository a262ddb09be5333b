use super::primitives::{Num, Point};
use itertools::Itertools;
use std::fmt;

/// A single SVG path command, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        c1: Point,
        c2: Point,
        to: Point,
    },
    QuadTo {
        ctrl: Point,
        to: Point,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
}

impl PathCommand {
    /// The point the pen rests on after this command.
    pub fn end_point(&self) -> Point {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
            PathCommand::CubicTo { to, .. }
            | PathCommand::QuadTo { to, .. }
            | PathCommand::ArcTo { to, .. } => *to,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {}", p),
            PathCommand::LineTo(p) => write!(f, "L {}", p),
            PathCommand::CubicTo { c1, c2, to } => write!(f, "C {}, {}, {}", c1, c2, to),
            PathCommand::QuadTo { ctrl, to } => write!(f, "Q {}, {}", ctrl, to),
            PathCommand::ArcTo {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                to,
            } => write!(
                f,
                "A {} {} {} {} {} {}",
                Num(*rx),
                Num(*ry),
                Num(*rotation),
                u8::from(*large_arc),
                u8::from(*sweep),
                to
            ),
        }
    }
}

/// A drawable path: an ordered list of commands whose `Display` is SVG `d` attribute data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Starts a path at `start`.
    pub fn starting_at(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo(start)],
        }
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(mut self, c1: Point, c2: Point, to: Point) -> Self {
        self.commands.push(PathCommand::CubicTo { c1, c2, to });
        self
    }

    pub fn quad_to(mut self, ctrl: Point, to: Point) -> Self {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
        self
    }

    pub fn arc_to(mut self, radius: f64, sweep: bool, to: Point) -> Self {
        self.commands.push(PathCommand::ArcTo {
            rx: radius,
            ry: radius,
            rotation: 0.0,
            large_arc: false,
            sweep,
            to,
        });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn start(&self) -> Option<Point> {
        self.commands.first().map(PathCommand::end_point)
    }

    pub fn end(&self) -> Option<Point> {
        self.commands.last().map(PathCommand::end_point)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.commands.iter().join(" "))
    }
}

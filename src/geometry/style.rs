use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CUBIC_STRENGTH: f64 = 0.5;
pub const DEFAULT_QUAD_BEND: f64 = 0.2;
pub const DEFAULT_CORNER_RADIUS: f64 = 12.0;
pub const DEFAULT_ARC_CURVATURE: f64 = 0.6;

/// Orientation of an orthogonal elbow connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElbowMode {
    /// Horizontal, vertical, horizontal; bends at the x-midpoint.
    #[default]
    HV,
    /// Vertical, horizontal, vertical; bends at the y-midpoint.
    VH,
}

/// Describes how an edge between two points is drawn.
///
/// Every parameter is optional; `None` falls back to the documented default when the
/// path is built. Serializes as `{ "kind": "cubicH", "strength": 0.5 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PathStyle {
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "curved")]
    Curved,
    #[serde(rename = "cubicH")]
    CubicH {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        strength: Option<f64>,
    },
    #[serde(rename = "cubicV")]
    CubicV {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        strength: Option<f64>,
    },
    #[serde(rename = "quad")]
    Quad {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bend: Option<f64>,
    },
    #[serde(rename = "elbow")]
    Elbow {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<ElbowMode>,
    },
    #[serde(rename = "roundedElbowHV")]
    RoundedElbowHV {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        r: Option<f64>,
    },
    #[serde(rename = "arc")]
    Arc {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        curvature: Option<f64>,
    },
}

impl Default for PathStyle {
    /// Committed edges are drawn as horizontal cubic curves.
    fn default() -> Self {
        PathStyle::CubicH { strength: None }
    }
}

impl PathStyle {
    pub fn cubic_h(strength: f64) -> Self {
        PathStyle::CubicH {
            strength: Some(strength),
        }
    }

    pub fn cubic_v(strength: f64) -> Self {
        PathStyle::CubicV {
            strength: Some(strength),
        }
    }

    pub fn quad(bend: f64) -> Self {
        PathStyle::Quad { bend: Some(bend) }
    }

    pub fn elbow(mode: ElbowMode) -> Self {
        PathStyle::Elbow { mode: Some(mode) }
    }

    pub fn rounded_elbow(r: f64) -> Self {
        PathStyle::RoundedElbowHV { r: Some(r) }
    }

    pub fn arc(curvature: f64) -> Self {
        PathStyle::Arc {
            curvature: Some(curvature),
        }
    }

    /// The name this style is addressed by in configuration and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            PathStyle::Line => "line",
            PathStyle::Curved => "curved",
            PathStyle::CubicH { .. } => "cubicH",
            PathStyle::CubicV { .. } => "cubicV",
            PathStyle::Quad { .. } => "quad",
            PathStyle::Elbow {
                mode: Some(ElbowMode::VH),
            } => "elbowVH",
            PathStyle::Elbow { .. } => "elbow",
            PathStyle::RoundedElbowHV { .. } => "roundedElbowHV",
            PathStyle::Arc { .. } => "arc",
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path style '{0}'")]
pub struct UnknownStyle(pub String);

impl FromStr for PathStyle {
    type Err = UnknownStyle;

    /// Parses a style name with default parameters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let style = match s {
            "line" => PathStyle::Line,
            "curved" => PathStyle::Curved,
            "cubicH" => PathStyle::CubicH { strength: None },
            "cubicV" => PathStyle::CubicV { strength: None },
            "quad" => PathStyle::Quad { bend: None },
            "elbow" | "elbowHV" => PathStyle::Elbow { mode: None },
            "elbowVH" => PathStyle::elbow(ElbowMode::VH),
            "roundedElbowHV" => PathStyle::RoundedElbowHV { r: None },
            "arc" => PathStyle::Arc { curvature: None },
            other => return Err(UnknownStyle(other.to_string())),
        };
        Ok(style)
    }
}

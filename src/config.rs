use crate::error::ConfigError;
use crate::geometry::{PathStyle, Point};
use serde::{Deserialize, Serialize};
use std::fs;

/// Metrics used by [`RowLayout`](crate::viewport::RowLayout) to size node boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub min_node_width: f64,
    pub char_width: f64,
    pub padding_x: f64,
    pub title_height: f64,
    pub row_height: f64,
    pub body_padding: f64,
    /// Radius around a port anchor that counts as a hit.
    pub port_hit_radius: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            min_node_width: 160.0,
            char_width: 7.5,
            padding_x: 8.0,
            title_height: 28.0,
            row_height: 24.0,
            body_padding: 8.0,
            port_hit_radius: 6.0,
        }
    }
}

/// Window new nodes are dropped into: `base + [0, spread)` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnWindow {
    pub base: Point,
    pub spread: u32,
}

impl Default for SpawnWindow {
    fn default() -> Self {
        Self {
            base: Point::new(100.0, 100.0),
            spread: 200,
        }
    }
}

/// Editor-wide settings. Every field has a default, so a config file only needs the keys
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Visible size of the scrolling frame around the canvas.
    pub frame_width: f64,
    pub frame_height: f64,
    /// Screen position of the frame's top-left corner.
    pub frame_origin: Point,
    pub edge_style: PathStyle,
    pub preview_style: PathStyle,
    pub background_spacing: f64,
    pub layout: LayoutMetrics,
    pub spawn: SpawnWindow,
    pub file_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 3000.0,
            canvas_height: 3000.0,
            frame_width: 1280.0,
            frame_height: 800.0,
            frame_origin: Point::default(),
            edge_style: PathStyle::default(),
            preview_style: PathStyle::Curved,
            background_spacing: 40.0,
            layout: LayoutMetrics::default(),
            spawn: SpawnWindow::default(),
            file_name: crate::persistence::DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl EditorConfig {
    /// Loads a config from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_frame(mut self, origin: Point, width: f64, height: f64) -> Self {
        self.frame_origin = origin;
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    pub fn with_edge_style(mut self, style: PathStyle) -> Self {
        self.edge_style = style;
        self
    }

    pub fn with_preview_style(mut self, style: PathStyle) -> Self {
        self.preview_style = style;
        self
    }

    pub fn with_layout(mut self, layout: LayoutMetrics) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnWindow) -> Self {
        self.spawn = spawn;
        self
    }
}

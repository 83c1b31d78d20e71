//! Shared configuration for Doodleseek
//!
//! This crate provides the single source of truth for the canvas dimensions,
//! stroke appearance, and remote search endpoint shared by the capture and
//! search crates. All values are injectable; the constants below are only
//! defaults.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 512;

/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 512;

/// Default stroke color as a hex triplet
pub const DEFAULT_STROKE_COLOR: &str = "#2c3e50";

/// Default stroke width in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 2.5;

/// Default search endpoint (local development backend)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/search-doodle";

/// Canvas dimensions for the drawing surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasConfig {
    /// Create a new canvas config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Appearance of rendered strokes
///
/// Strokes are drawn with round caps in a single solid color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color as a `#rrggbb` hex triplet
    pub color: String,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_STROKE_COLOR.to_string(),
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl StrokeStyle {
    /// Parse the color as opaque RGBA bytes
    ///
    /// Returns None if the color is not a `#rrggbb` hex triplet.
    pub fn color_rgba(&self) -> Option<[u8; 4]> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some([r, g, b, 255])
    }
}

/// Configuration for the remote search service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Full URL of the search endpoint
    pub endpoint: String,
    /// Optional request timeout in seconds (transport default when None)
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl SearchConfig {
    /// Create a search config pointing at the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: None,
        }
    }
}

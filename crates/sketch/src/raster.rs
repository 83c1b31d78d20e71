//! Headless software rendering surface.
//!
//! [`RasterCanvas`] draws strokes into an RGBA8 pixel buffer and produces
//! base64-encoded PNG snapshots, which is all the search workflow needs from
//! a surface. It backs tests and embedders without a GPU surface; windowed
//! embedders provide their own [`SketchSurface`] implementation.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{Rgba, RgbaImage};
use tracing::{debug, warn};

use doodleseek_config::{CanvasConfig, StrokeStyle};

use crate::surface::SketchSurface;
use crate::types::{Point, Segment};

/// Opaque white background, matching what the matching service expects
const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Fallback stroke color when the style's hex triplet fails to parse
const FALLBACK_COLOR: [u8; 4] = [0x2c, 0x3e, 0x50, 255];

/// Software canvas that rasterizes line segments with round caps.
pub struct RasterCanvas {
    pixels: RgbaImage,
}

impl RasterCanvas {
    /// Create a canvas of the configured size, filled with the background color
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(config.width, config.height, Rgba(BACKGROUND)),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Reset every pixel to the background color
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba(BACKGROUND);
        }
    }

    /// Get a pixel, or None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.pixels.get_pixel(x, y).0)
    }

    fn resolve_color(style: &StrokeStyle) -> [u8; 4] {
        style.color_rgba().unwrap_or_else(|| {
            warn!(color = %style.color, "unparseable stroke color, using fallback");
            FALLBACK_COLOR
        })
    }
}

impl SketchSurface for RasterCanvas {
    /// Stamp a solid thick line with round caps.
    ///
    /// A pixel is covered when its center lies within half the stroke width
    /// of the segment; the clamp in [`distance_to_segment`] gives the caps.
    fn append_segment(&mut self, segment: Segment, style: &StrokeStyle) {
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        let color = Rgba(Self::resolve_color(style));
        let radius = (style.width / 2.0).max(0.5);

        let min_x = (segment.start.x.min(segment.end.x) - radius).floor().max(0.0) as u32;
        let min_y = (segment.start.y.min(segment.end.y) - radius).floor().max(0.0) as u32;
        let max_x = ((segment.start.x.max(segment.end.x) + radius).ceil() as u32)
            .min(self.width().saturating_sub(1));
        let max_y = ((segment.start.y.max(segment.end.y) + radius).ceil() as u32)
            .min(self.height().saturating_sub(1));

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(center, &segment) <= radius {
                    self.pixels.put_pixel(x, y, color);
                }
            }
        }
    }

    fn capture_snapshot(&self) -> Option<String> {
        let mut png = Vec::new();
        if let Err(error) = self
            .pixels
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        {
            warn!(%error, "snapshot encoding failed");
            return None;
        }
        debug!(bytes = png.len(), "snapshot captured");
        Some(STANDARD.encode(&png))
    }
}

/// Distance from a point to the closest point on a segment.
fn distance_to_segment(point: Point, segment: &Segment) -> f32 {
    let vx = segment.end.x - segment.start.x;
    let vy = segment.end.y - segment.start.y;
    let length_squared = vx * vx + vy * vy;

    // Degenerate segment collapses to its start point
    if length_squared <= f32::EPSILON {
        return point.distance(&segment.start);
    }

    let t = ((point.x - segment.start.x) * vx + (point.y - segment.start.y) * vy) / length_squared;
    let t = t.clamp(0.0, 1.0);
    let closest = Point::new(segment.start.x + vx * t, segment.start.y + vy * t);
    point.distance(&closest)
}

//! Seam to the rendering surface collaborator.

use doodleseek_config::StrokeStyle;

use crate::types::Segment;

/// A 2D drawing surface that accepts vector line segments and can produce a
/// rasterized snapshot of the current frame.
///
/// The engine only ever appends segments and captures snapshots; everything
/// else about the surface (GPU, windowing, invalidation) belongs to the
/// embedder. Implementations are expected to draw segments with round caps in
/// the style's color and width.
pub trait SketchSurface {
    /// Draw one line segment onto the surface
    fn append_segment(&mut self, segment: Segment, style: &StrokeStyle);

    /// Capture the current frame as a base64-encoded PNG.
    ///
    /// Returns None when the surface is not ready to produce a snapshot.
    fn capture_snapshot(&self) -> Option<String>;
}

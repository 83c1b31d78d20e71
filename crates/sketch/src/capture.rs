//! Pointer-event state machine that turns raw contact samples into strokes.

use tracing::{debug, warn};

use doodleseek_config::StrokeStyle;

use crate::surface::SketchSurface;
use crate::types::{Point, Segment, Stroke};

/// Captures a continuous gesture (contact-down, N moves, contact-up) into
/// ordered [`Stroke`] data.
///
/// The capture state machine has no rendering-surface dependency; drawing
/// happens through the renderable projection ([`SketchCapture::renderable_segments`])
/// or [`SketchCapture::replay_onto`]. Single-point taps cannot render a line
/// and are discarded on release.
#[derive(Debug, Default)]
pub struct SketchCapture {
    /// Completed strokes in the order they were finished
    strokes: Vec<Stroke>,
    /// Points of the in-progress stroke (empty when not drawing)
    current: Vec<Point>,
    /// Whether a contact is currently down
    is_drawing: bool,
}

impl SketchCapture {
    /// Create an empty capture state
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new gesture at the given point.
    ///
    /// If a gesture is already active the previous in-progress stroke is
    /// discarded without completing it. That mirrors the upstream event
    /// source's behavior when a release event goes missing, so it is logged
    /// rather than treated as an error.
    pub fn begin_contact(&mut self, point: Point) {
        if self.is_drawing {
            warn!(
                dropped_points = self.current.len(),
                "contact began while a gesture was active; discarding in-progress stroke"
            );
        }
        self.is_drawing = true;
        self.current.clear();
        self.current.push(point);
    }

    /// Append a point to the in-progress stroke.
    ///
    /// Ignored when no gesture is active - out-of-order move events are not
    /// an error.
    pub fn move_contact(&mut self, point: Point) {
        if !self.is_drawing {
            return;
        }
        self.current.push(point);
    }

    /// End the current gesture.
    ///
    /// Completes the in-progress stroke if it captured at least 2 points,
    /// otherwise discards it. Never fails; always leaves the drawing flag
    /// cleared.
    pub fn end_contact(&mut self) {
        if self.is_drawing && self.current.len() >= 2 {
            let stroke = Stroke::new(std::mem::take(&mut self.current));
            debug!(points = stroke.len(), "stroke completed");
            self.strokes.push(stroke);
        } else {
            // Single-point tap or spurious release
            self.current.clear();
        }
        self.is_drawing = false;
    }

    /// Reset to the empty state: no strokes, no in-progress points, not drawing.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current.clear();
        self.is_drawing = false;
        debug!("canvas cleared");
    }

    /// Completed strokes in temporal order
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Points of the in-progress stroke
    pub fn current_points(&self) -> &[Point] {
        &self.current
    }

    /// Whether a contact is currently down
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Number of completed strokes
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// True when nothing has been completed and nothing is in progress
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.current.is_empty()
    }

    /// Renderable projection of the whole sketch.
    ///
    /// Yields the segments of every completed stroke in order, followed by
    /// the segments of the in-progress stroke. Pure function of the current
    /// state - safe to call on every redraw.
    pub fn renderable_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.strokes
            .iter()
            .flat_map(|stroke| stroke.segments())
            .chain(self.current.windows(2).map(|pair| Segment {
                start: pair[0],
                end: pair[1],
            }))
    }

    /// Replay every renderable segment onto a surface.
    ///
    /// Convenience for embedders that redraw the full sketch rather than
    /// appending incrementally.
    pub fn replay_onto(&self, surface: &mut dyn SketchSurface, style: &StrokeStyle) {
        for segment in self.renderable_segments() {
            surface.append_segment(segment, style);
        }
    }
}

//! Core stroke data types.

use serde::{Deserialize, Serialize};

/// A single point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One continuous contact-to-release gesture.
///
/// Completed strokes are immutable and always hold at least 2 points; the
/// capture state machine discards anything shorter before completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in the order they were captured
    pub points: Vec<Point>,
}

impl Stroke {
    /// Create a stroke from captured points
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of captured points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the stroke holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Renderable projection of this stroke.
    ///
    /// Yields the `n - 1` consecutive point pairs as line segments; a stroke
    /// with fewer than 2 points yields nothing. Pure and restartable - the
    /// same state produces the same sequence on every call.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|pair| Segment {
            start: pair[0],
            end: pair[1],
        })
    }
}

/// A single renderable line segment between two captured points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Segment length in surface units
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_count() {
        let stroke = Stroke::new(vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 10.0),
        ]);
        let segments: Vec<_> = stroke.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Point::new(0.0, 0.0));
        assert_eq!(segments[0].end, Point::new(5.0, 5.0));
        assert_eq!(segments[1].start, Point::new(5.0, 5.0));
        assert_eq!(segments[1].end, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_short_stroke_yields_no_segments() {
        let empty = Stroke::new(vec![]);
        assert_eq!(empty.segments().count(), 0);

        let single = Stroke::new(vec![Point::new(1.0, 1.0)]);
        assert_eq!(single.segments().count(), 0);
    }

    #[test]
    fn test_segments_idempotent() {
        let stroke = Stroke::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(6.0, 8.0),
        ]);
        let first: Vec<_> = stroke.segments().collect();
        let second: Vec<_> = stroke.segments().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 0.001);
    }
}

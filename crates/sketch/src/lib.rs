//! Doodleseek sketch capture - stroke data structures and capture state machine
//!
//! This crate provides the drawing half of the engine:
//! - [`types::Stroke`] - An ordered point sequence for one drawn gesture
//! - [`capture::SketchCapture`] - Pointer-event state machine producing strokes
//! - [`surface::SketchSurface`] - Seam to the rendering surface collaborator
//! - [`raster::RasterCanvas`] - Headless software surface with PNG snapshots
//!
//! Stroke capture is pure state manipulation with no rendering-surface
//! dependency; the renderable projection ([`Stroke::segments`]) is the only
//! bridge to drawing.

pub mod capture;
pub mod raster;
pub mod surface;
pub mod types;

pub use capture::*;
pub use raster::*;
pub use surface::*;
pub use types::*;

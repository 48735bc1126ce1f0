use crate::foundation::{color::Rgba, math::Vec3};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A colored, sized point in camera-independent world space.
///
/// Produced by scene builders, consumed by the projector; immutable for the
/// duration of a frame.
pub struct WorldCell {
    /// Position in world space.
    pub position: Vec3,
    /// Square side length before projection.
    pub size: f64,
    /// Fill color before depth shading.
    pub color: Rgba,
}

impl WorldCell {
    /// Build a cell.
    pub fn new(position: Vec3, size: f64, color: Rgba) -> Self {
        Self {
            position,
            size,
            color,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An axis-aligned screen-space square, ready for vector serialization.
///
/// Projector output lists are in draw order; later cells paint over earlier
/// ones.
pub struct ScreenCell {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Depth-shaded fill color.
    pub fill: Rgba,
}

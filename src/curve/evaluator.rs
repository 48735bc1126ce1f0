//! Orbit-curve evaluation.
//!
//! A [`CurveChain`] composes nested sub-circles into a closed curve. The
//! evaluator folds the chain innermost-to-outermost, threading four reference
//! points through each layer; only the final curve point is publicly
//! meaningful, but the intermediate points must be carried exactly for the
//! composition to come out right at non-terminal layers.

use kurbo::{Point, Vec2};

use crate::{
    curve::layer::{CurveChain, CurveLayer},
    foundation::error::OrreryResult,
    foundation::math::rotate_about,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// One composed curve sample.
pub struct CurvePoint {
    /// Curve position.
    pub point: Point,
    /// Reference point on the composed sub-circle through the origin.
    pub base: Point,
    /// Terminal reference point of the composition.
    pub terminal: Point,
    /// Composed origin that curve coordinates are expressed against.
    pub origin: Point,
}

impl CurvePoint {
    /// Horizontal curve coordinate, relative to the composed origin.
    pub fn cosine(&self) -> f64 {
        self.point.x - self.origin.x
    }

    /// Vertical curve coordinate, relative to the composed origin.
    pub fn sine(&self) -> f64 {
        self.point.y - self.origin.y
    }
}

/// Evaluate `chain` at `angle` radians.
///
/// Pure: identical inputs always produce identical output. The chain is
/// validated on every call; use [`evaluate_unchecked`] in hot loops after
/// validating once.
pub fn evaluate(chain: &CurveChain, angle: f64) -> OrreryResult<CurvePoint> {
    chain.validate()?;
    Ok(evaluate_unchecked(chain, angle))
}

/// Evaluate without re-validating `chain`.
///
/// Callers must have validated the chain: degenerate radius ratios divide by
/// zero inside the chord construction.
pub fn evaluate_unchecked(chain: &CurveChain, angle: f64) -> CurvePoint {
    let unit = Point::new(angle.cos(), angle.sin());
    let seed = CurvePoint {
        point: unit,
        base: unit,
        terminal: unit,
        origin: Point::ORIGIN,
    };
    chain
        .layers
        .iter()
        .rev()
        .fold(seed, |parent, layer| compose_layer(layer, &parent))
}

/// Apply one layer to the parent sample produced by the layers inside it.
fn compose_layer(layer: &CurveLayer, parent: &CurvePoint) -> CurvePoint {
    let radius = layer.sub_radius;
    let depth = layer.sub_depth * (1.0 - radius);
    let center = Vec2::new(depth * layer.sub_phase.cos(), depth * layer.sub_phase.sin());

    let place = |p: Point| Point::new(p.x * radius + center.x, p.y * radius + center.y);
    let sub_point = place(parent.point);
    let terminal = place(parent.terminal);
    let origin = place(parent.origin);
    let base = chord_base(origin, sub_point, radius);

    // Orientation turns the whole sub-construction about the global origin;
    // the loop rotation then spins everything about the rotated origin
    // (which it leaves fixed).
    let orient = |p: Point| rotate_about(p, Point::ORIGIN, layer.sub_orientation);
    let origin = orient(origin);
    let spin = |p: Point| rotate_about(orient(p), origin, layer.loop_rotation);

    CurvePoint {
        point: spin(sub_point),
        base: spin(base),
        terminal: spin(terminal),
        origin,
    }
}

/// Chord construction locating the base reference point.
///
/// `base` sits on the circle of the layer radius through `origin`, on the
/// side of the `origin -> sub_point` chord picked by the negative root.
/// The algebra is load-bearing: the curve shape is sensitive to this exact
/// form and to the root choice, so it must not be simplified.
fn chord_base(origin: Point, sub_point: Point, radius: f64) -> Point {
    let delta = origin - sub_point;
    let denom = delta.hypot2();
    let scalar = 0.5;
    let offset = (radius * radius / denom - 0.25).max(0.0).sqrt();
    let ortho = Vec2::new(-delta.y, delta.x);
    origin - delta * scalar - ortho * offset
}

#[cfg(test)]
#[path = "../../tests/unit/curve/evaluator.rs"]
mod tests;

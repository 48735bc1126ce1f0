use crate::foundation::error::{OrreryError, OrreryResult};

/// Smallest admissible sub-circle radius ratio.
///
/// A ratio of exactly 0 collapses the sub-circle to a point and the chord
/// construction divides by zero, so callers clamp to this sentinel instead.
pub const MIN_SUB_RADIUS: f64 = 1e-6;

/// Largest admissible sub-circle radius ratio.
///
/// A ratio of exactly 1 makes the sub-circle coincide with its parent;
/// callers clamp to this sentinel instead.
pub const MAX_SUB_RADIUS: f64 = 1.0 - 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One nested sub-circle of an orbit chain.
pub struct CurveLayer {
    /// Sub-circle radius as a fraction of its parent radius, strictly inside
    /// `(0, 1)` (see [`MIN_SUB_RADIUS`] / [`MAX_SUB_RADIUS`]).
    pub sub_radius: f64,
    /// Displacement of the sub-circle center from the parent origin, as a
    /// fraction of the largest displacement keeping the sub-circle inside its
    /// parent.
    #[serde(default)]
    pub sub_depth: f64,
    /// Angular phase of the center displacement, radians.
    #[serde(default)]
    pub sub_phase: f64,
    /// Orientation rotation applied to the whole sub-construction, radians.
    #[serde(default)]
    pub sub_orientation: f64,
    /// Extra rotation applied about the composed origin after orientation,
    /// radians.
    #[serde(default)]
    pub loop_rotation: f64,
}

impl CurveLayer {
    /// A centered layer with the given radius ratio and all angles zero.
    pub fn new(sub_radius: f64) -> Self {
        Self {
            sub_radius,
            sub_depth: 0.0,
            sub_phase: 0.0,
            sub_orientation: 0.0,
            loop_rotation: 0.0,
        }
    }

    /// Reject non-finite parameters and degenerate radius ratios.
    pub fn validate(&self) -> OrreryResult<()> {
        let finite = self.sub_radius.is_finite()
            && self.sub_depth.is_finite()
            && self.sub_phase.is_finite()
            && self.sub_orientation.is_finite()
            && self.loop_rotation.is_finite();
        if !finite {
            return Err(OrreryError::validation("layer parameters must be finite"));
        }
        if !(MIN_SUB_RADIUS..=MAX_SUB_RADIUS).contains(&self.sub_radius) {
            return Err(OrreryError::validation(format!(
                "sub_radius {} must lie strictly inside (0, 1)",
                self.sub_radius
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Ordered sequence of curve layers, outermost first.
///
/// Built fresh by callers, immutable during evaluation.
pub struct CurveChain {
    /// Layers ordered outermost-first; the last layer is innermost.
    pub layers: Vec<CurveLayer>,
}

impl CurveChain {
    /// Wrap a layer list.
    pub fn new(layers: Vec<CurveLayer>) -> Self {
        Self { layers }
    }

    /// Reject empty chains and invalid layers.
    pub fn validate(&self) -> OrreryResult<()> {
        if self.layers.is_empty() {
            return Err(OrreryError::validation(
                "curve chain must contain at least one layer",
            ));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            layer
                .validate()
                .map_err(|e| OrreryError::validation(format!("layer {i}: {e}")))?;
        }
        Ok(())
    }
}

impl From<Vec<CurveLayer>> for CurveChain {
    fn from(layers: Vec<CurveLayer>) -> Self {
        Self::new(layers)
    }
}

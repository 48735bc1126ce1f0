use crate::foundation::error::{OrreryError, OrreryResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Camera and lens configuration for one projection call.
///
/// Pure configuration; no state persists between calls.
pub struct Camera {
    /// Depth translation applied to world z before projection.
    pub depth: f64,
    /// Vertical field of view, radians, in `(0, π)`.
    pub fov_vertical_rad: f64,
    /// Near culling plane; must be `> 0`.
    pub near: f64,
    /// Far culling plane; must exceed `near`.
    pub far: f64,
    /// Distance at which depth shading reaches full darkness; must be `> 0`.
    pub light_depth: f64,
}

impl Camera {
    /// Reject malformed configurations before any cell is projected.
    pub fn validate(&self) -> OrreryResult<()> {
        let finite = self.depth.is_finite()
            && self.fov_vertical_rad.is_finite()
            && self.near.is_finite()
            && self.far.is_finite()
            && self.light_depth.is_finite();
        if !finite {
            return Err(OrreryError::validation("camera parameters must be finite"));
        }
        if self.fov_vertical_rad <= 0.0 || self.fov_vertical_rad >= std::f64::consts::PI {
            return Err(OrreryError::validation(
                "camera fov must lie strictly inside (0, \u{3c0})",
            ));
        }
        if self.near <= 0.0 {
            return Err(OrreryError::validation("camera near plane must be > 0"));
        }
        if self.near >= self.far {
            return Err(OrreryError::validation(
                "camera near plane must be closer than the far plane",
            ));
        }
        if self.light_depth <= 0.0 {
            return Err(OrreryError::validation("camera light_depth must be > 0"));
        }
        Ok(())
    }

    /// Perspective scale derived from the field of view.
    pub(crate) fn focal_scale(&self) -> f64 {
        1.0 / (self.fov_vertical_rad / 2.0).tan()
    }
}

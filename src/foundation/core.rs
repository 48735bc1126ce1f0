use crate::foundation::error::{OrreryError, OrreryResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Zero-based frame index within a sketch.
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Rational frame rate.
pub struct Fps {
    /// Numerator, must be > 0.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> OrreryResult<Self> {
        if num == 0 {
            return Err(OrreryError::validation("Fps num must be > 0"));
        }
        if den == 0 {
            return Err(OrreryError::validation("Fps den must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frame rate as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas dimensions in pixels.
pub struct FrameSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameSize {
    /// Build a validated frame size.
    pub fn new(width: u32, height: u32) -> OrreryResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Reject empty canvases.
    pub fn validate(self) -> OrreryResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(OrreryError::validation("FrameSize must be non-empty"));
        }
        Ok(())
    }

    /// Width over height.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

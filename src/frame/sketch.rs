//! The surface handed to animation harnesses: a per-frame description
//! function plus static sketch metadata.

use kurbo::Rect;

use crate::{
    foundation::color::Rgba,
    foundation::core::{Fps, FrameIndex, FrameSize},
    foundation::error::{OrreryError, OrreryResult},
    scene::model::ScreenCell,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Per-frame evaluation context passed to a [`FrameSource`].
pub struct FrameContext {
    /// Frame being described.
    pub index: FrameIndex,
    /// Declared total frame count of the sketch.
    pub count: u64,
}

impl FrameContext {
    /// Normalized progress through the sketch in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.index.0 as f64 / self.count as f64
        }
    }

    /// Progress expressed as an angle over one full turn.
    pub fn turn(&self) -> f64 {
        self.progress() * std::f64::consts::TAU
    }
}

/// Producer of one drawable frame description per index.
///
/// Implementations must be pure with respect to `ctx`: frames may be
/// evaluated out of order or concurrently, and the same context must always
/// describe the same frame.
pub trait FrameSource: Send + Sync {
    /// Describe the frame at `ctx`.
    fn frame(&self, ctx: FrameContext) -> OrreryResult<VectorFrame>;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A flat, depth-ordered vector frame ready for serialization.
pub struct VectorFrame {
    /// View rectangle mapped onto the output canvas.
    pub view_box: Rect,
    /// Background fill painted under all cells.
    pub background: Rgba,
    /// Screen cells in draw order.
    pub cells: Vec<ScreenCell>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static per-sketch metadata read by the animation harness.
///
/// The core never interprets `fps` or `quality`; they ride along for the
/// encoder driving the frames.
pub struct SketchConfig {
    /// Total number of frames.
    pub frame_count: u64,
    /// Output pixel dimensions.
    pub frame_size: FrameSize,
    /// Encoding frame rate.
    pub fps: Fps,
    /// Encoder quality factor in `(0, 1]`.
    #[serde(default = "default_quality")]
    pub quality: f64,
}

fn default_quality() -> f64 {
    1.0
}

impl SketchConfig {
    /// Reject empty sketches and out-of-range encoder settings.
    pub fn validate(&self) -> OrreryResult<()> {
        if self.frame_count == 0 {
            return Err(OrreryError::validation(
                "sketch frame_count must be at least 1",
            ));
        }
        self.frame_size.validate()?;
        // Deserialization can bypass Fps::new, so re-check here.
        Fps::new(self.fps.num, self.fps.den)?;
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(OrreryError::validation(
                "sketch quality must lie inside (0, 1]",
            ));
        }
        Ok(())
    }
}

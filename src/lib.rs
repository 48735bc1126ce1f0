//! Orrery generates procedural point-cloud geometry and renders it into
//! flat, depth-sorted 2D vector frames for algorithmically driven animation.
//!
//! # Pipeline overview
//!
//! 1. **Evaluate**: a [`CurveChain`] of nested orbiting sub-circles turns an
//!    input angle into a [`CurvePoint`] (an epicycle-like composition).
//! 2. **Compose**: callers lift curve samples into world-space
//!    [`WorldCell`]s (3D position + size + color), typically with the
//!    [`Vec3`] helpers in this crate.
//! 3. **Project**: [`project_cells`] applies a camera offset and perspective
//!    projection, culls against the depth range, stable-sorts by depth, and
//!    emits shaded [`ScreenCell`] squares in draw order.
//! 4. **Serialize**: [`frame_to_svg`] writes a frame as a flat `viewBox`'d
//!    SVG; [`write_svg_sequence`] drives a whole sketch.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation and projection are pure and
//!   stable for a given input; repeated renders are byte-identical.
//! - **No IO in renderers**: file output is front-loaded into
//!   [`write_svg_sequence`], never inside frame evaluation.
//! - **Frames are independent**: per-frame work shares nothing mutable, so
//!   the pipeline can fan frames out over a thread pool and collect them in
//!   frame-index order.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod curve;
mod foundation;
mod frame;
mod render;
mod scene;

pub use curve::evaluator::{CurvePoint, evaluate, evaluate_unchecked};
pub use curve::layer::{CurveChain, CurveLayer, MAX_SUB_RADIUS, MIN_SUB_RADIUS};
pub use foundation::color::Rgba;
pub use foundation::core::{Affine, Fps, FrameIndex, FrameSize, Point, Rect, Vec2};
pub use foundation::error::{OrreryError, OrreryResult};
pub use foundation::math::{Vec3, reflect_across_line, rotate_about};
pub use frame::sketch::{FrameContext, FrameSource, SketchConfig, VectorFrame};
pub use frame::svg::frame_to_svg;
pub use render::camera::Camera;
pub use render::pipeline::{
    RenderThreading, render_frames, render_svg_frames, write_svg_sequence,
};
pub use render::projector::{project_cells, project_cells_unchecked};
pub use scene::model::{ScreenCell, WorldCell};

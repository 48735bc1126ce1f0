//! Multi-frame rendering driver.
//!
//! Frames are pure functions of their context, so a sketch is embarrassingly
//! parallel: the parallel path fans frame evaluation out over a rayon pool
//! and collects results back in frame-index order before anything downstream
//! sees them.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{OrreryError, OrreryResult},
    frame::sketch::{FrameContext, FrameSource, SketchConfig, VectorFrame},
    frame::svg::frame_to_svg,
};

#[derive(Clone, Debug)]
/// Threading controls for multi-frame rendering.
pub struct RenderThreading {
    /// Enable parallel frame evaluation when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

/// Render every frame of `config` by querying `source`, in frame order.
///
/// A failing frame aborts the render and carries its frame index in the
/// error; other frames are never corrupted by a failure.
#[tracing::instrument(skip(source, config, threading))]
pub fn render_frames(
    source: &dyn FrameSource,
    config: &SketchConfig,
    threading: &RenderThreading,
) -> OrreryResult<Vec<VectorFrame>> {
    config.validate()?;
    let count = config.frame_count;

    if !threading.parallel {
        let mut out = Vec::with_capacity(count.min(4096) as usize);
        for index in 0..count {
            out.push(eval_frame(source, index, count)?);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        (0..count)
            .into_par_iter()
            .map(|index| eval_frame(source, index, count))
            .collect::<OrreryResult<Vec<_>>>()
    })
}

/// Render every frame and serialize each to an SVG document.
pub fn render_svg_frames(
    source: &dyn FrameSource,
    config: &SketchConfig,
    threading: &RenderThreading,
) -> OrreryResult<Vec<String>> {
    let frames = render_frames(source, config, threading)?;
    Ok(frames
        .iter()
        .map(|f| frame_to_svg(f, config.frame_size))
        .collect())
}

/// Render a sketch and write one `frame_NNNNN.svg` per frame under `dir`.
///
/// Returns the written paths in frame order. All rendering happens before
/// the first file is written, keeping IO out of the evaluation path.
#[tracing::instrument(skip(source, config, threading))]
pub fn write_svg_sequence(
    dir: &Path,
    source: &dyn FrameSource,
    config: &SketchConfig,
    threading: &RenderThreading,
) -> OrreryResult<Vec<PathBuf>> {
    let svgs = render_svg_frames(source, config, threading)?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let mut paths = Vec::with_capacity(svgs.len());
    for (index, svg) in svgs.iter().enumerate() {
        let path = dir.join(format!("frame_{index:05}.svg"));
        std::fs::write(&path, svg)
            .with_context(|| format!("write frame '{}'", path.display()))?;
        paths.push(path);
    }
    Ok(paths)
}

fn eval_frame(source: &dyn FrameSource, index: u64, count: u64) -> OrreryResult<VectorFrame> {
    source
        .frame(FrameContext {
            index: FrameIndex(index),
            count,
        })
        .map_err(|e| OrreryError::render(format!("frame {index}: {e}")))
}

fn build_thread_pool(threads: Option<usize>) -> OrreryResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(OrreryError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| OrreryError::render(format!("failed to build rayon thread pool: {e}")))
}

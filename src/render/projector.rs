//! Perspective projection of world cells into depth-sorted screen squares.
//!
//! The projector is an explicit multi-pass pipeline so its ordering
//! guarantees stay auditable: cull and annotate, stable-sort on the depth
//! key, then perspective-divide and shade. Output order is draw order.

use crate::{
    foundation::color::Rgba,
    foundation::error::OrreryResult,
    render::camera::Camera,
    scene::model::{ScreenCell, WorldCell},
};

/// Cell annotated with camera-space depth, awaiting sort and divide.
#[derive(Clone, Copy, Debug)]
struct DepthCell {
    distance: f64,
    depth_key: f64,
    x: f64,
    y: f64,
    size: f64,
    color: Rgba,
}

/// Project `cells` through `camera` into screen-space squares.
///
/// Surviving cells come back ordered by ascending projected distance, ties
/// keeping input order; the serialization layer must preserve this order so
/// later entries paint over earlier ones. Cells whose distance falls outside
/// `[near, far]` are culled (bounds inclusive), which also drops cells at or
/// behind the camera rather than letting a zero or negative divisor leak
/// non-finite values into the output.
#[tracing::instrument(skip(cells, camera), fields(cells = cells.len()))]
pub fn project_cells(cells: &[WorldCell], camera: &Camera) -> OrreryResult<Vec<ScreenCell>> {
    camera.validate()?;
    Ok(project_cells_unchecked(cells, camera))
}

/// Project without re-validating `camera`.
pub fn project_cells_unchecked(cells: &[WorldCell], camera: &Camera) -> Vec<ScreenCell> {
    let focal = camera.focal_scale();
    let depth_scale = -(camera.far + camera.near) / (camera.far - camera.near);
    let depth_translate = -(2.0 * camera.far * camera.near) / (camera.far - camera.near);

    let mut kept: Vec<DepthCell> = Vec::with_capacity(cells.len());
    for cell in cells {
        let camera_z = cell.position.z + camera.depth;
        let distance = -camera_z;
        // NaN fails both comparisons, so non-finite depths are culled too.
        if !(distance >= camera.near && distance <= camera.far) {
            continue;
        }
        kept.push(DepthCell {
            distance,
            depth_key: depth_scale * camera_z + depth_translate,
            x: cell.position.x * focal,
            y: cell.position.y * focal,
            size: cell.size * focal,
            color: cell.color,
        });
    }

    // The depth key is monotone in distance for a valid camera, so this is an
    // ascending-distance order; the sort is stable to keep equal-depth cells
    // deterministic frame to frame.
    kept.sort_by(|a, b| a.depth_key.total_cmp(&b.depth_key));

    kept.into_iter()
        .map(|cell| {
            let size = cell.size / cell.distance;
            let shade = (cell.distance / camera.light_depth).clamp(0.0, 1.0);
            ScreenCell {
                x: cell.x / cell.distance - size / 2.0,
                y: cell.y / cell.distance - size / 2.0,
                width: size,
                height: size,
                fill: cell.color.darkened(shade),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/projector.rs"]
mod tests;

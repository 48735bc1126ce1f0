use super::*;
use crate::foundation::math::Vec3;

fn lens() -> Camera {
    Camera {
        depth: -10.0,
        fov_vertical_rad: 102.9_f64.to_radians(),
        near: 0.1,
        far: 100.0,
        light_depth: 100.0,
    }
}

fn cell(x: f64, y: f64, z: f64, color: Rgba) -> WorldCell {
    WorldCell::new(Vec3::new(x, y, z), 1.0, color)
}

#[test]
fn worked_example_projects_a_centered_slightly_darkened_square() {
    let white = Rgba::rgb(1.0, 1.0, 1.0);
    let out = project_cells(&[cell(0.0, 0.0, 5.0, white)], &lens()).unwrap();
    assert_eq!(out.len(), 1);

    let square = &out[0];
    assert_eq!(square.width, square.height);
    assert!(square.width > 0.0);
    // Top-left corner plus half the size lands back on the optical axis.
    assert!((square.x + square.width / 2.0).abs() < 1e-12);
    assert!((square.y + square.height / 2.0).abs() < 1e-12);
    // distance = 5, light_depth = 100: darkened by 5%.
    assert!((square.fill.r - 0.95).abs() < 1e-12);
    assert_eq!(square.fill.to_hex(), "#f2f2f2");
}

#[test]
fn tight_far_plane_culls_the_example_cell() {
    let tight = Camera {
        far: 4.0,
        ..lens()
    };
    let white = Rgba::rgb(1.0, 1.0, 1.0);
    let out = project_cells(&[cell(0.0, 0.0, 5.0, white)], &tight).unwrap();
    assert!(out.is_empty());
}

#[test]
fn culling_is_boundary_inclusive() {
    let camera = Camera {
        depth: 0.0,
        near: 0.25,
        far: 4.0,
        ..lens()
    };
    let white = Rgba::rgb(1.0, 1.0, 1.0);
    // distance = -z with a zero camera depth.
    let at = |z: f64| cell(0.0, 0.0, z, white);

    assert_eq!(project_cells(&[at(-0.25)], &camera).unwrap().len(), 1);
    assert_eq!(project_cells(&[at(-4.0)], &camera).unwrap().len(), 1);
    assert!(project_cells(&[at(-0.2499)], &camera).unwrap().is_empty());
    assert!(project_cells(&[at(-4.0001)], &camera).unwrap().is_empty());
}

#[test]
fn behind_camera_and_non_finite_cells_are_culled_not_divided() {
    let camera = Camera {
        depth: 0.0,
        ..lens()
    };
    let white = Rgba::rgb(1.0, 1.0, 1.0);
    let out = project_cells(
        &[
            at_z(0.0, white),
            at_z(3.0, white),
            at_z(f64::NAN, white),
            at_z(f64::INFINITY, white),
        ],
        &camera,
    )
    .unwrap();
    assert!(out.is_empty());
}

fn at_z(z: f64, color: Rgba) -> WorldCell {
    WorldCell::new(Vec3::new(0.0, 0.0, z), 1.0, color)
}

#[test]
fn output_is_sorted_by_ascending_distance() {
    let camera = Camera {
        depth: 0.0,
        ..lens()
    };
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let green = Rgba::rgb(0.0, 1.0, 0.0);
    let blue = Rgba::rgb(0.0, 0.0, 1.0);
    let out = project_cells(
        &[at_z(-50.0, red), at_z(-5.0, green), at_z(-20.0, blue)],
        &camera,
    )
    .unwrap();

    // Nearer cells divide by a smaller distance, so widths descend as the
    // projected distance ascends.
    assert_eq!(out.len(), 3);
    assert!(out[0].width > out[1].width && out[1].width > out[2].width);
    assert!(out[0].fill.g > 0.0); // distance 5
    assert!(out[1].fill.b > 0.0); // distance 20
    assert!(out[2].fill.r > 0.0); // distance 50
}

#[test]
fn equal_distances_keep_input_order() {
    let camera = Camera {
        depth: 0.0,
        ..lens()
    };
    let red = Rgba::rgb(1.0, 0.0, 0.0);
    let blue = Rgba::rgb(0.0, 0.0, 1.0);
    let out = project_cells(&[at_z(-20.0, red), at_z(-20.0, blue)], &camera).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[0].fill.r > 0.0);
    assert!(out[1].fill.b > 0.0);
}

#[test]
fn shading_is_monotone_in_distance() {
    let camera = Camera {
        depth: 0.0,
        ..lens()
    };
    let white = Rgba::rgb(1.0, 1.0, 1.0);
    let out = project_cells(&[at_z(-5.0, white), at_z(-80.0, white)], &camera).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[1].fill.r < out[0].fill.r);
    assert!(out[1].fill.g < out[0].fill.g);
    assert!(out[1].fill.b < out[0].fill.b);

    // At and beyond light_depth the fill bottoms out at black.
    let far_out = project_cells(&[at_z(-100.0, white)], &camera).unwrap();
    assert_eq!(far_out[0].fill.to_hex(), "#000000");
}

#[test]
fn projection_is_deterministic() {
    let camera = lens();
    let cells: Vec<WorldCell> = (0..32)
        .map(|i| {
            let t = f64::from(i) * 0.37;
            cell(t.cos(), t.sin(), t.cos() * 3.0, Rgba::rgb(0.8, 0.4, 0.1))
        })
        .collect();
    let a = project_cells(&cells, &camera).unwrap();
    let b = project_cells(&cells, &camera).unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_camera_is_rejected() {
    let bad = Camera {
        near: 50.0,
        far: 10.0,
        ..lens()
    };
    let white = Rgba::rgb(1.0, 1.0, 1.0);
    assert!(project_cells(&[cell(0.0, 0.0, 5.0, white)], &bad).is_err());
}

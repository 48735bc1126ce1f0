use super::*;
use crate::curve::layer::{CurveChain, CurveLayer};

const ANGLES: [f64; 5] = [0.0, 0.4, 1.9, 3.7, 5.9];

fn single(layer: CurveLayer) -> CurveChain {
    CurveChain::new(vec![layer])
}

#[test]
fn single_layer_reduces_to_scaled_circle() {
    let radius = 0.37;
    for phase in [0.0, 1.1, 4.2] {
        let chain = single(CurveLayer {
            sub_phase: phase,
            ..CurveLayer::new(radius)
        });
        for angle in ANGLES {
            let sample = evaluate(&chain, angle).unwrap();
            assert!((sample.cosine() - radius * angle.cos()).abs() < 1e-12);
            assert!((sample.sine() - radius * angle.sin()).abs() < 1e-12);
        }
    }
}

#[test]
fn center_displacement_cancels_in_relative_coordinates() {
    // The origin is displaced together with the curve point, so coordinates
    // relative to the composed origin are unchanged by sub_depth alone.
    let radius = 0.61;
    let chain = single(CurveLayer {
        sub_depth: 0.8,
        sub_phase: 1.3,
        ..CurveLayer::new(radius)
    });
    for angle in ANGLES {
        let sample = evaluate(&chain, angle).unwrap();
        assert!((sample.cosine() - radius * angle.cos()).abs() < 1e-12);
        assert!((sample.sine() - radius * angle.sin()).abs() < 1e-12);
    }
}

#[test]
fn rotations_preserve_single_layer_radius() {
    let radius = 0.45;
    let chain = single(CurveLayer {
        sub_orientation: 0.7,
        loop_rotation: -1.9,
        ..CurveLayer::new(radius)
    });
    for angle in ANGLES {
        let sample = evaluate(&chain, angle).unwrap();
        let r2 = sample.cosine().powi(2) + sample.sine().powi(2);
        assert!((r2 - radius * radius).abs() < 1e-12);
    }
}

#[test]
fn base_sits_on_the_layer_circle_through_origin() {
    let radius = 0.52;
    let chain = single(CurveLayer {
        sub_depth: 0.4,
        sub_phase: 2.2,
        ..CurveLayer::new(radius)
    });
    for angle in ANGLES {
        let sample = evaluate(&chain, angle).unwrap();
        assert!(((sample.base - sample.origin).hypot() - radius).abs() < 1e-12);
    }
}

fn nested_chain() -> CurveChain {
    CurveChain::new(vec![
        CurveLayer {
            sub_depth: 0.35,
            sub_phase: 0.9,
            sub_orientation: 0.25,
            loop_rotation: -0.6,
            ..CurveLayer::new(0.8)
        },
        CurveLayer {
            sub_depth: 0.7,
            sub_phase: -2.1,
            sub_orientation: 1.4,
            loop_rotation: 0.3,
            ..CurveLayer::new(0.33)
        },
        CurveLayer {
            sub_depth: 0.15,
            sub_phase: 3.0,
            ..CurveLayer::new(0.55)
        },
    ])
}

#[test]
fn periodic_in_two_pi() {
    let chain = nested_chain();
    for angle in ANGLES {
        let a = evaluate(&chain, angle).unwrap();
        let b = evaluate(&chain, angle + std::f64::consts::TAU).unwrap();
        assert!((a.point - b.point).hypot() < 1e-9);
        assert!((a.base - b.base).hypot() < 1e-9);
        assert!((a.terminal - b.terminal).hypot() < 1e-9);
        assert!((a.origin - b.origin).hypot() < 1e-9);
    }
}

#[test]
fn evaluation_is_deterministic() {
    let chain = nested_chain();
    let a = evaluate(&chain, 2.6).unwrap();
    let b = evaluate(&chain, 2.6).unwrap();
    assert_eq!(a, b);
    assert_eq!(evaluate_unchecked(&chain, 2.6), a);
}

#[test]
fn degenerate_chains_are_rejected_before_evaluation() {
    assert!(evaluate(&CurveChain::new(vec![]), 1.0).is_err());
    assert!(evaluate(&single(CurveLayer::new(0.0)), 1.0).is_err());
    assert!(evaluate(&single(CurveLayer::new(1.0)), 1.0).is_err());
}

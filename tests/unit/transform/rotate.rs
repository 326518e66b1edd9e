use super::*;
use crate::model::pyramid::PYRAMID_VERTICES;
use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

const EPS: f64 = 1e-12;

fn close(a: DVec3, b: DVec3) -> bool {
    (a - b).abs().max_element() < EPS
}

#[test]
fn zero_angle_is_identity() {
    let out = rotate_about_vertical_axis(&PYRAMID_VERTICES, 0.0);
    assert_eq!(out, PYRAMID_VERTICES.to_vec());
}

#[test]
fn full_turn_matches_zero_angle() {
    let a = rotate_about_vertical_axis(&PYRAMID_VERTICES, 0.0);
    let b = rotate_about_vertical_axis(&PYRAMID_VERTICES, TAU);
    for (pa, pb) in a.iter().zip(&b) {
        assert!(close(*pa, *pb), "{pa:?} vs {pb:?}");
    }
}

#[test]
fn quarter_turn_follows_right_handed_formula() {
    let out = rotate_about_vertical_axis(&[DVec3::new(1.0, 0.5, 0.0)], FRAC_PI_2);
    // x' = x cos + z sin = 0, z' = -x sin + z cos = -1
    assert!(close(out[0], DVec3::new(0.0, 0.5, -1.0)), "{:?}", out[0]);
}

#[test]
fn preserves_radius_about_axis_and_height() {
    for step in 0..64 {
        let angle = -3.0 * PI + f64::from(step) * 0.37;
        let out = rotate_about_vertical_axis(&PYRAMID_VERTICES, angle);
        for (before, after) in PYRAMID_VERTICES.iter().zip(&out) {
            let r0 = before.x * before.x + before.z * before.z;
            let r1 = after.x * after.x + after.z * after.z;
            assert!((r0 - r1).abs() < 1e-9);
            assert_eq!(before.y, after.y);
        }
    }
}

#[test]
fn input_is_not_mutated_and_order_is_kept() {
    let input = PYRAMID_VERTICES;
    let out = rotate_about_vertical_axis(&input, 1.0);
    assert_eq!(input, PYRAMID_VERTICES);
    assert_eq!(out.len(), input.len());
    // The apex lies on the axis and must not move.
    assert!(close(out[4], input[4]));
}

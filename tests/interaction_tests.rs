// Host-side tests for pointer smoothing and coordinate mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod interaction {
    include!("../src/core/interaction.rs");
}

use constants::POINTER_SMOOTHING;
use glam::Vec2;
use interaction::*;
use rand::{Rng, SeedableRng};

#[test]
fn starts_centred_and_inactive() {
    let s = InteractionState::default();
    assert_eq!(s.target_pos, Vec2::new(0.5, 0.5));
    assert_eq!(s.smooth_pos, Vec2::new(0.5, 0.5));
    assert_eq!(s.target_active, 0.0);
    assert_eq!(s.smooth_active, 0.0);
}

#[test]
fn activity_error_decays_geometrically() {
    let mut s = InteractionState::default();
    s.pointer_moved(Vec2::new(0.5, 0.5));

    let keep = 1.0 - POINTER_SMOOTHING;
    for n in 1..=120 {
        s.step();
        let expected = keep.powi(n);
        let remaining = 1.0 - s.smooth_active;
        assert!(
            (remaining - expected).abs() < 1e-4,
            "frame {n}: remaining {remaining} expected {expected}"
        );
    }
}

#[test]
fn position_converges_monotonically() {
    let mut s = InteractionState::default();
    let target = Vec2::new(0.9, 0.1);
    s.pointer_moved(target);

    let mut last = s.smooth_pos.distance(target);
    for _ in 0..200 {
        s.step();
        let d = s.smooth_pos.distance(target);
        assert!(d <= last);
        last = d;
    }
    assert!(last < 1e-3);
}

#[test]
fn leaving_keeps_position_and_fades_activity() {
    let mut s = InteractionState::default();
    s.pointer_moved(Vec2::new(0.2, 0.8));
    for _ in 0..100 {
        s.step();
    }
    let peak = s.smooth_active;
    assert!(peak > 0.99);

    s.pointer_left();
    assert_eq!(s.target_active, 0.0);
    assert_eq!(s.target_pos, Vec2::new(0.2, 0.8));

    s.step();
    assert!((s.smooth_active - peak * (1.0 - POINTER_SMOOTHING)).abs() < 1e-6);
    for _ in 0..300 {
        s.step();
    }
    assert!(s.smooth_active < 1e-6);
}

#[test]
fn smoothed_values_stay_between_start_and_target() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut s = InteractionState::default();
        let target = Vec2::new(rng.gen_range(-0.5..1.5), rng.gen_range(-0.5..1.5));
        let start = s.smooth_pos;
        s.pointer_moved(target);
        for _ in 0..rng.gen_range(1..60) {
            s.step();
        }
        let lo = start.min(target) - Vec2::splat(1e-6);
        let hi = start.max(target) + Vec2::splat(1e-6);
        assert!(s.smooth_pos.cmpge(lo).all() && s.smooth_pos.cmple(hi).all());
        assert!((0.0..=1.0).contains(&s.smooth_active));
    }
}

#[test]
fn client_mapping_flips_y() {
    let origin = Vec2::new(100.0, 50.0);
    let size = Vec2::new(200.0, 100.0);

    let top_left = client_to_unit(Vec2::new(100.0, 50.0), origin, size).unwrap();
    assert_eq!(top_left, Vec2::new(0.0, 1.0));

    let bottom_right = client_to_unit(Vec2::new(300.0, 150.0), origin, size).unwrap();
    assert_eq!(bottom_right, Vec2::new(1.0, 0.0));

    let middle = client_to_unit(Vec2::new(200.0, 100.0), origin, size).unwrap();
    assert_eq!(middle, Vec2::new(0.5, 0.5));
}

#[test]
fn client_mapping_does_not_clamp() {
    let uv = client_to_unit(Vec2::new(-100.0, 300.0), Vec2::ZERO, Vec2::new(200.0, 200.0)).unwrap();
    assert_eq!(uv, Vec2::new(-0.5, -0.5));
}

#[test]
fn degenerate_rect_maps_to_nothing() {
    assert!(client_to_unit(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::new(0.0, 10.0)).is_none());
    assert!(client_to_unit(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::new(10.0, 0.0)).is_none());
    assert!(client_to_unit(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::new(f32::NAN, 1.0)).is_none());
}

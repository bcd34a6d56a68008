// Host-side tests for backing-store sizing and the screen geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod surface {
    include!("../src/core/surface.rs");
}

use surface::*;

#[test]
fn backing_size_scales_with_pixel_ratio() {
    let s = SurfaceSize::from_css(800.0, 600.0, 2.0);
    assert_eq!(s, SurfaceSize { width: 1600, height: 1200 });
    let [w, h, aspect] = s.resolution();
    assert_eq!((w, h), (1600.0, 1200.0));
    assert!((aspect - 4.0 / 3.0).abs() < 1e-6);
}

#[test]
fn unknown_pixel_ratio_counts_as_one() {
    let expected = SurfaceSize { width: 320, height: 240 };
    assert_eq!(SurfaceSize::from_css(320.0, 240.0, 0.0), expected);
    assert_eq!(SurfaceSize::from_css(320.0, 240.0, -2.0), expected);
    assert_eq!(SurfaceSize::from_css(320.0, 240.0, f64::NAN), expected);
}

#[test]
fn fractional_sizes_truncate() {
    let s = SurfaceSize::from_css(100.7, 50.2, 1.5);
    assert_eq!(s, SurfaceSize { width: 151, height: 75 });
}

#[test]
fn collapsed_container_keeps_one_pixel() {
    assert_eq!(
        SurfaceSize::from_css(0.0, 0.0, 2.0),
        SurfaceSize { width: 1, height: 1 }
    );
    assert_eq!(
        SurfaceSize::from_css(f64::INFINITY, 10.0, 1.0),
        SurfaceSize { width: 1, height: 10 }
    );
}

#[test]
fn oversized_container_is_clamped_to_device_limit() {
    // A page-tall container on a high-density display
    let s = SurfaceSize::from_css(1200.0, 5000.0, 2.0).clamped(8192);
    assert_eq!(s, SurfaceSize { width: 2400, height: 8192 });

    let tiny_limit = SurfaceSize::from_css(300.0, 300.0, 1.0).clamped(0);
    assert_eq!(tiny_limit, SurfaceSize { width: 1, height: 1 });
}

#[test]
fn unchanged_size_needs_no_reconfigure() {
    let current = SurfaceSize { width: 1600, height: 900 };
    let requested = SurfaceSize::from_css(800.0, 450.0, 2.0);
    assert_eq!(current.resize_to(requested, 8192), None);
}

#[test]
fn changed_size_reconfigures_once() {
    let mut current = SurfaceSize { width: 1600, height: 900 };
    let requested = SurfaceSize::from_css(1000.0, 450.0, 2.0);

    let next = current.resize_to(requested, 8192);
    assert_eq!(next, Some(SurfaceSize { width: 2000, height: 900 }));
    current = next.unwrap();
    // Same request again: already there
    assert_eq!(current.resize_to(requested, 8192), None);
}

#[test]
fn requests_beyond_limit_settle_at_limit() {
    let mut current = SurfaceSize { width: 800, height: 600 };
    let requested = SurfaceSize::from_css(6000.0, 600.0, 2.0);

    current = current.resize_to(requested, 8192).unwrap();
    assert_eq!(current, SurfaceSize { width: 8192, height: 1200 });
    // Wider still, but already at the limit
    let wider = SurfaceSize::from_css(7000.0, 600.0, 2.0);
    assert_eq!(current.resize_to(wider, 8192), None);
}

/// Barycentric containment test for the clip-space corners.
fn inside(p: [f32; 2], tri: &[SurfaceVertex; 3]) -> bool {
    let [a, b, c] = [tri[0].position, tri[1].position, tri[2].position];
    let sign = |p: [f32; 2], q: [f32; 2], r: [f32; 2]| {
        (p[0] - r[0]) * (q[1] - r[1]) - (q[0] - r[0]) * (p[1] - r[1])
    };
    let d1 = sign(p, a, b);
    let d2 = sign(p, b, c);
    let d3 = sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

#[test]
fn geometry_covers_the_viewport() {
    assert_eq!(SURFACE_GEOMETRY.len(), 3);
    for corner in [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0], [0.0, 0.0]] {
        assert!(inside(corner, &SURFACE_GEOMETRY), "corner {corner:?} not covered");
    }
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<SurfaceVertex>(), 16);
    let bytes: &[u8] = bytemuck::cast_slice(&SURFACE_GEOMETRY);
    assert_eq!(bytes.len(), 48);
}

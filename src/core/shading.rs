// Host-side mirror of the `fs_main` stage in shaders/galaxy.wgsl.
//
// Every function here has a WGSL twin with the same name and arithmetic, so
// the shading math can be exercised without a GPU. Inputs are the exact
// uniform block the renderer uploads.

use super::uniforms::{DistortionMode, GalaxyUniforms};
use crate::constants::*;
use glam::{Mat2, Vec2, Vec3, Vec4};

const TAU_APPROX: f32 = 6.2831;
const PI_APPROX: f32 = 3.14159;
const LUMA: Vec3 = Vec3::new(0.299, 0.587, 0.114);

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn fract2(v: Vec2) -> Vec2 {
    v - v.floor()
}

/// Hermite step written out so reversed edges (`e0 > e1`) give a falling
/// edge, matching the shader helper.
#[inline]
pub fn smooth_step(e0: f32, e1: f32, x: f32) -> f32 {
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Pseudorandom value in `[0, 1)` for a lattice coordinate.
pub fn hash21(p: Vec2) -> f32 {
    let mut p = fract2(p * Vec2::new(123.34, 456.21));
    p += p.dot(p + 45.32);
    fract(p.x * p.y)
}

/// Triangle wave in `[0, 1]`, 1 at integers.
#[inline]
pub fn tri(x: f32) -> f32 {
    (fract(x) * 2.0 - 1.0).abs()
}

/// Smoothed triangle wave in `[0, 1]`, peaking at half-integers.
#[inline]
pub fn tris(x: f32) -> f32 {
    let t = fract(x);
    1.0 - smooth_step(0.0, 1.0, (2.0 * t - 1.0).abs())
}

/// Signed version of `tris`, in `[-1, 1]`.
#[inline]
pub fn trisn(x: f32) -> f32 {
    let t = fract(x);
    2.0 * (1.0 - smooth_step(0.0, 1.0, (2.0 * t - 1.0).abs())) - 1.0
}

pub fn hsv_to_rgb(c: Vec3) -> Vec3 {
    let k = Vec4::new(1.0, 2.0 / 3.0, 1.0 / 3.0, 3.0);
    let p = (fract3(Vec3::splat(c.x) + Vec3::new(k.x, k.y, k.z)) * 6.0 - Vec3::splat(k.w)).abs();
    let rgb = (p - Vec3::splat(k.x)).clamp(Vec3::ZERO, Vec3::ONE);
    c.z * Vec3::splat(k.x).lerp(rgb, c.y)
}

#[inline]
fn fract3(v: Vec3) -> Vec3 {
    v - v.floor()
}

/// Star intensity at `uv` relative to the star centre: inverse-distance glow
/// plus axis-aligned and diagonal ray streaks scaled by `flare`.
pub fn star_glow(uv: Vec2, flare: f32, glow: f32) -> f32 {
    let d = uv.length();
    let mut m = (STAR_GLOW_BASE * glow) / d;
    let rays = smooth_step(0.0, 1.0, 1.0 - (uv.x * uv.y * 1000.0).abs());
    m += rays * flare * glow;
    // row vector times the 45 degree matrix
    let r = Vec2::new(0.7071 * uv.x - 0.7071 * uv.y, 0.7071 * uv.x + 0.7071 * uv.y);
    let rays = smooth_step(0.0, 1.0, 1.0 - (r.x * r.y).abs());
    m += rays * DIAGONAL_RAY_WEIGHT * flare * glow;
    m * smooth_step(1.0, 0.2, d)
}

/// Colour of one lattice cell after hue shift and saturation.
pub fn cell_color(cell: Vec2, seed: f32, hue_shift: f32, saturation: f32) -> Vec3 {
    let red = smooth_step(STAR_COLOR_CUTOFF, 1.0, hash21(cell + 1.0)) + STAR_COLOR_CUTOFF;
    let blu = smooth_step(STAR_COLOR_CUTOFF, 1.0, hash21(cell + 3.0)) + STAR_COLOR_CUTOFF;
    let grn = red.min(blu) * seed;
    let base = Vec3::new(red, grn, blu);

    let hue = (base.y - base.x).atan2(base.z - base.x) / (2.0 * PI_APPROX) + 0.5;
    let hue = fract(hue + hue_shift / 360.0);
    let sat = (base - Vec3::splat(base.dot(LUMA))).length() * saturation;
    let val = base.x.max(base.y).max(base.z);
    hsv_to_rgb(Vec3::new(hue, sat, val))
}

/// Sum of the 3x3 neighbourhood of star cells around `uv`.
pub fn star_layer(uv: Vec2, u: &GalaxyUniforms) -> Vec3 {
    let mut col = Vec3::ZERO;
    let gv = fract2(uv) - 0.5;
    let id = uv.floor();

    for y in -1..=1 {
        for x in -1..=1 {
            let offset = Vec2::new(x as f32, y as f32);
            let si = id + offset;
            let seed = hash21(si);
            let size = fract(seed * 345.32);
            let gloss = tri(u.star_speed / (FLARE_PERIOD * seed + 1.0));
            let flare = smooth_step(FLARE_SIZE_THRESHOLD, 1.0, size) * gloss;

            let color = cell_color(si, seed, u.hue_shift, u.saturation);

            let pad = Vec2::new(
                tris(seed * 34.0 + u.time * u.speed / 10.0),
                tris(seed * 38.0 + u.time * u.speed / 30.0),
            ) - 0.5;

            let mut star = star_glow(gv - offset - pad, flare, u.glow_intensity);

            let twinkle = trisn(u.time * u.speed + seed * TAU_APPROX) * 0.5 + 1.0;
            star *= mix(1.0, twinkle, u.twinkle_intensity);

            col += star * size * color;
        }
    }
    col
}

/// Apply the selected distortion to a world-space point.
pub fn distort(uv: Vec2, u: &GalaxyUniforms) -> Vec2 {
    let res = Vec2::new(u.resolution[0], u.resolution[1]);
    let focal_px = Vec2::from_array(u.focal) * res;
    let mouse = Vec2::from_array(u.mouse);
    match DistortionMode::from_tag(u.distortion_mode) {
        DistortionMode::AutoCenter => {
            let dist = uv.length();
            let push =
                uv.normalize_or_zero() * (u.auto_center_repulsion / (dist + REPULSION_SOFTENING));
            uv + push * REPULSION_SCALE
        }
        DistortionMode::MousePointer => {
            let mouse_uv = (mouse * res - focal_px) / res.y;
            let dist = (uv - mouse_uv).length();
            let push = (uv - mouse_uv).normalize_or_zero()
                * (u.repulsion_strength / (dist + REPULSION_SOFTENING));
            uv + push * REPULSION_SCALE * u.mouse_active
        }
        DistortionMode::StaticOffset => uv + (mouse - 0.5) * STATIC_OFFSET_SCALE * u.mouse_active,
    }
}

/// Column-major `mat2(c, -s, s, c)`, as the shader builds it.
#[inline]
fn rotation_matrix(cos: f32, sin: f32) -> Mat2 {
    Mat2::from_cols(Vec2::new(cos, -sin), Vec2::new(sin, cos))
}

/// Depth of layer `i` (0, 0.25, 0.5, 0.75) for the current drift.
#[inline]
pub fn layer_depth(layer: f32, star_speed: f32, speed: f32) -> f32 {
    fract(layer + star_speed * speed)
}

/// Opacity weight of a layer: rises with depth, drops to zero just before
/// the layer recycles.
#[inline]
pub fn layer_fade(depth: f32) -> f32 {
    depth * smooth_step(1.0, LAYER_FADE_START, depth)
}

#[inline]
pub fn layer_scale(depth: f32, density: f32) -> f32 {
    mix(FAR_LAYER_SCALE * density, NEAR_LAYER_SCALE * density, depth)
}

/// Output alpha for an accumulated colour.
pub fn alpha_for(col: Vec3, transparent: bool) -> f32 {
    if transparent {
        smooth_step(0.0, ALPHA_SATURATION_LEVEL, col.length()).min(1.0)
    } else {
        1.0
    }
}

/// Colour of the pixel at texture coordinate `v_uv` (0..1, y up).
pub fn shade_pixel(v_uv: Vec2, u: &GalaxyUniforms) -> Vec4 {
    let res = Vec2::new(u.resolution[0], u.resolution[1]);
    let focal_px = Vec2::from_array(u.focal) * res;
    let mut uv = (v_uv * res - focal_px) / res.y;

    uv = distort(uv, u);

    let angle = u.time * u.rotation_speed;
    uv = rotation_matrix(angle.cos(), angle.sin()) * uv;
    uv = rotation_matrix(u.rotation[0], u.rotation[1]) * uv;

    let mut col = Vec3::ZERO;
    for n in 0..NUM_LAYERS {
        let i = n as f32 / NUM_LAYERS as f32;
        let depth = layer_depth(i, u.star_speed, u.speed);
        let scale = layer_scale(depth, u.density);
        let fade = layer_fade(depth);
        col += star_layer(uv * scale + i * LAYER_OFFSET, u) * fade;
    }

    col.extend(alpha_for(col, u.transparent != 0))
}

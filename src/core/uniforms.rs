use super::config::GalaxyConfig;
use super::interaction::InteractionState;
use crate::constants::STAR_SPEED_DIVISOR;

/// Which positional distortion the fragment stage applies. Exactly one is
/// active per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DistortionMode {
    /// Push away from the focal point by `auto_center_repulsion`.
    AutoCenter = 0,
    /// Push away from the smoothed pointer, faded by pointer activity.
    MousePointer = 1,
    /// Shift the plane by the pointer's offset from the centre.
    StaticOffset = 2,
}

impl DistortionMode {
    /// Auto-center repulsion wins over pointer repulsion when both are set.
    pub fn select(config: &GalaxyConfig) -> Self {
        if config.auto_center_repulsion > 0.0 {
            DistortionMode::AutoCenter
        } else if config.mouse_repulsion {
            DistortionMode::MousePointer
        } else {
            DistortionMode::StaticOffset
        }
    }

    #[inline]
    pub fn tag(self) -> u32 {
        self as u32
    }

    /// Inverse of `tag`; unknown tags fall back to the plain offset, which is
    /// also what the shader's default branch does.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            0 => DistortionMode::AutoCenter,
            1 => DistortionMode::MousePointer,
            _ => DistortionMode::StaticOffset,
        }
    }
}

/// Everything the fragment stage reads, laid out to match the WGSL
/// `Uniforms` struct (96 bytes, no implicit padding).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GalaxyUniforms {
    pub resolution: [f32; 4], // offset 0; w unused
    pub focal: [f32; 2],      // offset 16
    pub rotation: [f32; 2],   // offset 24
    pub mouse: [f32; 2],      // offset 32
    pub time: f32,            // offset 40
    pub star_speed: f32,      // offset 44
    pub density: f32,
    pub hue_shift: f32,
    pub speed: f32,
    pub glow_intensity: f32,
    pub saturation: f32,
    pub twinkle_intensity: f32,
    pub rotation_speed: f32,
    pub repulsion_strength: f32,
    pub mouse_active: f32,
    pub auto_center_repulsion: f32,
    pub distortion_mode: u32, // offset 88
    pub transparent: u32,     // offset 92
}

impl GalaxyUniforms {
    /// Static part of the block, taken from the configuration once.
    pub fn from_config(config: &GalaxyConfig, resolution: [f32; 3]) -> Self {
        Self {
            resolution: [resolution[0], resolution[1], resolution[2], 0.0],
            focal: config.focal,
            rotation: config.rotation,
            mouse: [0.5, 0.5],
            time: 0.0,
            star_speed: 0.0,
            density: config.density,
            hue_shift: config.hue_shift,
            speed: config.speed,
            glow_intensity: config.glow_intensity,
            saturation: config.saturation,
            twinkle_intensity: config.twinkle_intensity,
            rotation_speed: config.rotation_speed,
            repulsion_strength: config.repulsion_strength,
            mouse_active: 0.0,
            auto_center_repulsion: config.auto_center_repulsion,
            distortion_mode: DistortionMode::select(config).tag(),
            transparent: config.transparent as u32,
        }
    }

    pub fn set_resolution(&mut self, resolution: [f32; 3]) {
        self.resolution = [resolution[0], resolution[1], resolution[2], 0.0];
    }

    /// Per-frame values: clock, drift and the smoothed pointer.
    pub fn update_frame(&mut self, config: &GalaxyConfig, elapsed: f32, input: &InteractionState) {
        self.time = elapsed;
        self.star_speed = drift_for(elapsed, config.star_speed);
        self.mouse = input.smooth_pos.to_array();
        self.mouse_active = input.smooth_active;
        self.distortion_mode = DistortionMode::select(config).tag();
    }
}

/// Drift value uploaded as `star_speed`: grows linearly with elapsed time.
#[inline]
pub fn drift_for(elapsed: f32, star_speed: f32) -> f32 {
    elapsed * star_speed / STAR_SPEED_DIVISOR
}

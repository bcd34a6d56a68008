use serde::{Deserialize, Serialize};

/// Construction options for the starfield.
///
/// Decoded from a plain JS object with camelCase keys; any key left out keeps
/// its default. After `with_unset_defaults`, numeric zeros count as missing
/// too. Other values are taken as given: a negative density or an
/// out-of-range saturation is not rejected, it only produces a garbled image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalaxyConfig {
    /// Point of the surface (unit coordinates) the star plane is centred on.
    pub focal: [f32; 2],
    /// Base rotation as a unit vector `[cos, sin]`.
    pub rotation: [f32; 2],
    pub star_speed: f32,
    pub density: f32,
    /// Hue rotation in degrees.
    pub hue_shift: f32,
    /// Global animation speed multiplier.
    pub speed: f32,
    pub mouse_interaction: bool,
    pub glow_intensity: f32,
    pub saturation: f32,
    pub mouse_repulsion: bool,
    pub repulsion_strength: f32,
    /// 0 disables twinkling, 1 is full amplitude.
    pub twinkle_intensity: f32,
    /// Radians per second of ambient rotation.
    pub rotation_speed: f32,
    /// Values above zero push stars away from the focal point and override
    /// pointer repulsion.
    pub auto_center_repulsion: f32,
    pub transparent: bool,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            focal: [0.5, 0.5],
            rotation: [1.0, 0.0],
            star_speed: 0.5,
            density: 1.0,
            hue_shift: 140.0,
            speed: 1.0,
            mouse_interaction: true,
            glow_intensity: 0.3,
            saturation: 0.0,
            mouse_repulsion: true,
            repulsion_strength: 2.0,
            twinkle_intensity: 0.3,
            rotation_speed: 0.1,
            auto_center_repulsion: 0.0,
            transparent: true,
        }
    }
}

impl GalaxyConfig {
    /// Options used when the module mounts itself into the page.
    pub fn page_preset() -> Self {
        Self {
            density: 1.0,
            glow_intensity: 0.3,
            saturation: 0.0,
            hue_shift: 140.0,
            mouse_repulsion: true,
            mouse_interaction: true,
            repulsion_strength: 2.0,
            twinkle_intensity: 0.3,
            rotation_speed: 0.05,
            speed: 1.0,
            transparent: true,
            ..Self::default()
        }
    }

    /// Treat zero and NaN numeric options as unset, the way a page script's
    /// `options.x || default` would. Booleans and the two vectors are kept
    /// as given.
    pub fn with_unset_defaults(self) -> Self {
        let d = Self::default();
        let pick = |v: f32, fallback: f32| if v == 0.0 || v.is_nan() { fallback } else { v };
        Self {
            star_speed: pick(self.star_speed, d.star_speed),
            density: pick(self.density, d.density),
            hue_shift: pick(self.hue_shift, d.hue_shift),
            speed: pick(self.speed, d.speed),
            glow_intensity: pick(self.glow_intensity, d.glow_intensity),
            saturation: pick(self.saturation, d.saturation),
            repulsion_strength: pick(self.repulsion_strength, d.repulsion_strength),
            twinkle_intensity: pick(self.twinkle_intensity, d.twinkle_intensity),
            rotation_speed: pick(self.rotation_speed, d.rotation_speed),
            auto_center_repulsion: pick(self.auto_center_repulsion, d.auto_center_repulsion),
            ..self
        }
    }

    /// True when every scalar is finite. Only used for diagnostics; the
    /// renderer never refuses a config.
    pub fn is_finite(&self) -> bool {
        let scalars = [
            self.focal[0],
            self.focal[1],
            self.rotation[0],
            self.rotation[1],
            self.star_speed,
            self.density,
            self.hue_shift,
            self.speed,
            self.glow_intensity,
            self.saturation,
            self.repulsion_strength,
            self.twinkle_intensity,
            self.rotation_speed,
            self.auto_center_repulsion,
        ];
        scalars.iter().all(|v| v.is_finite())
    }
}

/// Starfield tuning constants.
///
/// Shared by the host-side reference shading model and the frame loop. The
/// WGSL module repeats the shading values literally; keep both in step.
// Per-frame blend factor for pointer position and activity smoothing
pub const POINTER_SMOOTHING: f32 = 0.05;

// Default (and reset) pointer position in unit surface coordinates
pub const POINTER_CENTER: [f32; 2] = [0.5, 0.5];

// The uploaded drift value is elapsed * starSpeed / STAR_SPEED_DIVISOR
pub const STAR_SPEED_DIVISOR: f32 = 10.0;

// Parallax layering
pub const NUM_LAYERS: usize = 4;
pub const FAR_LAYER_SCALE: f32 = 20.0; // multiplied by density
pub const NEAR_LAYER_SCALE: f32 = 0.5; // multiplied by density
pub const LAYER_OFFSET: f32 = 453.32; // decorrelates lattices between layers
pub const LAYER_FADE_START: f32 = 0.9;

// Star attributes
pub const STAR_COLOR_CUTOFF: f32 = 0.2;
pub const FLARE_PERIOD: f32 = 3.0;
pub const FLARE_SIZE_THRESHOLD: f32 = 0.9;
pub const STAR_GLOW_BASE: f32 = 0.05;
pub const DIAGONAL_RAY_WEIGHT: f32 = 0.3;

// Distortion
pub const REPULSION_SOFTENING: f32 = 0.1; // added to distance before dividing
pub const REPULSION_SCALE: f32 = 0.05;
pub const STATIC_OFFSET_SCALE: f32 = 0.1;

// Transparent output: |col| at which alpha saturates
pub const ALPHA_SATURATION_LEVEL: f32 = 0.3;

// Element id the module start hook mounts into
pub const MOUNT_ELEMENT_ID: &str = "galaxyBg";

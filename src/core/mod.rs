pub mod clock;
pub mod config;
pub mod interaction;
pub mod lifecycle;
pub mod shading;
pub mod surface;
pub mod uniforms;

pub use clock::FrameClock;
pub use config::GalaxyConfig;
pub use interaction::{client_to_unit, InteractionState};
pub use lifecycle::{FrameLoop, FrameScheduler, Phase};
pub use surface::{SurfaceSize, SurfaceVertex, SURFACE_GEOMETRY};
pub use uniforms::{DistortionMode, GalaxyUniforms};

// Shader bundled as a string constant
pub static GALAXY_WGSL: &str = include_str!("../../shaders/galaxy.wgsl");

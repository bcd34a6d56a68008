/// Backing-store size of the drawing surface in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// CSS box size times device pixel ratio. An unknown or non-positive
    /// ratio counts as 1, and each side is at least one pixel so the GPU
    /// surface can always be configured.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let px = |css: f64| {
            let v = css * dpr;
            if v.is_finite() && v >= 1.0 {
                v as u32
            } else {
                1
            }
        };
        Self {
            width: px(css_width),
            height: px(css_height),
        }
    }

    /// Limit each side to `max_dimension` device pixels (the GPU's largest
    /// 2D texture), keeping at least one pixel.
    pub fn clamped(self, max_dimension: u32) -> Self {
        let max = max_dimension.max(1);
        Self {
            width: self.width.clamp(1, max),
            height: self.height.clamp(1, max),
        }
    }

    /// Size the surface should be reconfigured to when `requested` arrives,
    /// or `None` when the clamped request matches the current size.
    pub fn resize_to(self, requested: SurfaceSize, max_dimension: u32) -> Option<SurfaceSize> {
        let next = requested.clamped(max_dimension);
        (next != self).then_some(next)
    }

    /// `[width, height, width / height]` as read by the fragment stage.
    pub fn resolution(&self) -> [f32; 3] {
        let w = self.width as f32;
        let h = self.height as f32;
        [w, h, w / h]
    }
}

/// One vertex of the screen-covering geometry.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// A single oversized triangle whose clipped area is the whole viewport.
/// Texture coordinates run 0..1 across the visible part.
pub const SURFACE_GEOMETRY: [SurfaceVertex; 3] = [
    SurfaceVertex {
        position: [-1.0, -1.0],
        uv: [0.0, 0.0],
    },
    SurfaceVertex {
        position: [3.0, -1.0],
        uv: [2.0, 0.0],
    },
    SurfaceVertex {
        position: [-1.0, 3.0],
        uv: [0.0, 2.0],
    },
];

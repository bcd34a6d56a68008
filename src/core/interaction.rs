use crate::constants::{POINTER_CENTER, POINTER_SMOOTHING};
use glam::Vec2;

/// Pointer targets written by event handlers and their low-passed copies read
/// by the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionState {
    pub target_pos: Vec2,
    pub smooth_pos: Vec2,
    pub target_active: f32,
    pub smooth_active: f32,
}

impl Default for InteractionState {
    fn default() -> Self {
        let center = Vec2::from_array(POINTER_CENTER);
        Self {
            target_pos: center,
            smooth_pos: center,
            target_active: 0.0,
            smooth_active: 0.0,
        }
    }
}

impl InteractionState {
    /// Pointer moved over the surface; `uv` is in unit coordinates, y up.
    pub fn pointer_moved(&mut self, uv: Vec2) {
        self.target_pos = uv;
        self.target_active = 1.0;
    }

    /// Pointer left the surface. The position target is kept so the
    /// distortion fades out in place.
    pub fn pointer_left(&mut self) {
        self.target_active = 0.0;
    }

    /// One frame of exponential smoothing toward the targets.
    ///
    /// The blend is per call, so the effective time constant follows the
    /// display refresh rate.
    #[inline]
    pub fn step(&mut self) {
        self.smooth_pos += (self.target_pos - self.smooth_pos) * POINTER_SMOOTHING;
        self.smooth_active += (self.target_active - self.smooth_active) * POINTER_SMOOTHING;
    }
}

/// Map a client-space pointer position into container unit coordinates with
/// y flipped (0 at the bottom edge).
///
/// Points outside the container map outside `[0, 1]`; they are not clamped.
/// Returns `None` for a degenerate container rect.
#[inline]
pub fn client_to_unit(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if !(rect_size.x > 0.0 && rect_size.y > 0.0) {
        return None;
    }
    let local = (client - rect_origin) / rect_size;
    Some(Vec2::new(local.x, 1.0 - local.y))
}

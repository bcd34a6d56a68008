use std::time::Duration;

/// Elapsed animation time in seconds.
///
/// Only running time is counted: `pause` forgets the last tick so the next
/// one after a restart contributes nothing, and the clock resumes where it
/// stopped. Negative deltas cannot occur since `Duration` is unsigned.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    elapsed: f64,
    running: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by the wall-clock delta since the previous tick. The first
    /// tick after construction or `pause` only re-arms the clock, so the
    /// first frame renders at the current elapsed value.
    pub fn tick(&mut self, since_last: Duration) -> f32 {
        if self.running {
            self.elapsed += since_last.as_secs_f64();
        } else {
            self.running = true;
        }
        self.elapsed_secs()
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed as f32
    }
}

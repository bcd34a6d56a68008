/// Something that can arrange for a frame callback and cancel it again.
///
/// On the web this is `requestAnimationFrame`; tests use a counter.
pub trait FrameScheduler {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Request one callback. `None` means the host refused.
    fn schedule(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Where the renderer is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// GPU acquisition still in flight.
    Pending,
    Ready,
    /// Setup failed; every call is a no-op from here on.
    Failed,
    Destroyed,
}

/// Single owner of the pending frame handle.
#[derive(Debug)]
pub struct FrameLoop<H> {
    phase: Phase,
    handle: Option<H>,
    wants_running: bool,
}

impl<H: Copy + PartialEq + std::fmt::Debug> Default for FrameLoop<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + PartialEq + std::fmt::Debug> FrameLoop<H> {
    pub fn new() -> Self {
        Self {
            phase: Phase::Pending,
            handle: None,
            wants_running: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Failed | Phase::Destroyed)
    }

    /// Schedule a callback unless one is already pending. Before the
    /// renderer is ready the request is remembered instead.
    pub fn start<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if self.is_terminal() {
            return;
        }
        self.wants_running = true;
        if self.phase == Phase::Ready && self.handle.is_none() {
            self.handle = scheduler.schedule();
        }
    }

    /// Cancel the pending callback, if any. Returns whether one was pending.
    pub fn stop<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> bool {
        self.wants_running = false;
        match self.handle.take() {
            Some(h) => {
                scheduler.cancel(h);
                true
            }
            None => false,
        }
    }

    /// The pending callback fired. Reschedules first, then reports whether
    /// a frame should be drawn.
    pub fn on_frame<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) -> bool {
        self.handle = None;
        if self.phase != Phase::Ready || !self.wants_running {
            return false;
        }
        self.handle = scheduler.schedule();
        true
    }

    /// GPU setup finished; honour a `start` that arrived while pending.
    pub fn mark_ready<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        if self.phase != Phase::Pending {
            return;
        }
        self.phase = Phase::Ready;
        if self.wants_running {
            self.handle = scheduler.schedule();
        }
    }

    pub fn mark_failed(&mut self) {
        if self.phase == Phase::Pending {
            self.phase = Phase::Failed;
            self.wants_running = false;
        }
    }

    /// Cancel and enter the terminal phase.
    pub fn destroy<S: FrameScheduler<Handle = H>>(&mut self, scheduler: &mut S) {
        self.stop(scheduler);
        self.phase = Phase::Destroyed;
    }
}

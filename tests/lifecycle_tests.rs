// Host-side tests for the frame loop state machine and the animation clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/core/lifecycle.rs");
}
mod clock {
    include!("../src/core/clock.rs");
}

use clock::FrameClock;
use lifecycle::*;
use std::time::Duration;

/// Counts requests instead of talking to a browser.
#[derive(Default)]
struct FakeScheduler {
    next: u32,
    live: Vec<u32>,
    cancelled: Vec<u32>,
    refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn schedule(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.live.push(self.next);
        Some(self.next)
    }

    fn cancel(&mut self, handle: u32) {
        self.live.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

impl FakeScheduler {
    /// Fire the oldest pending callback.
    fn fire(&mut self, fl: &mut FrameLoop<u32>) -> bool {
        if self.live.is_empty() {
            return false;
        }
        self.live.remove(0);
        fl.on_frame(self)
    }
}

fn ready_loop(s: &mut FakeScheduler) -> FrameLoop<u32> {
    let mut fl = FrameLoop::new();
    fl.mark_ready(s);
    fl
}

#[test]
fn start_while_pending_is_deferred() {
    let mut s = FakeScheduler::default();
    let mut fl = FrameLoop::new();
    fl.start(&mut s);
    assert_eq!(s.next, 0);
    assert!(!fl.is_scheduled());

    fl.mark_ready(&mut s);
    assert_eq!(fl.phase(), Phase::Ready);
    assert_eq!(s.live.len(), 1);
}

#[test]
fn stop_while_pending_wins_over_earlier_start() {
    let mut s = FakeScheduler::default();
    let mut fl = FrameLoop::new();
    fl.start(&mut s);
    fl.stop(&mut s);
    fl.mark_ready(&mut s);
    assert!(!fl.is_scheduled());
    assert_eq!(s.next, 0);
}

#[test]
fn start_is_idempotent() {
    let mut s = FakeScheduler::default();
    let mut fl = ready_loop(&mut s);
    fl.start(&mut s);
    fl.start(&mut s);
    fl.start(&mut s);
    assert_eq!(s.live.len(), 1);
}

#[test]
fn frames_keep_rescheduling_while_running() {
    let mut s = FakeScheduler::default();
    let mut fl = ready_loop(&mut s);
    fl.start(&mut s);
    for _ in 0..10 {
        assert!(s.fire(&mut fl));
        assert_eq!(s.live.len(), 1);
    }
    assert_eq!(s.next, 11);
}

#[test]
fn stop_cancels_and_is_idempotent() {
    let mut s = FakeScheduler::default();
    let mut fl = ready_loop(&mut s);
    fl.start(&mut s);
    assert!(fl.stop(&mut s));
    assert!(!fl.stop(&mut s));
    assert!(s.live.is_empty());
    assert_eq!(s.cancelled, vec![1]);
}

#[test]
fn stale_callback_after_stop_draws_nothing() {
    let mut s = FakeScheduler::default();
    let mut fl = ready_loop(&mut s);
    fl.start(&mut s);
    fl.stop(&mut s);
    assert!(!fl.on_frame(&mut s));
    assert!(!fl.is_scheduled());
}

#[test]
fn stop_then_start_resumes() {
    let mut s = FakeScheduler::default();
    let mut fl = ready_loop(&mut s);
    fl.start(&mut s);
    fl.stop(&mut s);
    fl.start(&mut s);
    assert!(fl.is_scheduled());
    assert!(s.fire(&mut fl));
}

#[test]
fn destroy_is_terminal() {
    let mut s = FakeScheduler::default();
    let mut fl = ready_loop(&mut s);
    fl.start(&mut s);
    fl.destroy(&mut s);
    assert_eq!(fl.phase(), Phase::Destroyed);
    assert!(s.live.is_empty());

    let scheduled = s.next;
    fl.start(&mut s);
    assert_eq!(s.next, scheduled);
    assert!(!fl.on_frame(&mut s));
    fl.mark_ready(&mut s);
    assert_eq!(fl.phase(), Phase::Destroyed);

    fl.destroy(&mut s);
    assert_eq!(fl.phase(), Phase::Destroyed);
}

#[test]
fn failed_setup_ignores_every_call() {
    let mut s = FakeScheduler::default();
    let mut fl = FrameLoop::new();
    fl.start(&mut s);
    fl.mark_failed();
    assert_eq!(fl.phase(), Phase::Failed);
    assert!(fl.is_terminal());

    fl.mark_ready(&mut s);
    fl.start(&mut s);
    assert_eq!(fl.phase(), Phase::Failed);
    assert_eq!(s.next, 0);
}

#[test]
fn refused_request_leaves_loop_idle_but_restartable() {
    let mut s = FakeScheduler {
        refuse: true,
        ..FakeScheduler::default()
    };
    let mut fl = ready_loop(&mut s);
    fl.start(&mut s);
    assert!(!fl.is_scheduled());

    s.refuse = false;
    fl.start(&mut s);
    assert!(fl.is_scheduled());
}

#[test]
fn first_tick_only_arms_clock() {
    let mut c = FrameClock::new();
    assert_eq!(c.tick(Duration::from_secs(5)), 0.0);
    assert_eq!(c.tick(Duration::from_millis(500)), 0.5);
}

#[test]
fn clock_is_monotonic_and_skips_paused_time() {
    let mut c = FrameClock::new();
    c.tick(Duration::ZERO);
    let mut last = 0.0;
    for _ in 0..10 {
        let t = c.tick(Duration::from_millis(16));
        assert!(t >= last);
        last = t;
    }

    c.pause();
    // A long gap while stopped
    let resumed = c.tick(Duration::from_secs(60));
    assert_eq!(resumed, last);
    assert!(c.tick(Duration::from_millis(16)) > resumed);
}

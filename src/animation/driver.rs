// src/animation/driver.rs
//
// Runs the fixed-interval frame loop while a node is cycling.

use log::debug;
use std::time::{Duration, Instant};

use super::ticker::FrameTicker;

/// Returned by a frame callback to keep the loop running or end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

#[derive(Debug)]
pub struct AnimationDriver {
    animating: bool,
    ticker: FrameTicker,
}

impl AnimationDriver {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            animating: false,
            ticker: FrameTicker::new(frame_interval),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// True while a frame is scheduled, including the one that follows
    /// `stop` so the settled state gets painted.
    pub fn has_pending_frame(&self) -> bool {
        self.ticker.due().is_some()
    }

    pub fn ticker(&self) -> &FrameTicker {
        &self.ticker
    }

    /// Starts the loop and requests an immediate frame. No-op when
    /// already animating.
    pub fn start(&mut self, now: Instant) {
        if !self.animating {
            debug!("Animation started");
            self.animating = true;
            self.ticker.schedule_now(now);
        }
    }

    pub fn stop(&mut self) {
        if self.animating {
            debug!("Animation stopped");
            self.animating = false;
        }
    }

    /// Called on every repaint. Runs `on_frame` when animating and the
    /// next frame is due, then schedules the following frame.
    ///
    /// The following frame is scheduled even if `on_frame` stopped the
    /// loop. Once due it runs nothing and is cleared, leaving the driver
    /// with no pending frame.
    pub fn tick<F>(&mut self, now: Instant, on_frame: F)
    where
        F: FnOnce() -> FrameControl,
    {
        if !self.ticker.is_due(now) {
            return;
        }
        if !self.animating {
            self.ticker.cancel();
            return;
        }

        if on_frame() == FrameControl::Stop {
            self.stop();
        }

        if let Err(err) = self.ticker.schedule_next(now) {
            // the displayed frame stays stale until the next successful schedule
            debug!("Frame scheduling failed: {}", err);
        }
    }
}

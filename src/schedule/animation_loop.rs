use crate::schedule::motion::MotionPreference;
use crate::schedule::scheduler::{FrameRequest, Scheduler, Wake};

/// Owned handle on a continuous animation-frame loop.
///
/// Holds at most one pending [`FrameRequest`]. [`AnimationLoop::stop`] (or dropping the loop)
/// cancels it, and a stopped loop never schedules again until restarted. The motion preference is
/// read when the loop starts, not on every frame.
#[derive(Debug)]
pub struct AnimationLoop {
    scheduler: Scheduler,
    motion: MotionPreference,
    pending: Option<FrameRequest>,
    running: bool,
    frames_run: u64,
}

impl AnimationLoop {
    /// Idle loop bound to `scheduler`.
    pub fn new(scheduler: Scheduler, motion: MotionPreference) -> Self {
        Self {
            scheduler,
            motion,
            pending: None,
            running: false,
            frames_run: 0,
        }
    }

    /// Start the loop by requesting the first frame.
    ///
    /// Returns `false`, scheduling nothing, when reduced motion is active.
    pub fn start(&mut self) -> bool {
        if self.motion.is_reduced() {
            self.stop();
            return false;
        }
        if !self.running {
            self.running = true;
            self.pending = Some(self.scheduler.request_frame());
        }
        true
    }

    /// Claim `wake` if it serves this loop's pending frame, returning the frame timestamp.
    pub fn accept(&mut self, wake: &Wake) -> Option<f64> {
        if !self.pending.as_ref().is_some_and(|r| r.matches(wake)) {
            return None;
        }
        self.pending = None;
        self.frames_run += 1;
        Some(wake.time_ms())
    }

    /// Request the next frame. No-op once stopped or while a request is already pending.
    pub fn schedule_next(&mut self) {
        if self.running && self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    /// Cancel any pending frame and stop scheduling.
    pub fn stop(&mut self) {
        self.running = false;
        self.pending = None;
    }

    /// `true` between a successful `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// `true` while a frame request is outstanding.
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of frames this loop has accepted.
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Motion preference this loop was built with.
    pub fn motion(&self) -> &MotionPreference {
        &self.motion
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/animation_loop.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::schedule::scheduler::{FrameRequest, Scheduler, Wake};
use crate::scroll::document::Document;

/// Targets closer than this are treated as already reached.
pub const ALREADY_THERE_PX: f64 = 5.0;
/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 300.0;
/// Duration the scroll-to-top button asks for.
pub const SCROLL_TO_TOP_BUTTON_MS: f64 = 800.0;

/// Parameters of one smooth scroll.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollOptions {
    pub duration_ms: f64,
    /// Space left above the target element, e.g. for a fixed header.
    pub offset: f64,
    pub ease: Ease,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            offset: 80.0,
            ease: Ease::OutCubic,
        }
    }
}

impl ScrollOptions {
    /// Defaults for returning to the top of the page.
    pub fn to_top() -> Self {
        Self {
            duration_ms: 600.0,
            offset: 0.0,
            ease: Ease::InOutQuart,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// One in-flight scroll: eases from `from` to `to` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollJob {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl ScrollJob {
    /// Linear progress in `[0, 1]` at `now_ms`. Non-positive durations are complete at once.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms.is_nan() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Scroll position at `now_ms`, and whether the job is finished.
    pub fn sample(&self, now_ms: f64) -> (f64, bool) {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return (self.to, true);
        }
        (self.from + (self.to - self.from) * self.ease.apply(p), false)
    }
}

/// Result of a scroll request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollOutcome {
    /// A job was started; frames will move the document.
    Started { from: f64, to: f64 },
    /// Within [`ALREADY_THERE_PX`] of the target; nothing scheduled.
    AlreadyThere,
    /// No element with the requested id.
    MissingTarget,
}

/// Drives a [`Document`]'s scroll offset with eased, frame-sampled animation.
///
/// At most one job runs at a time; a new request replaces the current one.
#[derive(Debug)]
pub struct SmoothScroller {
    scheduler: Scheduler,
    job: Option<ScrollJob>,
    frame: Option<FrameRequest>,
}

impl SmoothScroller {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler,
            job: None,
            frame: None,
        }
    }

    /// Scroll so the element `id` sits `opts.offset` px below the viewport top.
    pub fn scroll_to_element(
        &mut self,
        doc: &dyn Document,
        id: &str,
        opts: ScrollOptions,
    ) -> ScrollOutcome {
        let Some(top) = doc.element_top(id) else {
            tracing::warn!(element = id, "scroll target not found");
            return ScrollOutcome::MissingTarget;
        };
        self.scroll_to(doc, (top - opts.offset).max(0.0), opts)
    }

    /// Scroll back to offset 0.
    pub fn scroll_to_top(&mut self, doc: &dyn Document, opts: ScrollOptions) -> ScrollOutcome {
        self.scroll_to(doc, 0.0, opts)
    }

    /// Scroll to an absolute offset.
    pub fn scroll_to(
        &mut self,
        doc: &dyn Document,
        target: f64,
        opts: ScrollOptions,
    ) -> ScrollOutcome {
        let from = doc.scroll_offset();
        if (target - from).abs() < ALREADY_THERE_PX {
            return ScrollOutcome::AlreadyThere;
        }
        self.job = Some(ScrollJob {
            from,
            to: target,
            start_ms: self.scheduler.now_ms(),
            duration_ms: opts.duration_ms,
            ease: opts.ease,
        });
        if self.frame.is_none() {
            self.frame = Some(self.scheduler.request_frame());
        }
        tracing::debug!(
            from,
            to = target,
            duration_ms = opts.duration_ms,
            "scroll started"
        );
        ScrollOutcome::Started { from, to: target }
    }

    /// Advance the running job if `wake` is this scroller's frame. Returns `true` if handled.
    pub fn on_wake(&mut self, wake: &Wake, doc: &mut dyn Document) -> bool {
        if !self.frame.as_ref().is_some_and(|f| f.matches(wake)) {
            return false;
        }
        self.frame = None;
        let Some(job) = self.job else {
            return true;
        };
        let (y, done) = job.sample(wake.time_ms());
        doc.set_scroll_offset(y);
        if done {
            self.job = None;
        } else {
            self.frame = Some(self.scheduler.request_frame());
        }
        true
    }

    /// Drop the running job, leaving the document where it is.
    pub fn cancel(&mut self) {
        self.job = None;
        self.frame = None;
    }

    pub fn is_animating(&self) -> bool {
        self.job.is_some()
    }

    pub fn job(&self) -> Option<&ScrollJob> {
        self.job.as_ref()
    }
}

/// Whether the scroll-to-top button should be visible at `scroll_offset`.
pub fn scroll_to_top_visible(scroll_offset: f64) -> bool {
    scroll_offset > SCROLL_TO_TOP_THRESHOLD_PX
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;

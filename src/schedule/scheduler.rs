use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

/// Smallest accepted interval period, in milliseconds.
pub const MIN_INTERVAL_MS: f64 = 1.0;

/// Identifier of a pending frame request or timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

/// A unit of due work delivered by [`Scheduler::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wake {
    /// A one-shot animation-frame callback, stamped with the frame time.
    Frame {
        /// Request that is being served.
        id: TaskId,
        /// Clock value sampled for this frame.
        timestamp_ms: f64,
    },
    /// A timeout or interval tick.
    Timer {
        /// Timer that fired.
        id: TaskId,
        /// Clock value at the moment the timer came due.
        now_ms: f64,
    },
}

impl Wake {
    /// Task this wake belongs to.
    pub fn id(&self) -> TaskId {
        match *self {
            Self::Frame { id, .. } | Self::Timer { id, .. } => id,
        }
    }

    /// Clock value carried by this wake.
    pub fn time_ms(&self) -> f64 {
        match *self {
            Self::Frame { timestamp_ms, .. } => timestamp_ms,
            Self::Timer { now_ms, .. } => now_ms,
        }
    }
}

#[derive(Debug)]
struct TimerEntry {
    due_ms: f64,
    period_ms: Option<f64>,
}

#[derive(Debug, Default)]
struct SchedulerState {
    now_ms: f64,
    next_id: u64,
    frames: BTreeSet<TaskId>,
    // Frames taken for the batch currently being dispatched.
    firing: BTreeSet<TaskId>,
    timers: BTreeMap<TaskId, TimerEntry>,
}

impl SchedulerState {
    fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    fn next_due_timer(&mut self, target_ms: f64) -> Option<Wake> {
        let (id, due_ms) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= target_ms)
            .min_by(|a, b| a.1.due_ms.total_cmp(&b.1.due_ms).then(a.0.cmp(b.0)))
            .map(|(id, t)| (*id, t.due_ms))?;

        self.now_ms = self.now_ms.max(due_ms);
        let rearm = self.timers.get(&id).and_then(|t| t.period_ms);
        match rearm {
            Some(period) => {
                if let Some(t) = self.timers.get_mut(&id) {
                    t.due_ms = due_ms + period;
                }
            }
            None => {
                self.timers.remove(&id);
            }
        }
        Some(Wake::Timer { id, now_ms: due_ms })
    }
}

/// Single-threaded virtual platform clock standing in for the browser's animation-frame and timer
/// queues.
///
/// Cloning yields another handle to the same clock. Work is delivered by [`Scheduler::advance`],
/// one callback at a time: due timers first in `(due, id)` order, then a single frame batch
/// containing every frame requested before the batch started. Frames requested while a batch is
/// being dispatched land in the next batch.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl Scheduler {
    /// Fresh clock at `t = 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.state.borrow().now_ms
    }

    /// Request a one-shot callback at the next frame batch.
    pub fn request_frame(&self) -> FrameRequest {
        let id = {
            let mut st = self.state.borrow_mut();
            let id = st.alloc_id();
            st.frames.insert(id);
            id
        };
        FrameRequest {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Fire once after `delay_ms`. Negative or NaN delays count as zero.
    pub fn set_timeout(&self, delay_ms: f64) -> TimerHandle {
        self.insert_timer(sanitize_ms(delay_ms), None)
    }

    /// Fire every `period_ms`, first after one period. Periods are clamped to
    /// [`MIN_INTERVAL_MS`].
    pub fn set_interval(&self, period_ms: f64) -> TimerHandle {
        let period = sanitize_ms(period_ms).max(MIN_INTERVAL_MS);
        self.insert_timer(period, Some(period))
    }

    fn insert_timer(&self, delay_ms: f64, period_ms: Option<f64>) -> TimerHandle {
        let id = {
            let mut st = self.state.borrow_mut();
            let id = st.alloc_id();
            let due_ms = st.now_ms + delay_ms;
            st.timers.insert(id, TimerEntry { due_ms, period_ms });
            id
        };
        TimerHandle {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Number of frame requests waiting for the next batch.
    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Number of armed timeouts and intervals.
    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Move the clock forward by `dt_ms` and deliver due work to `on_wake`.
    ///
    /// The clock reads the due time while a timer callback runs, so work scheduled from inside a
    /// callback is relative to that instant and may still fire within this call.
    pub fn advance(&self, dt_ms: f64, mut on_wake: impl FnMut(Wake)) {
        let target_ms = self.now_ms() + sanitize_ms(dt_ms);

        loop {
            let next = self.state.borrow_mut().next_due_timer(target_ms);
            match next {
                Some(wake) => on_wake(wake),
                None => break,
            }
        }

        let batch = {
            let mut st = self.state.borrow_mut();
            st.now_ms = target_ms;
            let batch = std::mem::take(&mut st.frames);
            st.firing = batch.clone();
            batch
        };
        for id in batch {
            // Skip requests cancelled by an earlier callback in this batch.
            let live = self.state.borrow_mut().firing.remove(&id);
            if live {
                on_wake(Wake::Frame {
                    id,
                    timestamp_ms: target_ms,
                });
            }
        }
    }
}

fn sanitize_ms(ms: f64) -> f64 {
    if ms.is_finite() { ms.max(0.0) } else { 0.0 }
}

/// Pending animation-frame request. Dropping it cancels the request.
#[derive(Debug)]
pub struct FrameRequest {
    id: TaskId,
    state: Weak<RefCell<SchedulerState>>,
}

impl FrameRequest {
    /// Identifier carried by the matching [`Wake::Frame`].
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Return `true` when `wake` serves this request.
    pub fn matches(&self, wake: &Wake) -> bool {
        matches!(wake, Wake::Frame { id, .. } if *id == self.id)
    }
}

impl Drop for FrameRequest {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let mut st = state.borrow_mut();
            st.frames.remove(&self.id);
            st.firing.remove(&self.id);
        }
    }
}

/// Armed timeout or interval. Dropping it clears the timer.
#[derive(Debug)]
pub struct TimerHandle {
    id: TaskId,
    state: Weak<RefCell<SchedulerState>>,
}

impl TimerHandle {
    /// Identifier carried by the matching [`Wake::Timer`].
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Return `true` when `wake` is a tick of this timer.
    pub fn matches(&self, wake: &Wake) -> bool {
        matches!(wake, Wake::Timer { id, .. } if *id == self.id)
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().timers.remove(&self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;

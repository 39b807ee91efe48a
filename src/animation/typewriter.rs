use crate::schedule::motion::MotionPreference;
use crate::schedule::scheduler::{Scheduler, TimerHandle, Wake};

/// Notifications emitted by [`Typewriter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// The full text is visible. Emitted once per `reveal`.
    Completed,
}

/// Reveals a string one character at a time on a fixed interval.
///
/// Timers are owned handles: restarting with new text or dropping the typewriter clears them.
#[derive(Debug)]
pub struct Typewriter {
    scheduler: Scheduler,
    motion: MotionPreference,

    text: String,
    total_chars: usize,
    revealed_chars: usize,
    revealed_bytes: usize,
    speed_ms: f64,

    started: bool,
    complete: bool,
    start_timer: Option<TimerHandle>,
    tick_timer: Option<TimerHandle>,
}

impl Typewriter {
    /// Idle typewriter showing nothing.
    pub fn new(scheduler: Scheduler, motion: MotionPreference) -> Self {
        Self {
            scheduler,
            motion,
            text: String::new(),
            total_chars: 0,
            revealed_chars: 0,
            revealed_bytes: 0,
            speed_ms: 0.0,
            started: false,
            complete: false,
            start_timer: None,
            tick_timer: None,
        }
    }

    /// Start revealing `text`: wait `start_delay_ms`, then one character every `speed_ms`.
    ///
    /// Resets any reveal in progress. Under reduced motion the whole text is shown immediately
    /// and `Completed` is returned here instead of from [`Typewriter::on_wake`].
    pub fn reveal(
        &mut self,
        text: impl Into<String>,
        speed_ms: f64,
        start_delay_ms: f64,
    ) -> Option<TypewriterEvent> {
        self.cancel();
        self.text = text.into();
        self.total_chars = self.text.chars().count();
        self.revealed_chars = 0;
        self.revealed_bytes = 0;
        self.speed_ms = speed_ms;
        self.started = false;
        self.complete = false;

        if self.motion.is_reduced() {
            self.started = true;
            self.revealed_chars = self.total_chars;
            self.revealed_bytes = self.text.len();
            return self.finish();
        }

        self.start_timer = Some(self.scheduler.set_timeout(start_delay_ms));
        None
    }

    /// Handle a scheduler wake. Wakes owned by other components are ignored.
    pub fn on_wake(&mut self, wake: &Wake) -> Option<TypewriterEvent> {
        if self.start_timer.as_ref().is_some_and(|t| t.matches(wake)) {
            self.start_timer = None;
            self.started = true;
            if self.total_chars == 0 {
                return self.finish();
            }
            self.tick_timer = Some(self.scheduler.set_interval(self.speed_ms));
            return None;
        }

        if self.tick_timer.as_ref().is_some_and(|t| t.matches(wake)) {
            if let Some(c) = self.text[self.revealed_bytes..].chars().next() {
                self.revealed_bytes += c.len_utf8();
                self.revealed_chars += 1;
            }
            if self.revealed_chars >= self.total_chars {
                return self.finish();
            }
        }
        None
    }

    fn finish(&mut self) -> Option<TypewriterEvent> {
        self.tick_timer = None;
        if self.complete {
            return None;
        }
        self.complete = true;
        Some(TypewriterEvent::Completed)
    }

    /// Clear pending timers, freezing the current text.
    pub fn cancel(&mut self) {
        self.start_timer = None;
        self.tick_timer = None;
    }

    /// Currently visible prefix.
    pub fn displayed(&self) -> &str {
        &self.text[..self.revealed_bytes]
    }

    /// Full text being revealed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// `true` once the start delay has elapsed.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// `true` once every character is visible.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/typewriter.rs"]
mod tests;

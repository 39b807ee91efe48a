use crate::foundation::core::Point;

/// Default pointer sampling window (~60 Hz).
pub const POINTER_THROTTLE_MS: f64 = 16.0;

/// Leading-edge throttle: admits the first event, then blocks for `limit_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit_ms: f64,
    open_at_ms: f64,
}

impl Throttle {
    /// Throttle with a `limit_ms` quiet window.
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms: limit_ms.max(0.0),
            open_at_ms: f64::NEG_INFINITY,
        }
    }

    /// Return `true` if an event at `now_ms` passes.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if now_ms < self.open_at_ms {
            return false;
        }
        self.open_at_ms = now_ms + self.limit_ms;
        true
    }
}

/// Last known pointer position, fed by throttled move events.
///
/// Starts at the origin, which is also what the particle engine sees before the first move.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    position: Point,
    throttle: Throttle,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(POINTER_THROTTLE_MS)
    }
}

impl PointerTracker {
    /// Tracker admitting at most one update per `limit_ms`.
    pub fn new(limit_ms: f64) -> Self {
        Self {
            position: Point::ORIGIN,
            throttle: Throttle::new(limit_ms),
        }
    }

    /// Feed a pointer-move event. Returns `true` if the position was updated.
    pub fn on_move(&mut self, now_ms: f64, p: Point) -> bool {
        if !self.throttle.admit(now_ms) {
            return false;
        }
        self.position = p;
        true
    }

    /// Current pointer position.
    pub fn position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/throttle.rs"]
mod tests;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MotionState {
    reduced: Cell<bool>,
    generation: Cell<u64>,
}

/// Platform side of the reduced-motion accessibility signal.
///
/// The host owns the source and flips it when the platform setting changes; components only ever
/// receive read-only [`MotionPreference`] handles.
#[derive(Debug, Default)]
pub struct MotionSource {
    state: Rc<MotionState>,
}

impl MotionSource {
    /// Source with an initial preference.
    pub fn new(reduced: bool) -> Self {
        let state = MotionState::default();
        state.reduced.set(reduced);
        Self {
            state: Rc::new(state),
        }
    }

    /// Update the preference. Bumps the generation only when the value changes.
    pub fn set_reduced(&self, reduced: bool) {
        if self.state.reduced.get() == reduced {
            return;
        }
        self.state.reduced.set(reduced);
        self.state.generation.set(self.state.generation.get() + 1);
        tracing::debug!(reduced, "motion preference changed");
    }

    /// Read-only capability to hand to components.
    pub fn preference(&self) -> MotionPreference {
        MotionPreference {
            state: Rc::clone(&self.state),
        }
    }
}

/// Read-only view of the reduced-motion preference.
#[derive(Clone, Debug)]
pub struct MotionPreference {
    state: Rc<MotionState>,
}

impl MotionPreference {
    /// A preference that never changes.
    pub fn fixed(reduced: bool) -> Self {
        MotionSource::new(reduced).preference()
    }

    /// `true` when the user asked the platform to minimize animation.
    pub fn is_reduced(&self) -> bool {
        self.state.reduced.get()
    }

    /// Change counter; increases each time the preference flips.
    pub fn generation(&self) -> u64 {
        self.state.generation.get()
    }

    /// Return `true` if the preference changed after `generation` was observed.
    pub fn changed_since(&self, generation: u64) -> bool {
        self.generation() != generation
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/motion.rs"]
mod tests;

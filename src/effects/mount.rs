use crate::foundation::core::{Canvas, Point};
use crate::foundation::math::{RandomSource, Rng64};
use crate::render::surface::DrawSurface;
use crate::schedule::animation_loop::AnimationLoop;
use crate::schedule::motion::MotionPreference;
use crate::schedule::scheduler::{Scheduler, Wake};

/// Per-frame inputs handed to a [`FrameRenderer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Frame timestamp from the scheduler, in ms.
    pub timestamp_ms: f64,
    /// Latest pointer position in canvas space.
    pub pointer: Point,
}

/// A procedural effect drawn once per animation frame.
///
/// Renderers own their simulation state. Randomness always arrives through the `rng` argument.
pub trait FrameRenderer {
    /// Short stable name, used in logs.
    fn name(&self) -> &'static str;

    /// (Re)build all state derived from the canvas. Runs on mount and on every resize.
    fn setup(&mut self, canvas: Canvas, rng: &mut dyn RandomSource);

    /// Draw one frame and advance the simulation.
    fn draw_frame(
        &mut self,
        surface: &mut dyn DrawSurface,
        input: &FrameInput,
        rng: &mut dyn RandomSource,
    );

    /// Still image shown instead of the animation when motion is reduced.
    fn draw_static(&mut self, _surface: &mut dyn DrawSurface) {}

    /// Image shown by a still effect under full motion. Defaults to [`Self::draw_static`].
    fn draw_idle(&mut self, surface: &mut dyn DrawSurface) {
        self.draw_static(surface);
    }

    /// `false` for effects that only ever show their static image.
    fn is_animated(&self) -> bool {
        true
    }

    /// Frames drawn since the last `setup`.
    fn tick_count(&self) -> u64;
}

/// A renderer mounted on a scheduler: owns its animation loop and random stream.
///
/// The mount never owns the drawing surface; the host passes it in (or `None` while unavailable).
#[derive(Debug)]
pub struct EffectMount<R> {
    renderer: R,
    canvas: Canvas,
    rng: Rng64,
    anim: AnimationLoop,
    motion: MotionPreference,
    seen_generation: u64,
    pointer: Point,
}

impl<R: FrameRenderer> EffectMount<R> {
    /// Set up `renderer` and start its loop, or draw its still once under reduced motion.
    pub fn mount(
        mut renderer: R,
        canvas: Canvas,
        scheduler: Scheduler,
        motion: MotionPreference,
        mut rng: Rng64,
        surface: Option<&mut dyn DrawSurface>,
    ) -> Self {
        renderer.setup(canvas, &mut rng);
        let seen_generation = motion.generation();
        let mut mount = Self {
            renderer,
            canvas,
            rng,
            anim: AnimationLoop::new(scheduler, motion.clone()),
            motion,
            seen_generation,
            pointer: Point::ORIGIN,
        };
        mount.activate(surface);
        tracing::debug!(
            effect = mount.renderer.name(),
            width = canvas.width,
            height = canvas.height,
            animated = mount.anim.is_running(),
            "effect mounted"
        );
        mount
    }

    fn activate(&mut self, surface: Option<&mut dyn DrawSurface>) {
        let reduced = self.motion.is_reduced();
        if reduced || !self.renderer.is_animated() {
            self.anim.stop();
            if let Some(s) = surface {
                s.clear();
                if reduced {
                    self.renderer.draw_static(s);
                } else {
                    self.renderer.draw_idle(s);
                }
            }
            return;
        }
        self.anim.start();
    }

    /// Latest pointer position forwarded to the renderer.
    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Handle a scheduler wake. Returns `true` if the wake was this mount's frame.
    ///
    /// Without a surface the draw is skipped but the loop keeps running.
    pub fn on_wake(&mut self, wake: &Wake, surface: Option<&mut dyn DrawSurface>) -> bool {
        let Some(timestamp_ms) = self.anim.accept(wake) else {
            return false;
        };
        if let Some(s) = surface {
            let input = FrameInput {
                timestamp_ms,
                pointer: self.pointer,
            };
            self.renderer.draw_frame(s, &input, &mut self.rng);
        }
        self.anim.schedule_next();
        true
    }

    /// Cancel, rebuild state for `canvas`, and restart.
    pub fn resize(&mut self, canvas: Canvas, surface: Option<&mut dyn DrawSurface>) {
        self.anim.stop();
        self.canvas = canvas;
        self.renderer.setup(canvas, &mut self.rng);
        tracing::debug!(
            effect = self.renderer.name(),
            width = canvas.width,
            height = canvas.height,
            "effect resized"
        );
        self.activate(surface);
    }

    /// Re-read the motion preference after the host signals a change.
    ///
    /// Returns `true` if the preference had changed since it was last read.
    pub fn refresh_motion(&mut self, surface: Option<&mut dyn DrawSurface>) -> bool {
        if !self.motion.changed_since(self.seen_generation) {
            return false;
        }
        self.seen_generation = self.motion.generation();
        tracing::debug!(
            effect = self.renderer.name(),
            reduced = self.motion.is_reduced(),
            "motion preference refreshed"
        );
        self.anim.stop();
        self.activate(surface);
        true
    }

    /// Stop the loop. Dropping the mount does the same.
    pub fn unmount(&mut self) {
        if self.anim.is_running() {
            tracing::debug!(effect = self.renderer.name(), "effect unmounted");
        }
        self.anim.stop();
    }

    pub fn is_running(&self) -> bool {
        self.anim.is_running()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.anim.has_pending_frame()
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mount.rs"]
mod tests;

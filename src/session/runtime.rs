use crate::config::scene::{PointerPath, SceneConfig};
use crate::effects::background::Background;
use crate::effects::mount::{EffectMount, FrameRenderer};
use crate::effects::particles::ParticleEngine;
use crate::foundation::core::Canvas;
use crate::foundation::error::FxResult;
use crate::foundation::math::Rng64;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::recording::{DrawCmd, RecordingSurface};
use crate::render::surface::DrawSurface;
use crate::schedule::motion::MotionSource;
use crate::schedule::scheduler::{Scheduler, Wake};
use crate::schedule::throttle::PointerTracker;

const BACKGROUND_STREAM: u64 = 1;
const PARTICLE_STREAM: u64 = 2;

/// Which layer a surface is being created for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LayerKind {
    Background,
    Particles,
}

/// A mounted effect and the surface it draws on.
pub(crate) struct Layer<R, S> {
    pub(crate) mount: EffectMount<R>,
    pub(crate) surface: S,
}

impl<R: FrameRenderer, S: DrawSurface> Layer<R, S> {
    fn on_wake(&mut self, wake: &Wake) -> bool {
        self.mount
            .on_wake(wake, Some(&mut self.surface as &mut dyn DrawSurface))
    }
}

/// One simulated scene: scheduler, motion source, and the mounted layers.
///
/// Layers are stacked background first, particles on top. Each layer draws on its own surface.
pub(crate) struct Runtime<S> {
    canvas: Canvas,
    scheduler: Scheduler,
    motion: MotionSource,
    background: Option<Layer<Background, S>>,
    particles: Option<Layer<ParticleEngine, S>>,
    pointer: PointerTracker,
    path: PointerPath,
    frame_ms: f64,
    frame: u64,
}

impl<S: DrawSurface> Runtime<S> {
    /// Mount every layer `config` asks for at `t = 0`.
    pub(crate) fn new(
        config: &SceneConfig,
        mut make_surface: impl FnMut(LayerKind) -> FxResult<S>,
    ) -> FxResult<Self> {
        let scheduler = Scheduler::new();
        let motion = MotionSource::new(config.reduced_motion);
        let mut root = Rng64::new(config.seed);
        let bg_rng = root.fork(BACKGROUND_STREAM);
        let fx_rng = root.fork(PARTICLE_STREAM);

        let background = match config.background {
            Some(variant) => {
                let mut surface = make_surface(LayerKind::Background)?;
                let mount = EffectMount::mount(
                    Background::new(variant),
                    config.canvas,
                    scheduler.clone(),
                    motion.preference(),
                    bg_rng,
                    Some(&mut surface as &mut dyn DrawSurface),
                );
                Some(Layer { mount, surface })
            }
            None => None,
        };

        let particles = if config.cursor_particles {
            let mut surface = make_surface(LayerKind::Particles)?;
            let mount = EffectMount::mount(
                ParticleEngine::new(config.particle_config())?,
                config.canvas,
                scheduler.clone(),
                motion.preference(),
                fx_rng,
                Some(&mut surface as &mut dyn DrawSurface),
            );
            Some(Layer { mount, surface })
        } else {
            None
        };

        Ok(Self {
            canvas: config.canvas,
            scheduler,
            motion,
            background,
            particles,
            pointer: PointerTracker::default(),
            path: config.pointer,
            frame_ms: config.fps.frame_duration_ms(),
            frame: 0,
        })
    }

    /// Simulate one frame interval.
    ///
    /// The scripted pointer moves first, then the clock advances and every wake is offered to the
    /// layers in stacking order.
    pub(crate) fn step(&mut self) {
        let now_ms = self.scheduler.now_ms();
        self.pointer
            .on_move(now_ms, self.path.position_at(self.frame));
        if let Some(layer) = self.particles.as_mut() {
            layer.mount.set_pointer(self.pointer.position());
        }

        let frame_ms = self.frame_ms;
        let Self {
            scheduler,
            background,
            particles,
            ..
        } = self;
        scheduler.advance(frame_ms, |wake| {
            if let Some(layer) = background.as_mut()
                && layer.on_wake(&wake)
            {
                return;
            }
            if let Some(layer) = particles.as_mut() {
                layer.on_wake(&wake);
            }
        });
        self.frame += 1;
    }

    /// Frames simulated so far.
    pub(crate) fn frames(&self) -> u64 {
        self.frame
    }

    pub(crate) fn now_ms(&self) -> f64 {
        self.scheduler.now_ms()
    }

    /// Live cursor particles (zero without a particle layer).
    pub(crate) fn population(&self) -> usize {
        self.particles
            .as_ref()
            .map_or(0, |layer| layer.mount.renderer().len())
    }

    pub(crate) fn particles(&self) -> Option<&ParticleEngine> {
        self.particles.as_ref().map(|layer| layer.mount.renderer())
    }

    pub(crate) fn background(&self) -> Option<&Background> {
        self.background.as_ref().map(|layer| layer.mount.renderer())
    }

    /// `true` while any layer still has an animation loop running.
    pub(crate) fn is_animating(&self) -> bool {
        self.background
            .as_ref()
            .is_some_and(|layer| layer.mount.is_running())
            || self
                .particles
                .as_ref()
                .is_some_and(|layer| layer.mount.is_running())
    }

    /// Flip the reduced-motion preference and let each layer react.
    pub(crate) fn set_reduced_motion(&mut self, reduced: bool) {
        self.motion.set_reduced(reduced);
        if let Some(layer) = self.background.as_mut() {
            layer
                .mount
                .refresh_motion(Some(&mut layer.surface as &mut dyn DrawSurface));
        }
        if let Some(layer) = self.particles.as_mut() {
            layer
                .mount
                .refresh_motion(Some(&mut layer.surface as &mut dyn DrawSurface));
        }
    }

    /// Resize every layer, resizing each surface with `resize_surface` first.
    pub(crate) fn resize(
        &mut self,
        canvas: Canvas,
        mut resize_surface: impl FnMut(&mut S, Canvas) -> FxResult<()>,
    ) -> FxResult<()> {
        if let Some(layer) = self.background.as_mut() {
            resize_surface(&mut layer.surface, canvas)?;
            layer
                .mount
                .resize(canvas, Some(&mut layer.surface as &mut dyn DrawSurface));
        }
        if let Some(layer) = self.particles.as_mut() {
            resize_surface(&mut layer.surface, canvas)?;
            layer
                .mount
                .resize(canvas, Some(&mut layer.surface as &mut dyn DrawSurface));
        }
        self.canvas = canvas;
        Ok(())
    }

    fn surfaces(&self) -> impl Iterator<Item = &S> {
        self.background
            .iter()
            .map(|layer| &layer.surface)
            .chain(self.particles.iter().map(|layer| &layer.surface))
    }

    fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut S> {
        self.background
            .iter_mut()
            .map(|layer| &mut layer.surface)
            .chain(self.particles.iter_mut().map(|layer| &mut layer.surface))
    }
}

impl Runtime<RecordingSurface> {
    /// Recording runtime; surfaces never fail to build.
    pub(crate) fn recording(config: &SceneConfig) -> FxResult<Self> {
        let canvas = config.canvas;
        Self::new(config, |_| Ok(RecordingSurface::new(canvas)))
    }

    /// Drain the commands recorded since the last call, background layer first.
    pub(crate) fn take_commands(&mut self) -> Vec<DrawCmd> {
        let mut cmds = Vec::new();
        for surface in self.surfaces_mut() {
            cmds.extend(surface.take());
        }
        cmds
    }
}

impl Runtime<CpuSurface> {
    /// Raster runtime. Only the background layer gets the font, since only it draws text.
    pub(crate) fn raster(config: &SceneConfig, font: Option<&[u8]>) -> FxResult<Self> {
        let canvas = config.canvas;
        Self::new(config, |kind| {
            let font = match kind {
                LayerKind::Background => font.map(<[u8]>::to_vec),
                LayerKind::Particles => None,
            };
            CpuSurface::new(canvas, font)
        })
    }

    /// Resolve queued draws on every layer.
    pub(crate) fn present(&mut self) -> FxResult<()> {
        for surface in self.surfaces_mut() {
            surface.present()?;
        }
        Ok(())
    }

    /// Flatten the presented layers over `clear_rgba`.
    pub(crate) fn compose(&self, clear_rgba: Option<[u8; 4]>) -> FxResult<FrameRGBA> {
        let mut out = FrameRGBA::solid(
            self.canvas.width,
            self.canvas.height,
            clear_rgba.unwrap_or([0, 0, 0, 0]),
        );
        for surface in self.surfaces() {
            out.composite_over(surface.pixels())?;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/runtime.rs"]
mod tests;

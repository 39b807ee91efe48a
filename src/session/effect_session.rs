use std::path::PathBuf;

use serde::Serialize;

use crate::config::scene::SceneConfig;
use crate::effects::background::Background;
use crate::effects::particles::ParticleEngine;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex, FrameRange};
use crate::foundation::error::{FxError, FxResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuSurface;
use crate::render::fingerprint::{FrameFingerprint, fingerprint};
use crate::render::recording::{DrawCmd, RecordingSurface};
use crate::render::text::TextLayoutEngine;
use crate::session::runtime::Runtime;

/// Options for [`EffectSession`].
#[derive(Clone, Debug, Default)]
pub struct SessionOpts {
    /// Base directory for relative asset paths such as `font_path`.
    pub assets_root: PathBuf,
}

/// What one [`EffectSession::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StepReport {
    /// Index of the frame just simulated.
    pub frame: FrameIndex,
    /// Scheduler time after the step, in ms.
    pub timestamp_ms: f64,
    /// Live cursor particles after the step.
    pub population: usize,
    /// Number of draw commands issued during the step.
    pub commands: usize,
    /// Digest of those draw commands.
    pub fingerprint: FrameFingerprint,
}

/// Range render statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Frames simulated, including the warm-up before `range.start`.
    pub frames_simulated: u64,
}

/// Deterministic driver for a [`SceneConfig`].
///
/// A session keeps one live simulation that [`EffectSession::step`] advances against a recording
/// surface. Raster output and command dumps re-simulate the scene from frame 0 on fresh surfaces,
/// so the same seed always produces the same pixels regardless of what was stepped before.
pub struct EffectSession {
    config: SceneConfig,
    font: Option<Vec<u8>>,
    live: Runtime<RecordingSurface>,
}

impl EffectSession {
    /// Validate `config`, load its font and mount the live simulation.
    #[tracing::instrument(skip_all, fields(seed = config.seed))]
    pub fn new(config: &SceneConfig, opts: SessionOpts) -> FxResult<Self> {
        config.validate()?;
        let font = config.font_bytes(&opts.assets_root)?;
        if let Some(bytes) = &font {
            TextLayoutEngine::from_font_bytes(bytes.clone())?;
        }
        let live = Runtime::recording(config)?;
        tracing::debug!(
            width = config.canvas.width,
            height = config.canvas.height,
            background = config.background.map(|v| v.as_str()),
            cursor_particles = config.cursor_particles,
            "session created"
        );
        Ok(Self {
            config: config.clone(),
            font,
            live,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Frames the live simulation has stepped through.
    pub fn frames_stepped(&self) -> u64 {
        self.live.frames()
    }

    /// Current live scheduler time in ms.
    pub fn now_ms(&self) -> f64 {
        self.live.now_ms()
    }

    /// Live cursor particle population.
    pub fn population(&self) -> usize {
        self.live.population()
    }

    pub fn particles(&self) -> Option<&ParticleEngine> {
        self.live.particles()
    }

    pub fn background(&self) -> Option<&Background> {
        self.live.background()
    }

    /// `true` while some live layer is still animating.
    pub fn is_animating(&self) -> bool {
        self.live.is_animating()
    }

    /// Advance the live simulation by one frame interval.
    pub fn step(&mut self) -> StepReport {
        let frame = FrameIndex(self.live.frames());
        self.live.step();
        let cmds = self.live.take_commands();
        StepReport {
            frame,
            timestamp_ms: self.live.now_ms(),
            population: self.live.population(),
            commands: cmds.len(),
            fingerprint: fingerprint(&cmds),
        }
    }

    /// Resize the live simulation. Later renders use the new canvas.
    #[tracing::instrument(
        skip(self, canvas),
        fields(width = canvas.width, height = canvas.height)
    )]
    pub fn resize(&mut self, canvas: Canvas) -> FxResult<()> {
        canvas.validate_raster()?;
        self.live.resize(canvas, |surface, canvas| {
            surface.resize(canvas);
            Ok(())
        })?;
        self.config.canvas = canvas;
        Ok(())
    }

    /// Change the reduced-motion preference of the live simulation and of later renders.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.live.set_reduced_motion(reduced);
        self.config.reduced_motion = reduced;
    }

    /// Draw commands issued during frame `frame`, background layer first.
    #[tracing::instrument(skip(self, frame), fields(frame = frame.0))]
    pub fn record_frame(&self, frame: FrameIndex) -> FxResult<Vec<DrawCmd>> {
        let mut rt = Runtime::recording(&self.config)?;
        loop {
            rt.step();
            let cmds = rt.take_commands();
            if rt.frames() > frame.0 {
                return Ok(cmds);
            }
        }
    }

    /// Rasterize frame `frame`.
    #[tracing::instrument(skip(self, frame), fields(frame = frame.0))]
    pub fn render_frame(&self, frame: FrameIndex) -> FxResult<FrameRGBA> {
        let mut rt = self.raster_runtime()?;
        for _ in 0..=frame.0 {
            rt.step();
            rt.present()?;
        }
        rt.compose(self.config.clear_rgba)
    }

    /// Rasterize `range` and stream the frames into `sink` in order.
    #[tracing::instrument(
        skip(self, range, sink),
        fields(start = range.start.0, end = range.end.0)
    )]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> FxResult<RenderStats> {
        if range.is_empty() {
            return Err(FxError::validation(
                "render_range range must be non-empty",
            ));
        }
        let mut rt = self.raster_runtime()?;
        sink.begin(SinkConfig {
            width: self.config.canvas.width,
            height: self.config.canvas.height,
            fps: self.config.fps,
        })?;

        let mut stats = RenderStats::default();
        while rt.frames() < range.end.0 {
            let idx = FrameIndex(rt.frames());
            rt.step();
            rt.present()?;
            stats.frames_simulated += 1;
            if range.contains(idx) {
                let frame = rt.compose(self.config.clear_rgba)?;
                sink.push_frame(idx, &frame)?;
                stats.frames_total += 1;
            }
        }
        sink.end()?;
        tracing::debug!(
            frames = stats.frames_total,
            simulated = stats.frames_simulated,
            "range rendered"
        );
        Ok(stats)
    }

    fn raster_runtime(&self) -> FxResult<Runtime<CpuSurface>> {
        Runtime::raster(&self.config, self.font.as_deref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/effect_session.rs"]
mod tests;

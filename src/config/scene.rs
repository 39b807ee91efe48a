use std::f64::consts::TAU;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::effects::background::BackgroundVariant;
use crate::effects::particles::ParticleConfig;
use crate::foundation::core::{Canvas, Fps, Point};
use crate::foundation::error::{FxError, FxResult};

/// Scripted pointer movement for headless runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum PointerPath {
    /// Pointer parked at one point.
    Fixed { x: f64, y: f64 },
    /// Pointer circling `(cx, cy)` once every `period_frames`.
    Orbit {
        cx: f64,
        cy: f64,
        radius: f64,
        period_frames: u64,
    },
}

impl Default for PointerPath {
    fn default() -> Self {
        PointerPath::Fixed { x: 0.0, y: 0.0 }
    }
}

impl PointerPath {
    /// Pointer position on frame `frame`.
    pub fn position_at(&self, frame: u64) -> Point {
        match *self {
            PointerPath::Fixed { x, y } => Point::new(x, y),
            PointerPath::Orbit {
                cx,
                cy,
                radius,
                period_frames,
            } => {
                let period = period_frames.max(1);
                let angle = TAU * (frame % period) as f64 / period as f64;
                Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
            }
        }
    }

    fn validate(&self) -> FxResult<()> {
        match *self {
            PointerPath::Fixed { x, y } => {
                if !x.is_finite() || !y.is_finite() {
                    return Err(FxError::validation("pointer position must be finite"));
                }
            }
            PointerPath::Orbit {
                cx,
                cy,
                radius,
                period_frames,
            } => {
                if !cx.is_finite() || !cy.is_finite() || !radius.is_finite() || radius < 0.0 {
                    return Err(FxError::validation(
                        "pointer orbit centre must be finite and radius >= 0",
                    ));
                }
                if period_frames == 0 {
                    return Err(FxError::validation(
                        "pointer orbit period_frames must be >= 1",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A headless effects scene: which layers to run, on what canvas, with which seed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    pub canvas: Canvas,
    #[serde(default)]
    pub fps: Fps,
    /// Seed for every random stream in the scene.
    #[serde(default)]
    pub seed: u64,
    /// Full-page background layer, if any.
    #[serde(default)]
    pub background: Option<BackgroundVariant>,
    /// Whether the cursor particle layer runs on top of the background.
    #[serde(default)]
    pub cursor_particles: bool,
    /// Overrides for the cursor particle engine.
    #[serde(default)]
    pub particles: Option<ParticleConfig>,
    #[serde(default)]
    pub pointer: PointerPath,
    /// Start with the reduced-motion preference set.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Font used for text effects, relative to the session's assets root.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    /// Straight-alpha background colour under all layers.
    #[serde(default)]
    pub clear_rgba: Option<[u8; 4]>,
}

impl SceneConfig {
    /// Minimal scene on `canvas` with the default background.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            fps: Fps::default(),
            seed: 0,
            background: Some(BackgroundVariant::default()),
            cursor_particles: false,
            particles: None,
            pointer: PointerPath::default(),
            reduced_motion: false,
            font_path: None,
            clear_rgba: None,
        }
    }

    /// Parse a scene from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> FxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FxError::validation(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FxError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> FxResult<()> {
        self.canvas.validate_raster()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if self.background.is_none() && !self.cursor_particles {
            return Err(FxError::validation(
                "scene needs a background or cursor_particles",
            ));
        }
        if let Some(p) = &self.particles {
            p.validate()?;
        }
        self.pointer.validate()?;
        if let Some(path) = &self.font_path
            && path.as_os_str().is_empty()
        {
            return Err(FxError::validation("font_path must be non-empty"));
        }
        Ok(())
    }

    /// Read the configured font, resolving relative paths against `assets_root`.
    pub fn font_bytes(&self, assets_root: &Path) -> FxResult<Option<Vec<u8>>> {
        let Some(rel) = &self.font_path else {
            return Ok(None);
        };
        let path = assets_root.join(rel);
        let bytes = std::fs::read(&path)
            .map_err(|e| FxError::validation(format!("read font '{}': {e}", path.display())))?;
        Ok(Some(bytes))
    }

    /// Effective particle settings.
    pub fn particle_config(&self) -> ParticleConfig {
        self.particles.clone().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;

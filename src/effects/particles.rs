use serde::{Deserialize, Serialize};

use crate::effects::mount::{FrameInput, FrameRenderer};
use crate::effects::palette;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::error::{FxError, FxResult};
use crate::foundation::math::RandomSource;
use crate::render::surface::DrawSurface;

/// Tunables for [`ParticleEngine`]. Defaults reproduce the site's cursor trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    /// Probability of spawning one particle per tick.
    pub spawn_chance: f64,
    /// Half-width of the square around the pointer that particles spawn in.
    pub spawn_spread: f64,
    /// Maximum speed per axis, in px per tick.
    pub max_speed: f64,
    /// Lifetime in ticks.
    pub lifetime: u32,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Particles closer than this are linked by a line.
    pub link_distance: f64,
    /// Opacity of a zero-length link for a fresh particle.
    pub link_opacity: f64,
    pub palette: Vec<Rgba8>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.1,
            spawn_spread: 50.0,
            max_speed: 1.0,
            lifetime: 60,
            radius_min: 1.0,
            radius_max: 4.0,
            link_distance: 100.0,
            link_opacity: 0.3,
            palette: palette::CURSOR_PARTICLES.to_vec(),
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> FxResult<()> {
        let finite = [
            self.spawn_chance,
            self.spawn_spread,
            self.max_speed,
            self.radius_min,
            self.radius_max,
            self.link_distance,
            self.link_opacity,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(FxError::validation("particle settings must be finite"));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(FxError::validation("particles.spawn_chance must be in [0, 1]"));
        }
        if self.spawn_spread < 0.0 || self.max_speed < 0.0 || self.link_distance < 0.0 {
            return Err(FxError::validation(
                "particles spread, speed and link distance must be >= 0",
            ));
        }
        if self.lifetime == 0 {
            return Err(FxError::validation("particles.lifetime must be >= 1"));
        }
        if self.radius_min <= 0.0 || self.radius_max < self.radius_min {
            return Err(FxError::validation(
                "particles radius range must satisfy 0 < radius_min <= radius_max",
            ));
        }
        if !(0.0..=1.0).contains(&self.link_opacity) {
            return Err(FxError::validation("particles.link_opacity must be in [0, 1]"));
        }
        if self.palette.is_empty() {
            return Err(FxError::validation("particles.palette must not be empty"));
        }
        Ok(())
    }
}

/// One live cursor particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vel: Vec2,
    /// Remaining ticks; always `<= max_life`.
    pub life: u32,
    pub max_life: u32,
    pub radius: f64,
    pub color: Rgba8,
}

impl Particle {
    /// Fade factor in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        if self.max_life == 0 {
            return 0.0;
        }
        f64::from(self.life) / f64::from(self.max_life)
    }
}

/// Cursor trail: particles spawned near the pointer that drift, fade and link to neighbours.
#[derive(Clone, Debug)]
pub struct ParticleEngine {
    config: ParticleConfig,
    canvas: Option<Canvas>,
    particles: Vec<Particle>,
    ticks: u64,
}

impl Default for ParticleEngine {
    fn default() -> Self {
        Self::with_valid_config(ParticleConfig::default())
    }
}

impl ParticleEngine {
    /// Build an engine, rejecting settings that fail [`ParticleConfig::validate`].
    pub fn new(config: ParticleConfig) -> FxResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ParticleConfig) -> Self {
        Self {
            config,
            canvas: None,
            particles: Vec::new(),
            ticks: 0,
        }
    }

    /// Start over with an empty collection sized for `canvas`.
    pub fn initialize(&mut self, canvas: Canvas) {
        self.canvas = Some(canvas);
        self.particles.clear();
        self.ticks = 0;
    }

    /// Run one frame: clear, maybe spawn, advance, draw, prune.
    ///
    /// Without a surface nothing happens at all, so the simulation pauses with the canvas.
    pub fn tick(
        &mut self,
        surface: Option<&mut dyn DrawSurface>,
        pointer: Point,
        rng: &mut dyn RandomSource,
    ) {
        let Some(surface) = surface else {
            return;
        };
        surface.clear();

        if rng.chance(self.config.spawn_chance) {
            let p = self.spawn(pointer, rng);
            self.particles.push(p);
        }

        for p in &mut self.particles {
            p.pos += p.vel;
            p.life = p.life.saturating_sub(1);
        }

        self.draw(surface);

        self.particles.retain(|p| p.life > 0);
        self.ticks += 1;
    }

    fn spawn(&self, pointer: Point, rng: &mut dyn RandomSource) -> Particle {
        let c = &self.config;
        let x = pointer.x + rng.range(-c.spawn_spread, c.spawn_spread);
        let y = pointer.y + rng.range(-c.spawn_spread, c.spawn_spread);
        let vx = rng.range(-c.max_speed, c.max_speed);
        let vy = rng.range(-c.max_speed, c.max_speed);
        let radius = rng.range(c.radius_min, c.radius_max);
        let color = c.palette[rng.index(c.palette.len())];
        Particle {
            pos: Point::new(x, y),
            vel: Vec2::new(vx, vy),
            life: c.lifetime,
            max_life: c.lifetime,
            radius,
            color,
        }
    }

    // Pairwise links are quadratic; the live population stays around spawn_chance * lifetime.
    fn draw(&self, surface: &mut dyn DrawSurface) {
        let threshold = self.config.link_distance;
        for (i, p) in self.particles.iter().enumerate() {
            if p.life == 0 {
                continue;
            }
            let alpha = p.alpha();
            surface.fill_circle(p.pos, p.radius, p.color, alpha as f32);

            for (j, other) in self.particles.iter().enumerate() {
                if i == j || other.life == 0 {
                    continue;
                }
                let d = p.pos.distance(other.pos);
                if d < threshold {
                    let opacity = (1.0 - d / threshold) * alpha * self.config.link_opacity;
                    surface.stroke_line(p.pos, other.pos, 1.0, p.color, opacity as f32);
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }
}

impl FrameRenderer for ParticleEngine {
    fn name(&self) -> &'static str {
        "cursor_particles"
    }

    fn setup(&mut self, canvas: Canvas, _rng: &mut dyn RandomSource) {
        self.initialize(canvas);
    }

    fn draw_frame(
        &mut self,
        surface: &mut dyn DrawSurface,
        input: &FrameInput,
        rng: &mut dyn RandomSource,
    ) {
        self.tick(Some(surface), input.pointer, rng);
    }

    fn draw_static(&mut self, surface: &mut dyn DrawSurface) {
        surface.clear();
    }

    fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;

use crate::effects::mount::{FrameInput, FrameRenderer};
use crate::effects::palette;
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::math::RandomSource;
use crate::render::surface::DrawSurface;

pub const FIELD_COUNT: usize = 50;
pub const FIELD_MAX_SPEED: f64 = 0.25;
pub const FIELD_LINK_DISTANCE: f64 = 150.0;
pub const FIELD_LINK_OPACITY: f64 = 0.2;

/// One drifting dot of the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub pos: Point,
    pub vel: Vec2,
    pub radius: f64,
    pub opacity: f64,
}

/// Slowly drifting dots bouncing off the canvas edges, linked when close.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    canvas: Option<Canvas>,
    dots: Vec<Dot>,
    ticks: u64,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }
}

/// Move one step, first negating each velocity component whose next position would leave
/// `[0, dimension]`.
pub fn reflect_step(pos: Point, vel: Vec2, canvas: Canvas) -> (Point, Vec2) {
    fn axis(p: f64, v: f64, dim: f64) -> (f64, f64) {
        let next = p + v;
        let v = if next < 0.0 || next > dim { -v } else { v };
        (p + v, v)
    }
    let (x, vx) = axis(pos.x, vel.x, canvas.w());
    let (y, vy) = axis(pos.y, vel.y, canvas.h());
    (Point::new(x, y), Vec2::new(vx, vy))
}

impl FrameRenderer for ParticleField {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn setup(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.canvas = Some(canvas);
        self.ticks = 0;
        self.dots = (0..FIELD_COUNT)
            .map(|_| {
                let x = rng.range(0.0, canvas.w());
                let y = rng.range(0.0, canvas.h());
                let vx = rng.range(-FIELD_MAX_SPEED, FIELD_MAX_SPEED);
                let vy = rng.range(-FIELD_MAX_SPEED, FIELD_MAX_SPEED);
                Dot {
                    pos: Point::new(x, y),
                    vel: Vec2::new(vx, vy),
                    radius: rng.range(1.0, 3.0),
                    opacity: rng.range(0.1, 0.6),
                }
            })
            .collect();
    }

    fn draw_frame(
        &mut self,
        surface: &mut dyn DrawSurface,
        _input: &FrameInput,
        _rng: &mut dyn RandomSource,
    ) {
        let Some(canvas) = self.canvas else {
            return;
        };
        surface.clear();

        for (i, a) in self.dots.iter().enumerate() {
            for b in &self.dots[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < FIELD_LINK_DISTANCE {
                    let alpha = FIELD_LINK_OPACITY * (1.0 - d / FIELD_LINK_DISTANCE);
                    surface.stroke_line(a.pos, b.pos, 1.0, palette::PRIMARY, alpha as f32);
                }
            }
        }

        for dot in &mut self.dots {
            surface.fill_circle(dot.pos, dot.radius, palette::PRIMARY, dot.opacity as f32);
            (dot.pos, dot.vel) = reflect_step(dot.pos, dot.vel, canvas);
        }
        self.ticks += 1;
    }

    fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/field.rs"]
mod tests;

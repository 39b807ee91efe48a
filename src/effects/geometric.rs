use std::f64::consts::PI;

use crate::effects::mount::{FrameInput, FrameRenderer};
use crate::effects::palette;
use crate::foundation::core::{Affine, Canvas, Point};
use crate::foundation::math::RandomSource;
use crate::render::surface::DrawSurface;

pub const RING_COUNT: usize = 5;

/// Concentric hexagons rotating about the canvas centre.
#[derive(Clone, Debug, Default)]
pub struct GeometricRings {
    canvas: Option<Canvas>,
    ticks: u64,
}

impl GeometricRings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertices of ring `i` at tick `t`.
    pub fn hexagon(center: Point, t: f64, i: usize) -> [Point; 6] {
        let i = i as f64;
        let radius = 100.0 + i * 50.0;
        let xf = Affine::translate(center.to_vec2()) * Affine::rotate((t * 0.001 + i * 0.2) * PI);
        std::array::from_fn(|j| {
            let angle = j as f64 * PI * 2.0 / 6.0;
            xf * Point::new(angle.cos() * radius, angle.sin() * radius)
        })
    }
}

impl FrameRenderer for GeometricRings {
    fn name(&self) -> &'static str {
        "geometric"
    }

    fn setup(&mut self, canvas: Canvas, _rng: &mut dyn RandomSource) {
        self.canvas = Some(canvas);
        self.ticks = 0;
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
        let t = self.ticks as f64;
        for i in 0..RING_COUNT {
            let alpha = 0.1 - 0.02 * i as f64;
            let points = Self::hexagon(canvas.center(), t, i);
            surface.stroke_polygon(&points, 1.0, palette::PRIMARY, alpha as f32);
        }
        self.ticks += 1;
    }

    fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/geometric.rs"]
mod tests;

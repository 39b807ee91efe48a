use crate::effects::mount::{FrameInput, FrameRenderer};
use crate::effects::palette::{self, tint};
use crate::foundation::core::{Canvas, Point};
use crate::foundation::math::RandomSource;
use crate::render::surface::{DrawSurface, GradientStop, Paint};

pub const WAVE_LAYERS: usize = 3;
/// Horizontal sampling step, in px.
pub const WAVE_STEP: u32 = 5;

/// Height of wave `layer` at column `x` after `t` ticks.
pub fn wave_y(x: f64, t: f64, layer: usize, height: f64) -> f64 {
    let i = layer as f64;
    height / 2.0
        + (x * 0.01 + t * 0.02 + i * 2.0).sin() * (30.0 + i * 10.0)
        + (x * 0.02 + t * 0.03 + i * 1.5).sin() * (20.0 + i * 5.0)
}

/// Fill shared by every wave layer.
pub fn wave_paint() -> Paint {
    Paint::VerticalGradient {
        stops: vec![
            GradientStop::new(0.0, tint(palette::PRIMARY, 0.1)),
            GradientStop::new(0.5, tint(palette::SECONDARY, 0.05)),
            GradientStop::new(1.0, tint(palette::GREEN, 0.1)),
        ],
    }
}

/// Three superimposed sine ribbons filled down to the bottom edge.
#[derive(Clone, Debug, Default)]
pub struct WaveLayers {
    canvas: Option<Canvas>,
    ticks: u64,
}

impl WaveLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed outline of `layer` at tick `t`.
    pub fn outline(canvas: Canvas, t: f64, layer: usize) -> Vec<Point> {
        let (w, h) = (canvas.w(), canvas.h());
        let mut points = Vec::with_capacity((canvas.width / WAVE_STEP) as usize + 4);
        points.push(Point::new(0.0, h / 2.0));
        for x in (0..=canvas.width).step_by(WAVE_STEP as usize) {
            let x = f64::from(x);
            points.push(Point::new(x, wave_y(x, t, layer, h)));
        }
        points.push(Point::new(w, h));
        points.push(Point::new(0.0, h));
        points
    }
}

impl FrameRenderer for WaveLayers {
    fn name(&self) -> &'static str {
        "waves"
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
        let paint = wave_paint();
        let t = self.ticks as f64;
        for layer in 0..WAVE_LAYERS {
            let alpha = 0.3 - 0.1 * layer as f64;
            surface.fill_polygon(&Self::outline(canvas, t, layer), &paint, alpha as f32);
        }
        self.ticks += 1;
    }

    fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/waves.rs"]
mod tests;

use crate::effects::mount::{FrameInput, FrameRenderer};
use crate::effects::palette;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::math::RandomSource;
use crate::render::surface::{DrawSurface, Paint};

pub const GLYPH_SIZE: u32 = 14;
pub const GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()_+-=[]{}|;:,.<>?";
/// Opacity of the dark wash painted over the previous frame.
pub const FADE_ALPHA: f32 = 0.05;
/// A drop past the bottom restarts when a sample exceeds this.
pub const RESTART_THRESHOLD: f64 = 0.975;

/// Falling glyph columns over a fading trail. Never clears between frames.
#[derive(Clone, Debug, Default)]
pub struct MatrixRain {
    canvas: Option<Canvas>,
    /// Current row per column.
    drops: Vec<u32>,
    ticks: u64,
}

impl MatrixRain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }
}

impl FrameRenderer for MatrixRain {
    fn name(&self) -> &'static str {
        "matrix"
    }

    fn setup(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.canvas = Some(canvas);
        self.ticks = 0;
        let columns = canvas.width / GLYPH_SIZE;
        let rows = canvas.h() / f64::from(GLYPH_SIZE);
        self.drops = (0..columns)
            .map(|_| (rng.next_f64() * rows).floor() as u32)
            .collect();
    }

    fn draw_frame(
        &mut self,
        surface: &mut dyn DrawSurface,
        _input: &FrameInput,
        rng: &mut dyn RandomSource,
    ) {
        let Some(canvas) = self.canvas else {
            return;
        };
        surface.fill_rect(canvas.rect(), &Paint::Solid(palette::INK), FADE_ALPHA);

        let glyphs = GLYPHS.as_bytes();
        let size = f64::from(GLYPH_SIZE);
        let mut buf = [0u8; 4];
        for (col, drop) in self.drops.iter_mut().enumerate() {
            let glyph = char::from(glyphs[rng.index(glyphs.len())]).encode_utf8(&mut buf);
            let origin = Point::new(col as f64 * size, f64::from(*drop) * size);
            surface.fill_text(glyph, origin, GLYPH_SIZE as f32, palette::TERMINAL, 1.0);

            if origin.y > canvas.h() && rng.next_f64() > RESTART_THRESHOLD {
                *drop = 0;
            }
            *drop += 1;
        }
        self.ticks += 1;
    }

    fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/matrix.rs"]
mod tests;

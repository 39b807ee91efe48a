use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Point, Rect};

/// One colour stop of a [`Paint::VerticalGradient`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the canvas height, in `[0, 1]`.
    pub offset: f64,
    pub color: Rgba8,
}

impl GradientStop {
    pub fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Fill style for area primitives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    Solid(Rgba8),
    /// Linear gradient from the top of the canvas (`offset = 0`) to the bottom (`offset = 1`).
    VerticalGradient { stops: Vec<GradientStop> },
}

impl Paint {
    /// Colour at normalized height `t`, interpolating between the surrounding stops.
    ///
    /// Stops are expected in ascending offset order; `t` outside the stop range takes the nearest
    /// end colour.
    pub fn sample(&self, t: f64) -> Rgba8 {
        let stops = match self {
            Paint::Solid(c) => return *c,
            Paint::VerticalGradient { stops } => stops,
        };
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return Rgba8::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        if t >= last.offset {
            return last.color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let u = if span <= 0.0 {
                    1.0
                } else {
                    (t - a.offset) / span
                };
                return lerp_rgba(a.color, b.color, u);
            }
        }
        last.color
    }
}

fn lerp_rgba(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    let lerp = |x: u8, y: u8| -> u8 {
        let xf = f64::from(x);
        let yf = f64::from(y);
        (xf + (yf - xf) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgba8 {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
        a: lerp(a.a, b.a),
    }
}

/// Immediate-mode 2D drawing target, modelled on the browser canvas.
///
/// Every primitive takes a global `alpha` in `[0, 1]` that multiplies the colour's own alpha.
/// Effects never see the concrete surface; anything implementing this trait can host them.
pub trait DrawSurface {
    /// Current pixel dimensions.
    fn canvas(&self) -> Canvas;

    /// Erase everything to transparent.
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, paint: &Paint, alpha: f32);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, alpha: f32);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba8, alpha: f32);

    /// Fill the closed polygon through `points`. Fewer than three points draw nothing.
    fn fill_polygon(&mut self, points: &[Point], paint: &Paint, alpha: f32);

    /// Stroke the closed outline through `points`.
    fn stroke_polygon(&mut self, points: &[Point], width: f64, color: Rgba8, alpha: f32);

    /// Draw `text` with its alphabetic baseline starting at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point, size_px: f32, color: Rgba8, alpha: f32);
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

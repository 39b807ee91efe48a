use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::effects::field::ParticleField;
use crate::effects::geometric::GeometricRings;
use crate::effects::matrix::MatrixRain;
use crate::effects::mount::{FrameInput, FrameRenderer};
use crate::effects::neural::NeuralNetwork;
use crate::effects::palette::{self, tint};
use crate::effects::waves::WaveLayers;
use crate::foundation::color::Rgba8;
use crate::foundation::core::Canvas;
use crate::foundation::math::RandomSource;
use crate::render::surface::{DrawSurface, GradientStop, Paint};

/// Which full-page background to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundVariant {
    Gradient,
    Particles,
    Waves,
    Geometric,
    #[default]
    Neural,
    Matrix,
}

impl BackgroundVariant {
    pub const ALL: [BackgroundVariant; 6] = [
        BackgroundVariant::Gradient,
        BackgroundVariant::Particles,
        BackgroundVariant::Waves,
        BackgroundVariant::Geometric,
        BackgroundVariant::Neural,
        BackgroundVariant::Matrix,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundVariant::Gradient => "gradient",
            BackgroundVariant::Particles => "particles",
            BackgroundVariant::Waves => "waves",
            BackgroundVariant::Geometric => "geometric",
            BackgroundVariant::Neural => "neural",
            BackgroundVariant::Matrix => "matrix",
        }
    }

    /// Gradient layers painted instead of the animation when motion is reduced.
    pub fn static_layers(self) -> Vec<Paint> {
        use palette::{GREEN, PRIMARY, SECONDARY, TERMINAL};
        match self {
            BackgroundVariant::Gradient => {
                vec![wash((PRIMARY, 0.05), (SECONDARY, 0.05), (GREEN, 0.05))]
            }
            BackgroundVariant::Particles => {
                vec![wash((PRIMARY, 0.10), (GREEN, 0.05), (SECONDARY, 0.10))]
            }
            BackgroundVariant::Waves => {
                vec![wash((PRIMARY, 0.08), (SECONDARY, 0.04), (GREEN, 0.08))]
            }
            BackgroundVariant::Geometric => {
                vec![wash((PRIMARY, 0.05), (GREEN, 0.05), (SECONDARY, 0.05))]
            }
            BackgroundVariant::Neural => {
                vec![wash((PRIMARY, 0.08), (GREEN, 0.04), (SECONDARY, 0.08))]
            }
            BackgroundVariant::Matrix => {
                vec![wash((TERMINAL, 0.05), (TERMINAL, 0.10), (TERMINAL, 0.05))]
            }
        }
    }
}

fn wash(a: (Rgba8, f64), b: (Rgba8, f64), c: (Rgba8, f64)) -> Paint {
    Paint::VerticalGradient {
        stops: vec![
            GradientStop::new(0.0, tint(a.0, a.1)),
            GradientStop::new(0.5, tint(b.0, b.1)),
            GradientStop::new(1.0, tint(c.0, c.1)),
        ],
    }
}

impl fmt::Display for BackgroundVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown background variant \"{s}\""))
    }
}

/// Two layered washes; never animates.
#[derive(Clone, Copy, Debug, Default)]
pub struct GradientBackground;

impl GradientBackground {
    /// The washes shown with full motion. Reduced motion gets the single softer
    /// wash from [`BackgroundVariant::static_layers`].
    pub fn layers(self) -> Vec<Paint> {
        use palette::{GREEN, PRIMARY, SECONDARY};
        vec![
            wash((PRIMARY, 0.10), (SECONDARY, 0.05), (GREEN, 0.10)),
            wash((SECONDARY, 0.10), (PRIMARY, 0.05), (GREEN, 0.05)),
        ]
    }
}

/// Any background variant behind one renderer type.
#[derive(Clone, Debug)]
pub enum Background {
    Gradient(GradientBackground),
    Particles(ParticleField),
    Waves(WaveLayers),
    Geometric(GeometricRings),
    Neural(NeuralNetwork),
    Matrix(MatrixRain),
}

impl Background {
    pub fn new(variant: BackgroundVariant) -> Self {
        match variant {
            BackgroundVariant::Gradient => Background::Gradient(GradientBackground),
            BackgroundVariant::Particles => Background::Particles(ParticleField::new()),
            BackgroundVariant::Waves => Background::Waves(WaveLayers::new()),
            BackgroundVariant::Geometric => Background::Geometric(GeometricRings::new()),
            BackgroundVariant::Neural => Background::Neural(NeuralNetwork::new()),
            BackgroundVariant::Matrix => Background::Matrix(MatrixRain::new()),
        }
    }

    pub fn variant(&self) -> BackgroundVariant {
        match self {
            Background::Gradient(_) => BackgroundVariant::Gradient,
            Background::Particles(_) => BackgroundVariant::Particles,
            Background::Waves(_) => BackgroundVariant::Waves,
            Background::Geometric(_) => BackgroundVariant::Geometric,
            Background::Neural(_) => BackgroundVariant::Neural,
            Background::Matrix(_) => BackgroundVariant::Matrix,
        }
    }

    fn animated(&mut self) -> Option<&mut dyn FrameRenderer> {
        match self {
            Background::Gradient(_) => None,
            Background::Particles(r) => Some(r),
            Background::Waves(r) => Some(r),
            Background::Geometric(r) => Some(r),
            Background::Neural(r) => Some(r),
            Background::Matrix(r) => Some(r),
        }
    }
}

fn paint_layers(surface: &mut dyn DrawSurface, layers: &[Paint]) {
    let rect = surface.canvas().rect();
    for paint in layers {
        surface.fill_rect(rect, paint, 1.0);
    }
}

impl FrameRenderer for Background {
    fn name(&self) -> &'static str {
        self.variant().as_str()
    }

    fn setup(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        if let Some(r) = self.animated() {
            r.setup(canvas, rng);
        }
    }

    fn draw_frame(
        &mut self,
        surface: &mut dyn DrawSurface,
        input: &FrameInput,
        rng: &mut dyn RandomSource,
    ) {
        match self.animated() {
            Some(r) => r.draw_frame(surface, input, rng),
            None => {
                surface.clear();
                self.draw_idle(surface);
            }
        }
    }

    fn draw_static(&mut self, surface: &mut dyn DrawSurface) {
        paint_layers(surface, &self.variant().static_layers());
    }

    fn draw_idle(&mut self, surface: &mut dyn DrawSurface) {
        match self {
            Background::Gradient(g) => paint_layers(surface, &g.layers()),
            _ => self.draw_static(surface),
        }
    }

    fn is_animated(&self) -> bool {
        !matches!(self, Background::Gradient(_))
    }

    fn tick_count(&self) -> u64 {
        match self {
            Background::Gradient(_) => 0,
            Background::Particles(r) => r.tick_count(),
            Background::Waves(r) => r.tick_count(),
            Background::Geometric(r) => r.tick_count(),
            Background::Neural(r) => r.tick_count(),
            Background::Matrix(r) => r.tick_count(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/background.rs"]
mod tests;

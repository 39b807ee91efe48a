use std::f64::consts::TAU;

use crate::effects::mount::{FrameInput, FrameRenderer};
use crate::effects::palette;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::math::RandomSource;
use crate::render::surface::DrawSurface;

pub const NEURAL_LAYERS: usize = 4;
pub const MIN_NODES_PER_LAYER: usize = 4;
pub const MAX_NODES_PER_LAYER: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos: Point,
    /// Pulse phase offset in `[0, 2π)`.
    pub phase: f64,
    pub layer: usize,
}

impl Node {
    pub fn radius_at(&self, t: f64) -> f64 {
        2.0 + (t * 0.03 + self.phase).sin()
    }

    pub fn alpha_at(&self, t: f64) -> f64 {
        0.3 + (t * 0.02 + self.phase).sin() * 0.2
    }

    /// Opacity of every edge leaving this node towards the next layer.
    pub fn edge_alpha_at(&self, t: f64) -> f64 {
        0.1 + (t * 0.02 + self.phase).sin() * 0.05
    }
}

/// Pulsing layered graph; edges only join adjacent layers.
#[derive(Clone, Debug, Default)]
pub struct NeuralNetwork {
    nodes: Vec<Node>,
    ticks: u64,
}

impl NeuralNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl FrameRenderer for NeuralNetwork {
    fn name(&self) -> &'static str {
        "neural"
    }

    fn setup(&mut self, canvas: Canvas, rng: &mut dyn RandomSource) {
        self.ticks = 0;
        self.nodes.clear();
        let spread = MAX_NODES_PER_LAYER - MIN_NODES_PER_LAYER + 1;
        for layer in 0..NEURAL_LAYERS {
            let n = MIN_NODES_PER_LAYER + rng.index(spread);
            for k in 0..n {
                self.nodes.push(Node {
                    pos: Point::new(
                        canvas.w() / 5.0 * (layer + 1) as f64,
                        canvas.h() / (n + 1) as f64 * (k + 1) as f64,
                    ),
                    phase: rng.range(0.0, TAU),
                    layer,
                });
            }
        }
    }

    fn draw_frame(
        &mut self,
        surface: &mut dyn DrawSurface,
        _input: &FrameInput,
        _rng: &mut dyn RandomSource,
    ) {
        surface.clear();
        let t = self.ticks as f64;

        for a in &self.nodes {
            let alpha = a.edge_alpha_at(t) as f32;
            for b in self.nodes.iter().filter(|b| b.layer == a.layer + 1) {
                surface.stroke_line(a.pos, b.pos, 0.5, palette::PRIMARY, alpha);
            }
        }
        for node in &self.nodes {
            surface.fill_circle(
                node.pos,
                node.radius_at(t),
                palette::PRIMARY,
                node.alpha_at(t) as f32,
            );
        }
        self.ticks += 1;
    }

    fn tick_count(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/neural.rs"]
mod tests;

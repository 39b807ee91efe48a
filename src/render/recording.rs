use serde::{Deserialize, Serialize};

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Point, Rect};
use crate::render::surface::{DrawSurface, Paint};

/// One captured [`DrawSurface`] call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    Clear,
    FillRect {
        rect: Rect,
        paint: Paint,
        alpha: f32,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba8,
        alpha: f32,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba8,
        alpha: f32,
    },
    FillPolygon {
        points: Vec<Point>,
        paint: Paint,
        alpha: f32,
    },
    StrokePolygon {
        points: Vec<Point>,
        width: f64,
        color: Rgba8,
        alpha: f32,
    },
    FillText {
        text: String,
        origin: Point,
        size_px: f32,
        color: Rgba8,
        alpha: f32,
    },
}

/// Surface that stores every call as a [`DrawCmd`] instead of rasterizing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            cmds: Vec::new(),
        }
    }

    /// Change the reported canvas; recorded commands are kept.
    pub fn resize(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    /// Commands recorded since the last [`RecordingSurface::take`].
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Drain the recorded commands.
    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    /// Number of commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        self.cmds.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint, alpha: f32) {
        self.cmds.push(DrawCmd::FillRect {
            rect,
            paint: paint.clone(),
            alpha,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, alpha: f32) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba8, alpha: f32) {
        self.cmds.push(DrawCmd::StrokeLine {
            from,
            to,
            width,
            color,
            alpha,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], paint: &Paint, alpha: f32) {
        self.cmds.push(DrawCmd::FillPolygon {
            points: points.to_vec(),
            paint: paint.clone(),
            alpha,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], width: f64, color: Rgba8, alpha: f32) {
        self.cmds.push(DrawCmd::StrokePolygon {
            points: points.to_vec(),
            width,
            color,
            alpha,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, size_px: f32, color: Rgba8, alpha: f32) {
        self.cmds.push(DrawCmd::FillText {
            text: text.to_owned(),
            origin,
            size_px,
            color,
            alpha,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/recording.rs"]
mod tests;

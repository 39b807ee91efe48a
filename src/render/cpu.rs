use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape;

use crate::foundation::color::{Rgba8, premul_rgba8};
use crate::foundation::core::{BezPath, Canvas, Point, Rect};
use crate::foundation::error::FxResult;
use crate::foundation::math::Fnv1a64;
use crate::render::backend::{FrameRGBA, composite_over_premul};
use crate::render::surface::{DrawSurface, Paint};
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};

const CURVE_TOLERANCE: f64 = 0.1;

/// Raster [`DrawSurface`] backed by `vello_cpu`.
///
/// Draw calls are queued on a render context and resolved by [`CpuSurface::present`], which
/// composites them over the pixels kept from earlier frames. Effects that never clear therefore
/// accumulate, as on a browser canvas.
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    scratch: vello_cpu::Pixmap,
    /// Premultiplied RGBA8 pixels that persist across frames.
    accum: Vec<u8>,
    pending: bool,
    text: Option<TextLayoutEngine>,
    layout_cache: HashMap<(String, u32), Arc<parley::Layout<TextBrushRgba8>>>,
    gradient_cache: HashMap<u64, vello_cpu::Image>,
    warned_no_font: bool,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .field("pending", &self.pending)
            .field("has_font", &self.text.is_some())
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Allocate a transparent surface. Text is only drawn when `font_bytes` are supplied.
    pub fn new(canvas: Canvas, font_bytes: Option<Vec<u8>>) -> FxResult<Self> {
        let (width, height) = canvas.validate_raster()?;
        let text = font_bytes
            .map(TextLayoutEngine::from_font_bytes)
            .transpose()?;
        Ok(Self {
            canvas,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            scratch: vello_cpu::Pixmap::new(width, height),
            accum: vec![0u8; pixel_bytes(width, height)],
            pending: false,
            text,
            layout_cache: HashMap::new(),
            gradient_cache: HashMap::new(),
            warned_no_font: false,
        })
    }

    /// Reallocate for a new canvas size, dropping all pixels and queued draws.
    pub fn resize(&mut self, canvas: Canvas) -> FxResult<()> {
        let (width, height) = canvas.validate_raster()?;
        if (width, height) != (self.width, self.height) {
            self.ctx = vello_cpu::RenderContext::new(width, height);
            self.scratch = vello_cpu::Pixmap::new(width, height);
            self.accum = vec![0u8; pixel_bytes(width, height)];
            self.gradient_cache.clear();
        } else {
            self.clear();
        }
        self.canvas = canvas;
        self.width = width;
        self.height = height;
        self.pending = false;
        Ok(())
    }

    /// `true` if text can be drawn.
    pub fn has_font(&self) -> bool {
        self.text.is_some()
    }

    /// Resolve queued draws onto the persistent pixels.
    pub fn present(&mut self) -> FxResult<()> {
        if !self.pending {
            return Ok(());
        }
        self.scratch.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.scratch);
        composite_over_premul(&mut self.accum, self.scratch.data_as_u8_slice())?;
        self.ctx.reset();
        self.pending = false;
        Ok(())
    }

    /// Premultiplied pixels as of the last [`CpuSurface::present`].
    pub fn pixels(&self) -> &[u8] {
        &self.accum
    }

    /// Snapshot the presented pixels over an optional straight-alpha background colour.
    pub fn frame(&self, clear_rgba: Option<[u8; 4]>) -> FxResult<FrameRGBA> {
        let mut out = FrameRGBA::solid(
            u32::from(self.width),
            u32::from(self.height),
            clear_rgba.unwrap_or([0, 0, 0, 0]),
        );
        out.composite_over(&self.accum)?;
        Ok(out)
    }

    fn begin_draw(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.pending = true;
    }

    fn set_solid(&mut self, color: Rgba8, alpha: f32) -> bool {
        let [r, g, b, a] = color.with_global_alpha(alpha);
        if a == 0 {
            return false;
        }
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        true
    }

    fn set_paint(&mut self, paint: &Paint, alpha: f32) -> bool {
        match paint {
            Paint::Solid(c) => self.set_solid(*c, alpha),
            Paint::VerticalGradient { .. } => {
                let img = self.gradient_paint(paint, alpha);
                self.ctx.set_paint(img);
                true
            }
        }
    }

    /// Canvas-sized image of `paint` with `alpha` folded in, cached per paint.
    fn gradient_paint(&mut self, paint: &Paint, alpha: f32) -> vello_cpu::Image {
        let key = gradient_key(paint, alpha);
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return img;
        }
        let w = u32::from(self.width);
        let h = u32::from(self.height);
        let mut bytes = vec![0u8; pixel_bytes(self.width, self.height)];
        let h1 = f64::from(h.max(1) - 1);
        for y in 0..h {
            let t = if h1 <= 0.0 { 0.0 } else { f64::from(y) / h1 };
            let c = premul_rgba8(paint.sample(t).with_global_alpha(alpha));
            let row = (y as usize) * (w as usize) * 4;
            for px in bytes[row..row + (w as usize) * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&c);
            }
        }
        let img = rgba_premul_to_image(&bytes, self.width, self.height);
        self.gradient_cache.insert(key, img.clone());
        img
    }

    fn fill_bezpath(&mut self, path: &BezPath) {
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_bezpath(&mut self, path: &BezPath, width: f64) {
        let stroke = kurbo::Stroke::new(width.max(0.0));
        let outline = kurbo::stroke(
            path.iter(),
            &stroke,
            &kurbo::StrokeOpts::default(),
            CURVE_TOLERANCE,
        );
        self.fill_bezpath(&outline);
    }

    fn layout_for(
        &mut self,
        text: &str,
        size_px: f32,
    ) -> FxResult<Option<Arc<parley::Layout<TextBrushRgba8>>>> {
        let key = (text.to_owned(), size_px.to_bits());
        if let Some(layout) = self.layout_cache.get(&key) {
            return Ok(Some(layout.clone()));
        }
        let Some(engine) = self.text.as_mut() else {
            return Ok(None);
        };
        let layout = Arc::new(engine.layout_line(text, size_px)?);
        self.layout_cache.insert(key, layout.clone());
        Ok(Some(layout))
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self) {
        self.ctx.reset();
        self.accum.fill(0);
        self.pending = false;
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint, alpha: f32) {
        self.begin_draw();
        if self.set_paint(paint, alpha) {
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                rect.x0, rect.y0, rect.x1, rect.y1,
            ));
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8, alpha: f32) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        self.begin_draw();
        if self.set_solid(color, alpha) {
            let path = kurbo::Circle::new(center, radius).to_path(CURVE_TOLERANCE);
            self.fill_bezpath(&path);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba8, alpha: f32) {
        self.begin_draw();
        if self.set_solid(color, alpha) {
            let mut path = BezPath::new();
            path.move_to(from);
            path.line_to(to);
            self.stroke_bezpath(&path, width);
        }
    }

    fn fill_polygon(&mut self, points: &[Point], paint: &Paint, alpha: f32) {
        let Some(path) = polygon_path(points) else {
            return;
        };
        self.begin_draw();
        if self.set_paint(paint, alpha) {
            self.fill_bezpath(&path);
        }
    }

    fn stroke_polygon(&mut self, points: &[Point], width: f64, color: Rgba8, alpha: f32) {
        let Some(path) = polygon_path(points) else {
            return;
        };
        self.begin_draw();
        if self.set_solid(color, alpha) {
            self.stroke_bezpath(&path, width);
        }
    }

    fn fill_text(&mut self, text: &str, origin: Point, size_px: f32, color: Rgba8, alpha: f32) {
        let layout = match self.layout_for(text, size_px) {
            Ok(Some(layout)) => layout,
            Ok(None) => {
                if !self.warned_no_font {
                    tracing::debug!("no font loaded; text draws are skipped");
                    self.warned_no_font = true;
                }
                return;
            }
            Err(e) => {
                tracing::debug!(error = %e, "text layout failed");
                return;
            }
        };
        let Some(font) = self.text.as_ref().map(|t| t.font().clone()) else {
            return;
        };

        self.begin_draw();
        if !self.set_solid(color, alpha) {
            return;
        }
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Glyph positions are relative to the layout box; shift so the baseline sits on origin.
                let dy = origin.y - f64::from(run.baseline());
                self.ctx.set_transform(vello_cpu::kurbo::Affine::translate((
                    origin.x, dy,
                )));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

fn pixel_bytes(width: u16, height: u16) -> usize {
    usize::from(width) * usize::from(height) * 4
}

fn polygon_path(points: &[Point]) -> Option<BezPath> {
    if points.len() < 3 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for p in &points[1..] {
        path.line_to(*p);
    }
    path.close_path();
    Some(path)
}

fn gradient_key(paint: &Paint, alpha: f32) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(u64::from(alpha.to_bits()));
    if let Paint::VerticalGradient { stops } = paint {
        for s in stops {
            h.write_u64(s.offset.to_bits());
            h.write_bytes(&[s.color.r, s.color.g, s.color.b, s.color.a]);
        }
    }
    h.finish()
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn rgba_premul_to_image(bytes_premul: &[u8], width: u16, height: u16) -> vello_cpu::Image {
    let pixels = bytes_premul
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, width, height, true);
    vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

use serde::Serialize;

use crate::foundation::color::Rgba8;
use crate::foundation::core::Point;
use crate::foundation::math::Fnv1a64;
use crate::render::recording::DrawCmd;
use crate::render::surface::Paint;

/// 128-bit digest of a draw-command stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Digest `cmds` bit-exactly; any change to an operand changes the fingerprint.
pub fn fingerprint(cmds: &[DrawCmd]) -> FrameFingerprint {
    let mut h = Pair::new();
    h.u64(cmds.len() as u64);
    for cmd in cmds {
        match cmd {
            DrawCmd::Clear => h.u8(0),
            DrawCmd::FillRect { rect, paint, alpha } => {
                h.u8(1);
                for v in [rect.x0, rect.y0, rect.x1, rect.y1] {
                    h.f64(v);
                }
                h.paint(paint);
                h.f32(*alpha);
            }
            DrawCmd::FillCircle {
                center,
                radius,
                color,
                alpha,
            } => {
                h.u8(2);
                h.point(*center);
                h.f64(*radius);
                h.color(*color);
                h.f32(*alpha);
            }
            DrawCmd::StrokeLine {
                from,
                to,
                width,
                color,
                alpha,
            } => {
                h.u8(3);
                h.point(*from);
                h.point(*to);
                h.f64(*width);
                h.color(*color);
                h.f32(*alpha);
            }
            DrawCmd::FillPolygon {
                points,
                paint,
                alpha,
            } => {
                h.u8(4);
                h.points(points);
                h.paint(paint);
                h.f32(*alpha);
            }
            DrawCmd::StrokePolygon {
                points,
                width,
                color,
                alpha,
            } => {
                h.u8(5);
                h.points(points);
                h.f64(*width);
                h.color(*color);
                h.f32(*alpha);
            }
            DrawCmd::FillText {
                text,
                origin,
                size_px,
                color,
                alpha,
            } => {
                h.u8(6);
                h.u64(text.len() as u64);
                h.bytes(text.as_bytes());
                h.point(*origin);
                h.f32(*size_px);
                h.color(*color);
                h.f32(*alpha);
            }
        }
    }
    h.finish()
}

/// Digest raw frame bytes.
pub fn fingerprint_bytes(bytes: &[u8]) -> FrameFingerprint {
    let mut h = Pair::new();
    h.u64(bytes.len() as u64);
    h.bytes(bytes);
    h.finish()
}

struct Pair {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl Pair {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn bytes(&mut self, v: &[u8]) {
        self.a.write_bytes(v);
        self.b.write_bytes(v);
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.u64(v.to_bits());
    }

    fn f32(&mut self, v: f32) {
        self.u64(u64::from(v.to_bits()));
    }

    fn point(&mut self, p: Point) {
        self.f64(p.x);
        self.f64(p.y);
    }

    fn points(&mut self, ps: &[Point]) {
        self.u64(ps.len() as u64);
        for p in ps {
            self.point(*p);
        }
    }

    fn color(&mut self, c: Rgba8) {
        self.bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn paint(&mut self, p: &Paint) {
        match p {
            Paint::Solid(c) => {
                self.u8(0);
                self.color(*c);
            }
            Paint::VerticalGradient { stops } => {
                self.u8(1);
                self.u64(stops.len() as u64);
                for s in stops {
                    self.f64(s.offset);
                    self.color(s.color);
                }
            }
        }
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;

//! Site colour tokens shared by the procedural effects.

use crate::foundation::color::Rgba8;

/// Neon green accent, `#00FF88`.
pub const PRIMARY: Rgba8 = Rgba8::rgb(0, 255, 136);
/// Gold accent, `#FFD700`.
pub const SECONDARY: Rgba8 = Rgba8::rgb(255, 215, 0);
/// Deep green accent, `#00DD77`.
pub const GREEN: Rgba8 = Rgba8::rgb(0, 221, 119);
/// Terminal green used by the matrix rain, `#00FF00`.
pub const TERMINAL: Rgba8 = Rgba8::rgb(0, 255, 0);
/// Near-black page background, `#0A0A0A`.
pub const INK: Rgba8 = Rgba8::rgb(10, 10, 10);

/// Cursor particle colours.
pub const CURSOR_PARTICLES: [Rgba8; 5] = [
    Rgba8::rgb(0xFF, 0x2A, 0x6D),
    Rgba8::rgb(0x05, 0xD9, 0xE8),
    Rgba8::rgb(0xA6, 0x63, 0xCC),
    Rgba8::rgb(0x00, 0xFF, 0xFF),
    Rgba8::rgb(0x00, 0xFF, 0x00),
];

/// `color` with its alpha replaced by `alpha` in `[0, 1]`.
pub fn tint(color: Rgba8, alpha: f64) -> Rgba8 {
    Rgba8::rgba_f(color.r, color.g, color.b, alpha)
}

use super::*;
use crate::render::surface::GradientStop;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas::new(w, h), None).unwrap()
}

fn px(s: &CpuSurface, x: u32, y: u32) -> [u8; 4] {
    s.frame(None).unwrap().pixel(x, y).unwrap()
}

#[test]
fn zero_sized_canvas_is_rejected() {
    assert!(CpuSurface::new(Canvas::new(0, 10), None).is_err());
}

#[test]
fn draws_appear_only_after_present() {
    let mut s = surface(16, 16);
    s.fill_rect(
        Rect::new(0.0, 0.0, 16.0, 16.0),
        &Paint::Solid(Rgba8::rgb(255, 0, 0)),
        1.0,
    );
    assert_eq!(px(&s, 8, 8), [0, 0, 0, 0]);
    s.present().unwrap();
    assert_eq!(px(&s, 8, 8), [255, 0, 0, 255]);
}

#[test]
fn clear_erases_presented_pixels() {
    let mut s = surface(8, 8);
    s.fill_circle(Point::new(4.0, 4.0), 3.0, Rgba8::rgb(0, 255, 0), 1.0);
    s.present().unwrap();
    assert_ne!(px(&s, 4, 4)[3], 0);
    s.clear();
    assert!(s.frame(None).unwrap().is_blank());
}

#[test]
fn translucent_fills_accumulate_across_presents() {
    let mut s = surface(8, 8);
    let black = Paint::Solid(Rgba8::rgb(0, 0, 0));
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), &black, 0.5);
    s.present().unwrap();
    let first = px(&s, 4, 4)[3];
    s.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), &black, 0.5);
    s.present().unwrap();
    let second = px(&s, 4, 4)[3];
    assert!(second > first, "{second} <= {first}");
}

#[test]
fn zero_alpha_draws_nothing() {
    let mut s = surface(8, 8);
    s.fill_circle(Point::new(4.0, 4.0), 3.0, Rgba8::rgb(0, 255, 0), 0.0);
    s.stroke_line(
        Point::new(0.0, 4.0),
        Point::new(8.0, 4.0),
        2.0,
        Rgba8::rgb(255, 255, 255),
        0.0,
    );
    s.present().unwrap();
    assert!(s.frame(None).unwrap().is_blank());
}

#[test]
fn stroked_lines_cover_their_path() {
    let mut s = surface(16, 16);
    s.stroke_line(
        Point::new(0.0, 8.0),
        Point::new(16.0, 8.0),
        4.0,
        Rgba8::rgb(255, 255, 255),
        1.0,
    );
    s.present().unwrap();
    assert_eq!(px(&s, 8, 8)[3], 255);
    assert_eq!(px(&s, 8, 1)[3], 0);
}

#[test]
fn vertical_gradient_varies_down_the_canvas() {
    let mut s = surface(4, 32);
    let paint = Paint::VerticalGradient {
        stops: vec![
            GradientStop::new(0.0, Rgba8::rgb(255, 0, 0)),
            GradientStop::new(1.0, Rgba8::rgb(0, 0, 255)),
        ],
    };
    s.fill_polygon(
        &[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 32.0),
            Point::new(0.0, 32.0),
        ],
        &paint,
        1.0,
    );
    s.present().unwrap();
    let top = px(&s, 2, 1);
    let bottom = px(&s, 2, 30);
    assert!(top[0] > top[2]);
    assert!(bottom[2] > bottom[0]);
}

#[test]
fn text_without_font_is_skipped() {
    let mut s = surface(32, 32);
    assert!(!s.has_font());
    s.fill_text("A", Point::new(0.0, 14.0), 14.0, Rgba8::rgb(0, 255, 0), 1.0);
    s.present().unwrap();
    assert!(s.frame(None).unwrap().is_blank());
}

#[test]
fn frame_applies_background_colour() {
    let s = surface(2, 2);
    let f = s.frame(Some([10, 10, 10, 255])).unwrap();
    assert_eq!(f.pixel(0, 0), Some([10, 10, 10, 255]));
}

#[test]
fn resize_resets_pixels() {
    let mut s = surface(8, 8);
    s.fill_rect(
        Rect::new(0.0, 0.0, 8.0, 8.0),
        &Paint::Solid(Rgba8::rgb(1, 2, 3)),
        1.0,
    );
    s.present().unwrap();
    s.resize(Canvas::new(4, 6)).unwrap();
    let f = s.frame(None).unwrap();
    assert_eq!((f.width, f.height), (4, 6));
    assert!(f.is_blank());
}

use super::*;

fn stops() -> Paint {
    Paint::VerticalGradient {
        stops: vec![
            GradientStop::new(0.0, Rgba8::rgb(0, 0, 0)),
            GradientStop::new(0.5, Rgba8::rgb(200, 100, 0)),
            GradientStop::new(1.0, Rgba8::rgb(0, 0, 200)),
        ],
    }
}

#[test]
fn solid_paint_ignores_position() {
    let p = Paint::Solid(Rgba8::rgb(1, 2, 3));
    assert_eq!(p.sample(0.0), Rgba8::rgb(1, 2, 3));
    assert_eq!(p.sample(0.9), Rgba8::rgb(1, 2, 3));
}

#[test]
fn gradient_hits_stops_exactly() {
    let p = stops();
    assert_eq!(p.sample(0.0), Rgba8::rgb(0, 0, 0));
    assert_eq!(p.sample(0.5), Rgba8::rgb(200, 100, 0));
    assert_eq!(p.sample(1.0), Rgba8::rgb(0, 0, 200));
}

#[test]
fn gradient_interpolates_between_stops() {
    let p = stops();
    assert_eq!(p.sample(0.25), Rgba8::rgb(100, 50, 0));
    assert_eq!(p.sample(0.75), Rgba8::rgb(100, 50, 100));
}

#[test]
fn gradient_clamps_outside_range() {
    let p = stops();
    assert_eq!(p.sample(-1.0), Rgba8::rgb(0, 0, 0));
    assert_eq!(p.sample(2.0), Rgba8::rgb(0, 0, 200));
}

#[test]
fn empty_gradient_is_transparent() {
    let p = Paint::VerticalGradient { stops: vec![] };
    assert_eq!(p.sample(0.5).a, 0);
}

#[test]
fn paint_json_shape() {
    let p = Paint::Solid(Rgba8::rgb(255, 0, 0));
    let v = serde_json::to_value(&p).unwrap();
    assert!(v.get("solid").is_some());
    let back: Paint = serde_json::from_value(v).unwrap();
    assert_eq!(back, p);
}

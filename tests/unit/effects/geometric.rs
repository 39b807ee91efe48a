use super::*;
use crate::foundation::math::Rng64;
use crate::render::recording::{DrawCmd, RecordingSurface};

#[test]
fn hexagon_vertices_sit_on_the_ring_radius() {
    let c = Point::new(400.0, 300.0);
    for i in 0..RING_COUNT {
        let radius = 100.0 + 50.0 * i as f64;
        for p in GeometricRings::hexagon(c, 123.0, i) {
            assert!((p.distance(c) - radius).abs() < 1e-9);
        }
    }
}

#[test]
fn first_ring_starts_unrotated() {
    let c = Point::new(0.0, 0.0);
    let pts = GeometricRings::hexagon(c, 0.0, 0);
    assert!((pts[0].x - 100.0).abs() < 1e-9);
    assert!(pts[0].y.abs() < 1e-9);
}

#[test]
fn rotation_grows_with_ticks_and_ring_index() {
    let c = Point::new(0.0, 0.0);
    let angle = |p: Point| p.y.atan2(p.x);
    let a0 = angle(GeometricRings::hexagon(c, 0.0, 1)[0]);
    assert!((a0 - 0.2 * PI).abs() < 1e-9);
    let a1 = angle(GeometricRings::hexagon(c, 100.0, 1)[0]);
    assert!((a1 - 0.3 * PI).abs() < 1e-9);
}

#[test]
fn strokes_fade_outwards() {
    let canvas = Canvas::new(800, 600);
    let mut rings = GeometricRings::new();
    let mut rng = Rng64::new(0);
    rings.setup(canvas, &mut rng);
    let mut s = RecordingSurface::new(canvas);
    let input = FrameInput {
        timestamp_ms: 0.0,
        pointer: Point::ORIGIN,
    };
    rings.draw_frame(&mut s, &input, &mut rng);
    let alphas: Vec<f32> = s
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::StrokePolygon {
                alpha,
                width,
                points,
                ..
            } => {
                assert_eq!(*width, 1.0);
                assert_eq!(points.len(), 6);
                Some(*alpha)
            }
            _ => None,
        })
        .collect();
    assert_eq!(alphas.len(), RING_COUNT);
    assert!(alphas.windows(2).all(|w| w[0] > w[1]));
    assert!((alphas[0] - 0.1).abs() < 1e-6);
}

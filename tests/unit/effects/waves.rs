use super::*;
use crate::foundation::math::Rng64;
use crate::render::recording::{DrawCmd, RecordingSurface};

#[test]
fn wave_height_formula() {
    assert_eq!(wave_y(0.0, 0.0, 0, 600.0), 300.0);
    let expected = 300.0 + 2.0_f64.sin() * 40.0 + 1.5_f64.sin() * 25.0;
    assert!((wave_y(0.0, 0.0, 1, 600.0) - expected).abs() < 1e-12);
}

#[test]
fn outline_is_sampled_every_five_pixels_and_closed_at_the_bottom() {
    let canvas = Canvas::new(100, 60);
    let pts = WaveLayers::outline(canvas, 0.0, 0);
    // start + x = 0, 5, ..., 100 + two bottom corners
    assert_eq!(pts.len(), 1 + 21 + 2);
    assert_eq!(pts[0], Point::new(0.0, 30.0));
    assert_eq!(pts[pts.len() - 2], Point::new(100.0, 60.0));
    assert_eq!(pts[pts.len() - 1], Point::new(0.0, 60.0));
    assert_eq!(pts[2].x, 5.0);
}

#[test]
fn three_layers_with_decreasing_opacity() {
    let canvas = Canvas::new(200, 100);
    let mut waves = WaveLayers::new();
    let mut rng = Rng64::new(0);
    waves.setup(canvas, &mut rng);
    let mut s = RecordingSurface::new(canvas);
    let input = FrameInput {
        timestamp_ms: 0.0,
        pointer: Point::ORIGIN,
    };
    waves.draw_frame(&mut s, &input, &mut rng);

    let alphas: Vec<f32> = s
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCmd::FillPolygon { alpha, paint, .. } => {
                assert_eq!(*paint, wave_paint());
                Some(*alpha)
            }
            _ => None,
        })
        .collect();
    assert_eq!(alphas.len(), WAVE_LAYERS);
    assert!((alphas[0] - 0.3).abs() < 1e-6);
    assert!((alphas[1] - 0.2).abs() < 1e-6);
    assert!((alphas[2] - 0.1).abs() < 1e-6);
    assert_eq!(waves.tick_count(), 1);
}

#[test]
fn successive_frames_move() {
    let canvas = Canvas::new(200, 100);
    assert_ne!(
        WaveLayers::outline(canvas, 0.0, 0),
        WaveLayers::outline(canvas, 1.0, 0)
    );
}

use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_frame_duration_is_in_milliseconds() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_ms() - 16.666_666).abs() < 1e-3);
    assert!((fps.frames_to_ms(60) - 1000.0).abs() < 1e-9);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn canvas_raster_bounds() {
    assert_eq!(Canvas::new(800, 600).validate_raster().unwrap(), (800, 600));
    assert!(Canvas::new(0, 600).validate_raster().is_err());
    assert!(Canvas::new(70_000, 10).validate_raster().is_err());
    assert_eq!(Canvas::new(800, 600).center(), Point::new(400.0, 300.0));
}

use super::*;

#[test]
fn records_calls_in_order() {
    let mut s = RecordingSurface::new(Canvas::new(10, 10));
    s.clear();
    s.fill_circle(Point::new(1.0, 2.0), 3.0, Rgba8::rgb(255, 0, 0), 0.5);
    s.stroke_line(
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        1.0,
        Rgba8::rgb(0, 255, 0),
        1.0,
    );
    assert_eq!(s.commands().len(), 3);
    assert_eq!(s.commands()[0], DrawCmd::Clear);
    assert!(matches!(s.commands()[1], DrawCmd::FillCircle { radius, .. } if radius == 3.0));
    assert_eq!(s.count(|c| matches!(c, DrawCmd::StrokeLine { .. })), 1);
}

#[test]
fn take_drains() {
    let mut s = RecordingSurface::new(Canvas::new(4, 4));
    s.clear();
    assert_eq!(s.take(), vec![DrawCmd::Clear]);
    assert!(s.commands().is_empty());
}

#[test]
fn commands_serialize_with_op_tag() {
    let cmd = DrawCmd::FillText {
        text: "A".to_owned(),
        origin: Point::new(0.0, 14.0),
        size_px: 14.0,
        color: Rgba8::rgb(0, 255, 0),
        alpha: 1.0,
    };
    let v = serde_json::to_value(&cmd).unwrap();
    assert_eq!(v["op"], "fill_text");
    assert_eq!(v["text"], "A");
}

use super::*;

fn circle(r: f64) -> DrawCmd {
    DrawCmd::FillCircle {
        center: Point::new(10.0, 10.0),
        radius: r,
        color: Rgba8::rgb(255, 42, 109),
        alpha: 1.0,
    }
}

#[test]
fn identical_streams_match() {
    let a = vec![DrawCmd::Clear, circle(2.0)];
    assert_eq!(fingerprint(&a), fingerprint(&a.clone()));
}

#[test]
fn operand_changes_are_detected() {
    let a = fingerprint(&[DrawCmd::Clear, circle(2.0)]);
    let b = fingerprint(&[DrawCmd::Clear, circle(2.000_001)]);
    assert_ne!(a, b);
}

#[test]
fn order_matters() {
    let a = fingerprint(&[DrawCmd::Clear, circle(2.0)]);
    let b = fingerprint(&[circle(2.0), DrawCmd::Clear]);
    assert_ne!(a, b);
}

#[test]
fn empty_stream_differs_from_clear() {
    assert_ne!(fingerprint(&[]), fingerprint(&[DrawCmd::Clear]));
}

#[test]
fn display_is_32_hex_digits() {
    let s = fingerprint_bytes(&[1, 2, 3]).to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}

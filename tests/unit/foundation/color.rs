use super::*;

#[test]
fn hex_parses_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#FF2A6D").unwrap(), Rgba8::rgb(0xFF, 0x2A, 0x6D));
    assert_eq!(
        Rgba8::from_hex("05d9e880").unwrap(),
        Rgba8 {
            r: 0x05,
            g: 0xD9,
            b: 0xE8,
            a: 0x80
        }
    );
    assert!(Rgba8::from_hex("#abc").is_err());
    assert!(Rgba8::from_hex("#zz0000").is_err());
}

#[test]
fn multibyte_hex_is_an_error_not_a_panic() {
    assert!(Rgba8::from_hex("aé€").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
    assert!(Rgba8::from_hex("ff00é€").is_err());
    assert!(serde_json::from_str::<Rgba8>("\"aé€\"").is_err());
}

#[test]
fn deserializes_hex_array_and_object() {
    let a: Rgba8 = serde_json::from_str("\"#00FF88\"").unwrap();
    let b: Rgba8 = serde_json::from_str("[0, 255, 136]").unwrap();
    let c: Rgba8 = serde_json::from_str(r#"{"r":0,"g":255,"b":136}"#).unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert!(serde_json::from_str::<Rgba8>("[1, 2]").is_err());
}

#[test]
fn global_alpha_folds_into_premultiplied_bytes() {
    let c = Rgba8::rgb(200, 100, 0);
    assert_eq!(c.to_premul(1.0), [200, 100, 0, 255]);
    assert_eq!(c.to_premul(0.0), [0, 0, 0, 0]);
    let half = c.to_premul(0.5);
    assert_eq!(half[3], 128);
    assert_eq!(half[0], 100);
    assert_eq!(Rgba8::rgba_f(0, 255, 136, 0.2).a, 51);
}

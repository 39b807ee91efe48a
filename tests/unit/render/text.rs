use super::*;

#[test]
fn garbage_bytes_are_rejected() {
    let err = TextLayoutEngine::from_font_bytes(vec![0u8; 64]).unwrap_err();
    assert!(matches!(err, FxError::Validation(_)));
}

#[test]
fn empty_bytes_are_rejected() {
    assert!(TextLayoutEngine::from_font_bytes(Vec::new()).is_err());
}

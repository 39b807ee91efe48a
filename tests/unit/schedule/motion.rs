use super::*;

#[test]
fn preferences_observe_the_source() {
    let src = MotionSource::new(false);
    let pref = src.preference();
    let seen = pref.generation();
    assert!(!pref.is_reduced());

    src.set_reduced(true);
    assert!(pref.is_reduced());
    assert!(pref.changed_since(seen));
}

#[test]
fn setting_the_same_value_is_not_a_change() {
    let src = MotionSource::new(true);
    let pref = src.preference();
    let seen = pref.generation();
    src.set_reduced(true);
    assert!(!pref.changed_since(seen));
}

#[test]
fn fixed_preference_is_stable() {
    let pref = MotionPreference::fixed(true);
    assert!(pref.is_reduced());
    assert_eq!(pref.generation(), 0);
}

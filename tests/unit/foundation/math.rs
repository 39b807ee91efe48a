use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"neonfx");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'n');
    b.write_bytes(b"eonfx");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    let mut c = Rng64::new(43);
    let xs: Vec<f64> = (0..8).map(|_| a.next_f64()).collect();
    let ys: Vec<f64> = (0..8).map(|_| b.next_f64()).collect();
    let zs: Vec<f64> = (0..8).map(|_| c.next_f64()).collect();
    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
}

#[test]
fn samples_stay_in_unit_interval() {
    let mut rng = Rng64::new(7);
    for _ in 0..10_000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
        let r = rng.range(-0.5, 0.5);
        assert!((-0.5..0.5).contains(&r));
        assert!(rng.index(5) < 5);
    }
}

#[test]
fn chance_tracks_probability() {
    let mut rng = Rng64::new(9);
    let hits = (0..20_000).filter(|_| rng.chance(0.1)).count();
    assert!((1_600..2_400).contains(&hits), "hits={hits}");
}

use super::*;

const SAMPLES: [f32; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

fn square(p: f32) -> f32 {
    p * p
}

fn sqrt_out(p: f32) -> f32 {
    p.sqrt()
}

#[test]
fn reverse_of_linear_is_identity() {
    for i in 0..=20 {
        let p = i as f32 / 20.0;
        assert!((reverse(p, linear) - p).abs() < 1e-6);
    }
}

#[test]
fn reverse_is_an_involution() {
    for p in SAMPLES {
        let twice = reverse(p, |q| reverse(q, square));
        assert!((twice - square(p)).abs() < 1e-6);
    }
}

#[test]
fn from_in_derives_out_exactly() {
    let set = EaseSet::from_in(ease_fn(square), None);
    for p in SAMPLES {
        assert_eq!(set.ease_in(p), square(p));
        assert_eq!(set.ease_out(p), reverse(p, square));
        assert_eq!(set.ease_in_out(p), in_out(p, |q| reverse(q, square)));
    }
}

#[test]
fn from_out_derives_in_exactly() {
    let set = EaseSet::from_out(ease_fn(sqrt_out), None);
    for p in SAMPLES {
        assert_eq!(set.ease_out(p), sqrt_out(p));
        assert_eq!(set.ease_in(p), reverse(p, sqrt_out));
        assert_eq!(set.ease_in_out(p), in_out(p, sqrt_out));
    }
}

#[test]
fn explicit_pair_derives_in_out_from_out() {
    let set = EaseSet::new(ease_fn(square), ease_fn(sqrt_out), None);
    assert_eq!(set.ease_in(0.3), square(0.3));
    assert_eq!(set.ease_out(0.3), sqrt_out(0.3));
    assert_eq!(set.ease_in_out(0.8), in_out(0.8, sqrt_out));
}

#[test]
fn in_out_override_wins() {
    let set = EaseSet::from_in(ease_fn(square), Some(ease_fn(|_| 0.25)));
    assert_eq!(set.ease_in_out(0.9), 0.25);
    assert_eq!(set.apply(EaseDir::InOut, 0.1), 0.25);
}

#[test]
fn in_out_halves_meet_at_midpoint() {
    let set = EaseSet::from_in(ease_fn(square), None);
    assert!((set.ease_in_out(0.5) - 0.5).abs() < 1e-6);
    assert!(set.ease_in_out(0.25) < 0.25);
    assert!(set.ease_in_out(0.75) > 0.75);
}

#[test]
fn derived_curves_are_pure() {
    let set = EaseSet::from_out(ease_fn(sqrt_out), None);
    let a = set.ease_in_out(0.37);
    let b = set.ease_in_out(0.37);
    assert_eq!(a, b);
}

#[test]
fn from_parts_requires_in_or_out() {
    let err = EaseSet::from_parts(None, None, Some(ease_fn(linear))).unwrap_err();
    assert!(matches!(err, SegueError::Ease(_)));

    let set = EaseSet::from_parts(None, Some(ease_fn(sqrt_out)), None).unwrap();
    assert_eq!(set.ease_in(0.5), reverse(0.5, sqrt_out));

    let set = EaseSet::from_parts(Some(ease_fn(square)), None, None).unwrap();
    assert_eq!(set.ease_out(0.5), reverse(0.5, square));
}

#[test]
fn get_selects_member() {
    let set = EaseSet::from_in(ease_fn(square), None);
    assert_eq!((set.get(EaseDir::In))(0.5), 0.25);
    assert_eq!((set.get(EaseDir::Out))(0.5), 0.75);
}

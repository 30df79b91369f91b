use super::*;
use crate::animation::ease::reverse;

const EPS: f32 = 1e-5;

fn close(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn endpoints_are_stable() {
    for kind in EaseKind::ALL {
        let set = kind.set();
        for dir in [EaseDir::In, EaseDir::Out, EaseDir::InOut] {
            let a = set.apply(dir, 0.0);
            let b = set.apply(dir, 1.0);
            assert!(close(a, 0.0, EPS), "{}-{}(0) = {a}", kind.name(), dir.name());
            assert!(close(b, 1.0, EPS), "{}-{}(1) = {b}", kind.name(), dir.name());
        }
    }
}

#[test]
fn in_out_passes_through_midpoint() {
    for kind in EaseKind::ALL {
        let v = kind.set().ease_in_out(0.5);
        assert!(close(v, 0.5, EPS), "{}-in-out(0.5) = {v}", kind.name());
    }
}

#[test]
fn polynomial_families_match_formulas() {
    assert!(close(QUAD.ease_in(0.5), 0.25, EPS));
    assert!(close(CUBIC.ease_in(0.5), 0.125, EPS));
    assert!(close(QUART.ease_in(0.5), 0.0625, EPS));
    assert!(close(QUINT.ease_in(0.5), 0.03125, EPS));
    assert!(close(QUAD.ease_out(0.5), 0.75, EPS));
}

#[test]
fn from_in_families_derive_out_exactly() {
    for (set, prim) in [
        (&*QUAD, quad_in as fn(f32) -> f32),
        (&*CUBIC, cubic_in as fn(f32) -> f32),
        (&*QUART, quart_in as fn(f32) -> f32),
        (&*QUINT, quint_in as fn(f32) -> f32),
        (&*BACK, back_in as fn(f32) -> f32),
    ] {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(set.ease_in(p), prim(p));
            assert_eq!(set.ease_out(p), reverse(p, prim));
        }
    }
}

#[test]
fn from_out_families_derive_in_exactly() {
    for (set, prim) in [
        (&*SINE, sine_out as fn(f32) -> f32),
        (&*EXPO, expo_out as fn(f32) -> f32),
        (&*CIRC, circ_out as fn(f32) -> f32),
        (&*ELASTIC, elastic_out as fn(f32) -> f32),
        (&*BOUNCE, bounce_out as fn(f32) -> f32),
    ] {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(set.ease_out(p), prim(p));
            assert_eq!(set.ease_in(p), reverse(p, prim));
        }
    }
}

#[test]
fn sine_and_circ_spot_values() {
    assert!(close(SINE.ease_out(0.5), std::f32::consts::FRAC_1_SQRT_2, EPS));
    assert!(close(CIRC.ease_out(0.5), 0.75f32.sqrt(), EPS));
    assert!(close(EXPO.ease_out(0.5), 2f32.powf(-5.0), EPS));
}

#[test]
fn back_and_elastic_overshoot() {
    assert!(BACK.ease_in(0.2) < 0.0);
    assert!(BACK.ease_out(0.8) > 1.0);
    let peak = (1..100)
        .map(|i| ELASTIC.ease_out(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn bounce_hits_every_segment() {
    let d = 2.75f32;
    // Segment 1: pure parabola from 0.
    assert!(close(BOUNCE.ease_out(0.2), 7.5625 * 0.04, EPS));
    // Segment 2: vertex at 1.5/d with floor 0.75.
    assert!(close(BOUNCE.ease_out(1.5 / d), 0.75, EPS));
    // Segment 3: vertex at 2.25/d with floor 0.9375.
    assert!(close(BOUNCE.ease_out(2.25 / d), 0.9375, EPS));
    // Segment 4: vertex at 2.625/d with floor 0.984375.
    assert!(close(BOUNCE.ease_out(2.625 / d), 0.984375, EPS));
}

#[test]
fn bounce_is_continuous_at_breakpoints() {
    let d = 2.75f32;
    for edge in [1.0 / d, 2.0 / d, 2.5 / d] {
        let below = BOUNCE.ease_out(edge - 1e-6);
        let above = BOUNCE.ease_out(edge);
        assert!(close(below, above, 1e-4), "jump at {edge}: {below} vs {above}");
    }
}

#[test]
fn linear_is_identity_everywhere() {
    for i in 0..=10 {
        let p = i as f32 / 10.0;
        assert_eq!(LINEAR.ease_in(p), p);
        assert_eq!(LINEAR.ease_out(p), p);
        assert_eq!(LINEAR.ease_in_out(p), p);
    }
}

#[test]
fn ease_names_round_trip_through_parse() {
    for kind in EaseKind::ALL.into_iter().skip(1) {
        for dir in [EaseDir::In, EaseDir::Out, EaseDir::InOut] {
            let ease = Ease::new(kind, dir);
            let parsed: Ease = ease.to_string().parse().unwrap();
            assert_eq!(parsed, ease);
        }
    }
    assert_eq!("linear".parse::<Ease>().unwrap(), Ease::LINEAR);
    assert_eq!(
        " Quad-In-Out ".parse::<Ease>().unwrap(),
        Ease::new(EaseKind::Quad, EaseDir::InOut)
    );
}

#[test]
fn unknown_names_are_rejected() {
    assert!(matches!("wobble-in".parse::<Ease>(), Err(SegueError::Ease(_))));
    assert!(matches!("quad".parse::<Ease>(), Err(SegueError::Ease(_))));
    assert!(matches!("quad-sideways".parse::<Ease>(), Err(SegueError::Ease(_))));
}

#[test]
fn ease_serializes_as_name() {
    let ease = Ease::new(EaseKind::Elastic, EaseDir::Out);
    assert_eq!(serde_json::to_string(&ease).unwrap(), "\"elastic-out\"");
    let back: Ease = serde_json::from_str("\"bounce-in-out\"").unwrap();
    assert_eq!(back, Ease::new(EaseKind::Bounce, EaseDir::InOut));
    assert!(serde_json::from_str::<Ease>("\"nope\"").is_err());
}

#[test]
fn curve_matches_set_member() {
    let ease = Ease::new(EaseKind::Cubic, EaseDir::Out);
    let f = ease.curve();
    assert_eq!(f(0.3), CUBIC.ease_out(0.3));
    assert_eq!(ease.apply(0.3), CUBIC.ease_out(0.3));
}

// Host-side tests for easing curves, tweens and delays.

use dive_core::*;
use glam::Vec3;

#[test]
fn easings_hit_their_endpoints_and_midpoint() {
    for e in [Easing::Linear, Easing::InOutQuad, Easing::InOutCubic] {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6, "{e:?}");
        assert_eq!(e.apply(-3.0), 0.0, "{e:?} clamps below");
        assert_eq!(e.apply(7.0), 1.0, "{e:?} clamps above");
    }
}

#[test]
fn in_out_easings_are_monotonic_and_slow_at_the_ends() {
    for e in [Easing::InOutQuad, Easing::InOutCubic] {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= prev, "{e:?} not monotonic at {i}");
            prev = v;
        }
        assert!(e.apply(0.1) < 0.1, "{e:?} should ease in");
        assert!(e.apply(0.9) > 0.9, "{e:?} should ease out");
    }
}

#[test]
fn tween_lands_exactly_on_target_at_duration() {
    let mut t = Tween::new(Vec3::ZERO, Vec3::new(3.0, -1.0, 2.0), 1.5, Easing::InOutCubic);
    t.advance(0.75);
    assert!(!t.is_finished());
    assert!((t.progress() - 0.5).abs() < 1e-6);
    assert!(t.value().abs_diff_eq(Vec3::new(1.5, -0.5, 1.0), 1e-5));
    let end = t.advance(10.0);
    assert!(t.is_finished());
    assert_eq!(end, Vec3::new(3.0, -1.0, 2.0));
}

#[test]
fn zero_duration_tween_is_already_finished() {
    let t = Tween::new(0.0_f32, 1.0, 0.0, Easing::Linear);
    assert!(t.is_finished());
    assert_eq!(t.value(), 1.0);
    assert_eq!(t.progress(), 1.0);
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut t = Tween::new(0.0_f32, 10.0, 1.0, Easing::Linear);
    t.advance(0.5);
    t.advance(-0.4);
    assert!((t.value() - 5.0).abs() < 1e-5);
}

#[test]
fn delay_fires_once_elapsed_and_stays_fired() {
    let mut d = Delay::new(0.8);
    assert!(!d.tick(0.5));
    assert!(!d.elapsed());
    assert!(d.tick(0.31));
    assert!(d.tick(0.01));
    assert!(Delay::new(0.0).elapsed());
}

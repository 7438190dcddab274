//! Tests for the stateless waveshaping helpers.

use monosynth_dsp::utils::{soft_clip, wave_fold, wave_shaper};

#[test]
fn soft_clip_is_odd_and_bounded() {
    for step in 0..=200 {
        let x = -10.0 + step as f32 * 0.1;
        let y = soft_clip(x);
        assert!((-1.0..=1.0).contains(&y), "soft_clip({x}) = {y}");
        assert!((soft_clip(-x) + y).abs() < 1.0e-6);
    }

    // Asymptotes after the hard clamp.
    assert_eq!(soft_clip(100.0), 1.0);
    assert_eq!(soft_clip(-100.0), -1.0);
    // Monotonic through the transfer region.
    let mut previous = -2.0;
    for step in 0..=60 {
        let y = soft_clip(-3.0 + step as f32 * 0.1);
        assert!(y >= previous);
        previous = y;
    }
}

#[test]
fn wave_fold_stays_in_range() {
    for amount in [0.0, 0.1, 0.25, 0.5, 0.75, 1.0] {
        for step in 0..=400 {
            let x = -2.0 + step as f32 * 0.01;
            let y = wave_fold(x, amount);
            assert!((-1.0..=1.0).contains(&y), "wave_fold({x}, {amount}) = {y}");
        }
    }
}

#[test]
fn wave_fold_is_periodic_in_driven_input() {
    // The fold map repeats with period 4 in the driven signal; with
    // amount 0 the drive is 1 and the period is visible directly.
    for step in 0..=100 {
        let x = -2.0 + step as f32 * 0.04;
        let a = wave_fold(x, 0.0);
        let b = wave_fold(x + 4.0, 0.0);
        assert!((a - b).abs() < 1.0e-5, "x = {x}");
    }

    // Identity inside the first segment: no drive, no folding.
    assert!((wave_fold(0.5, 0.0) - 0.5).abs() < 1.0e-6);
    assert!((wave_fold(-0.5, 0.0) + 0.5).abs() < 1.0e-6);
}

#[test]
fn wave_shaper_bounded_and_continuous_across_stages() {
    for shape in 0..=100 {
        let shape = shape as f32 / 100.0;
        for step in 0..=40 {
            let x = -2.0 + step as f32 * 0.1;
            let y = wave_shaper(x, shape);
            assert!(y.is_finite());
            assert!(y.abs() <= 2.0, "wave_shaper({x}, {shape}) = {y}");
        }
    }

    // Crossfade endpoints agree where stages meet.
    for x in [-1.0, -0.3, 0.0, 0.4, 1.0] {
        let below = wave_shaper(x, 1.0 / 3.0 - 1.0e-4);
        let above = wave_shaper(x, 1.0 / 3.0 + 1.0e-4);
        assert!((below - above).abs() < 1.0e-2);
    }
}

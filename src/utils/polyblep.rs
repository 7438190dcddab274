//! Two-sample polynomial corrections for waveform discontinuities.
//!
//! A step or slope break landing at fractional position `t` inside a
//! sample period aliases badly if rendered naively. These helpers split a
//! band-limited correction between the sample containing the
//! discontinuity and the one after it; the variable-shape and
//! variable-saw oscillators apply the plain pair at edges and resets, the
//! integrated pair at triangle corners, and the clocked noise source the
//! plain pair at each new held value.

// Based on MIT-licensed code (c) 2017 by Emilie Gillet (emilie.o.gillet@gmail.com)

/// Correction for the sample the discontinuity falls in.
#[inline]
pub fn this_blep_sample(t: f32) -> f32 {
    0.5 * t * t
}

/// Correction for the sample after the discontinuity.
#[inline]
pub fn next_blep_sample(t: f32) -> f32 {
    let t = 1.0 - t;
    -0.5 * t * t
}

/// Slope-break correction for the sample after the discontinuity.
#[inline]
pub fn next_integrated_blep_sample(t: f32) -> f32 {
    let t1 = 0.5 * t;
    let t2 = t1 * t1;
    let t4 = t2 * t2;
    0.1875 - t1 + 1.5 * t2 - t4
}

/// Slope-break correction for the sample the discontinuity falls in.
#[inline]
pub fn this_integrated_blep_sample(t: f32) -> f32 {
    next_integrated_blep_sample(1.0 - t)
}

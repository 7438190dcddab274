//! Band-limited audio oscillators and the naive modulation oscillator.

pub mod lfo_oscillator;
pub mod variable_saw_oscillator;
pub mod variable_shape_oscillator;

/// Highest normalized frequency the band-limited oscillators track.
pub const MAX_FREQUENCY: f32 = 0.25;

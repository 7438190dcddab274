//! One-pole zero-delay-feedback low-pass.

// Based on MIT-licensed code (c) 2014 by Olivier Gillet (ol.gillet@gmail.com)

#[allow(unused_imports)]
use num_traits::float::Float;

use core::f32::consts::PI;

#[derive(Debug, Default, Clone)]
pub struct OnePole {
    sample_rate: f32,
    g: f32,
    gi: f32,
    state: f32,
}

impl OnePole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.state = 0.0;
        self.set_freq(0.01 * sample_rate);
    }

    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    #[inline]
    pub fn set_freq(&mut self, freq: f32) {
        // Pre-warped coefficient; clip f to keep tan well behaved.
        let f = (freq / self.sample_rate).min(0.497);
        self.g = (PI * f).tan();
        self.gi = 1.0 / (1.0 + self.g);
    }

    /// Low-pass output; high-pass is `input - process(input)` at call sites.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let lp = (self.g * input + self.state) * self.gi;
        self.state = self.g * (input - lp) + lp;
        lp
    }
}

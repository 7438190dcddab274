//! 4-pole resonant low-pass ladder filter.
//!
//! Four cascaded one-pole sections with saturated resonance feedback from
//! the last stage, the classic transistor-ladder topology. Self-oscillates
//! as resonance approaches 1.

#[allow(unused_imports)]
use num_traits::float::Float;

use core::f32::consts::PI;

#[derive(Debug, Default, Clone)]
pub struct LadderFilter {
    sample_rate: f32,
    stage: [f32; 4],
    resonance: f32,
    g1: f32,
}

impl LadderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.stage = [0.0; 4];
        self.resonance = 0.0;
        self.set_freq(1000.0);
    }

    pub fn reset(&mut self) {
        self.stage = [0.0; 4];
    }

    #[inline]
    pub fn set_freq(&mut self, freq: f32) {
        // g = tan(pi * fc / fs) for proper frequency warping.
        let fc = freq.clamp(20.0, self.sample_rate * 0.45);
        let g = (PI * fc / self.sample_rate).tan();
        self.g1 = g / (1.0 + g);
    }

    #[inline]
    pub fn set_res(&mut self, resonance: f32) {
        self.resonance = resonance.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let feedback = self.resonance * 4.0 * self.stage[3];
        let x = (input - feedback).tanh();

        let g1 = self.g1;
        self.stage[0] += g1 * (x - self.stage[0]);
        self.stage[1] += g1 * (self.stage[0] - self.stage[1]);
        self.stage[2] += g1 * (self.stage[1] - self.stage[2]);
        self.stage[3] += g1 * (self.stage[2] - self.stage[3]);

        self.stage[3]
    }
}

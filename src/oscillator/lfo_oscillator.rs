//! Naive sine/triangle oscillator for modulation signals.
//!
//! Not band-limited; intended for sub-audio rates, though it stays clean
//! enough for the pitch-tracked modulation mode.

#[allow(unused_imports)]
use num_traits::float::Float;

use core::f32::consts::TAU;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LfoWaveform {
    #[default]
    Sine,
    Triangle,
}

#[derive(Debug, Default, Clone)]
pub struct LfoOscillator {
    sample_rate: f32,
    phase: f32,
    frequency: f32,
    waveform: LfoWaveform,
}

impl LfoOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.phase = 0.0;
        self.frequency = 0.0;
        self.waveform = LfoWaveform::Sine;
    }

    #[inline]
    pub fn set_freq(&mut self, freq: f32) {
        self.frequency = (freq / self.sample_rate).clamp(0.0, 0.5);
    }

    #[inline]
    pub fn set_waveform(&mut self, waveform: LfoWaveform) {
        self.waveform = waveform;
    }

    /// Advances the phase and returns a bipolar sample in [-1, 1].
    #[inline]
    pub fn process(&mut self) -> f32 {
        self.phase += self.frequency;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        match self.waveform {
            LfoWaveform::Sine => (self.phase * TAU).sin(),
            LfoWaveform::Triangle => {
                if self.phase < 0.5 {
                    4.0 * self.phase - 1.0
                } else {
                    3.0 - 4.0 * self.phase
                }
            }
        }
    }
}

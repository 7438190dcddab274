//! Saw with variable slope or notch, processed one sample at a time.

// Based on MIT-licensed code (c) 2016 by Emilie Gillet (emilie.o.gillet@gmail.com)

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::oscillator::MAX_FREQUENCY;
use crate::utils::polyblep::{
    next_blep_sample, next_integrated_blep_sample, this_blep_sample, this_integrated_blep_sample,
};

const NOTCH_DEPTH: f32 = 0.2;

#[derive(Debug, Default, Clone)]
pub struct VariableSawOscillator {
    sample_rate: f32,

    // Oscillator state.
    phase: f32,
    next_sample: f32,
    previous_pw: f32,
    high: bool,

    // Settings, held between control-rate updates.
    frequency: f32,
    pw: f32,
    waveshape: f32,
}

impl VariableSawOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;

        self.phase = 0.0;
        self.next_sample = 0.0;
        self.previous_pw = 0.5;
        self.high = false;

        self.frequency = 0.01;
        self.pw = 0.5;
        self.waveshape = 0.0;
    }

    #[inline]
    pub fn set_freq(&mut self, freq: f32) {
        self.frequency = (freq / self.sample_rate).min(MAX_FREQUENCY);
    }

    #[inline]
    pub fn set_pw(&mut self, pw: f32) {
        self.pw = pw.clamp(0.0, 1.0);
    }

    /// 0.0 = notched saw, 1.0 = triangle.
    #[inline]
    pub fn set_waveshape(&mut self, waveshape: f32) {
        self.waveshape = waveshape.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn process(&mut self) -> f32 {
        let frequency = self.frequency;

        let pw = if frequency >= 0.25 {
            0.5
        } else {
            self.pw.clamp(frequency * 2.0, 1.0 - 2.0 * frequency)
        };

        let triangle_amount = self.waveshape;
        let notch_amount = 1.0 - self.waveshape;
        let slope_up = 1.0 / pw;
        let slope_down = 1.0 / (1.0 - pw);

        let mut this_sample = self.next_sample;
        let mut next_sample = 0.0;

        self.phase += frequency;

        if !self.high && self.phase >= pw {
            let triangle_step = (slope_up + slope_down) * frequency * triangle_amount;
            let notch = (NOTCH_DEPTH + 1.0 - pw) * notch_amount;
            let t = (self.phase - pw) / (self.previous_pw - pw + frequency);
            this_sample += notch * this_blep_sample(t);
            next_sample += notch * next_blep_sample(t);
            this_sample -= triangle_step * this_integrated_blep_sample(t);
            next_sample -= triangle_step * next_integrated_blep_sample(t);
            self.high = true;
        } else if self.phase >= 1.0 {
            self.phase -= 1.0;
            let triangle_step = (slope_up + slope_down) * frequency * triangle_amount;
            let notch = (NOTCH_DEPTH + 1.0) * notch_amount;
            let t = self.phase / frequency;
            this_sample -= notch * this_blep_sample(t);
            next_sample -= notch * next_blep_sample(t);
            this_sample += triangle_step * this_integrated_blep_sample(t);
            next_sample += triangle_step * next_integrated_blep_sample(t);
            self.high = false;
        }

        next_sample += compute_naive_sample(
            self.phase,
            pw,
            slope_up,
            slope_down,
            triangle_amount,
            notch_amount,
        );
        self.previous_pw = pw;
        self.next_sample = next_sample;

        (2.0 * this_sample - 1.0) / (1.0 + NOTCH_DEPTH)
    }
}

#[inline]
fn compute_naive_sample(
    phase: f32,
    pw: f32,
    slope_up: f32,
    slope_down: f32,
    triangle_amount: f32,
    notch_amount: f32,
) -> f32 {
    let notch_saw = if phase < pw { phase } else { 1.0 + NOTCH_DEPTH };
    let triangle = if phase < pw {
        phase * slope_up
    } else {
        1.0 - (phase - pw) * slope_down
    };

    notch_saw * notch_amount + triangle * triangle_amount
}

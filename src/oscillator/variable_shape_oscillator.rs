//! Variable waveform oscillator
//!
//! Continuously variable waveform: triangle > saw > square. Both square and
//! triangle have variable slope / pulse-width. Additionally, the phase resets
//! can be locked to a master frequency for hard sync. Processed one sample
//! at a time; the frequency and shape settings are held between control-rate
//! updates.

// Based on MIT-licensed code (c) 2016 by Emilie Gillet (emilie.o.gillet@gmail.com)

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::oscillator::MAX_FREQUENCY;
use crate::utils::polyblep::{
    next_blep_sample, next_integrated_blep_sample, this_blep_sample, this_integrated_blep_sample,
};

#[derive(Debug, Default, Clone)]
pub struct VariableShapeOscillator {
    sample_rate: f32,

    // Oscillator state.
    master_phase: f32,
    slave_phase: f32,
    next_sample: f32,
    previous_pw: f32,
    high: bool,

    // Settings, held between control-rate updates.
    master_frequency: f32,
    slave_frequency: f32,
    pw: f32,
    waveshape: f32,
    enable_sync: bool,
}

impl VariableShapeOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;

        self.master_phase = 0.0;
        self.slave_phase = 0.0;
        self.next_sample = 0.0;
        self.previous_pw = 0.5;
        self.high = false;

        self.master_frequency = 0.0;
        self.slave_frequency = 0.01;
        self.pw = 0.5;
        self.waveshape = 0.0;
        self.enable_sync = false;
    }

    /// Master frequency in Hz. Only drives phase resets while sync is on.
    #[inline]
    pub fn set_freq(&mut self, freq: f32) {
        self.master_frequency = (freq / self.sample_rate).min(MAX_FREQUENCY);
    }

    /// Frequency in Hz of the audible (slave) oscillator.
    #[inline]
    pub fn set_sync_freq(&mut self, freq: f32) {
        self.slave_frequency = (freq / self.sample_rate).min(MAX_FREQUENCY);
    }

    #[inline]
    pub fn set_pw(&mut self, pw: f32) {
        self.pw = pw.clamp(0.0, 1.0);
    }

    /// 0.0 = triangle, 0.5 = saw, 1.0 = square.
    #[inline]
    pub fn set_waveshape(&mut self, waveshape: f32) {
        self.waveshape = waveshape.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn set_sync(&mut self, enable_sync: bool) {
        self.enable_sync = enable_sync;
    }

    #[inline]
    pub fn process(&mut self) -> f32 {
        let master_frequency = self.master_frequency;
        let slave_frequency = self.slave_frequency;
        let waveshape = self.waveshape;

        let pw = if slave_frequency >= 0.25 {
            0.5
        } else {
            self.pw
                .clamp(slave_frequency * 2.0, 1.0 - 2.0 * slave_frequency)
        };

        let square_amount = (waveshape - 0.5).max(0.0) * 2.0;
        let triangle_amount = (1.0 - waveshape * 2.0).max(0.0);
        let slope_up = 1.0 / pw;
        let slope_down = 1.0 / (1.0 - pw);

        let mut this_sample = self.next_sample;
        let mut next_sample = 0.0;

        let mut reset = false;
        let mut transition_during_reset = false;
        let mut reset_time = 0.0;

        if self.enable_sync {
            self.master_phase += master_frequency;
            if self.master_phase >= 1.0 {
                self.master_phase -= 1.0;
                reset_time = self.master_phase / master_frequency;

                let mut slave_phase_at_reset =
                    self.slave_phase + (1.0 - reset_time) * slave_frequency;
                reset = true;
                if slave_phase_at_reset >= 1.0 {
                    slave_phase_at_reset -= 1.0;
                    transition_during_reset = true;
                }
                if !self.high && slave_phase_at_reset >= pw {
                    transition_during_reset = true;
                }
                let value = compute_naive_sample(
                    slave_phase_at_reset,
                    pw,
                    slope_up,
                    slope_down,
                    triangle_amount,
                    square_amount,
                );
                this_sample -= value * this_blep_sample(reset_time);
                next_sample -= value * next_blep_sample(reset_time);
            }
        }

        self.slave_phase += slave_frequency;

        if transition_during_reset || !reset {
            loop {
                if !self.high {
                    if self.slave_phase < pw {
                        break;
                    }
                    let t = (self.slave_phase - pw) / (self.previous_pw - pw + slave_frequency);
                    let triangle_step = (slope_up + slope_down) * slave_frequency * triangle_amount;

                    this_sample += square_amount * this_blep_sample(t);
                    next_sample += square_amount * next_blep_sample(t);
                    this_sample -= triangle_step * this_integrated_blep_sample(t);
                    next_sample -= triangle_step * next_integrated_blep_sample(t);
                    self.high = true;
                }

                if self.high {
                    if self.slave_phase < 1.0 {
                        break;
                    }
                    self.slave_phase -= 1.0;
                    let t = self.slave_phase / slave_frequency;
                    let triangle_step = (slope_up + slope_down) * slave_frequency * triangle_amount;

                    this_sample -= (1.0 - triangle_amount) * this_blep_sample(t);
                    next_sample -= (1.0 - triangle_amount) * next_blep_sample(t);
                    this_sample += triangle_step * this_integrated_blep_sample(t);
                    next_sample += triangle_step * next_integrated_blep_sample(t);
                    self.high = false;
                }
            }
        }

        if self.enable_sync && reset {
            self.slave_phase = reset_time * slave_frequency;
            self.high = false;
        }

        next_sample += compute_naive_sample(
            self.slave_phase,
            pw,
            slope_up,
            slope_down,
            triangle_amount,
            square_amount,
        );
        self.previous_pw = pw;
        self.next_sample = next_sample;

        2.0 * this_sample - 1.0
    }
}

#[inline]
fn compute_naive_sample(
    phase: f32,
    pw: f32,
    slope_up: f32,
    slope_down: f32,
    triangle_amount: f32,
    square_amount: f32,
) -> f32 {
    let mut saw = phase;
    let square = if phase < pw { 0.0 } else { 1.0 };
    let triangle = if phase < pw {
        phase * slope_up
    } else {
        1.0 - (phase - pw) * slope_down
    };
    saw += (square - saw) * square_amount;
    saw += (triangle - saw) * triangle_amount;

    saw
}

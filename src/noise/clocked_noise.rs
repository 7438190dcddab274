//! Noise processed by a sample and hold running at a target frequency,
//! processed one sample at a time.

// Based on MIT-licensed code (c) 2016 by Emilie Gillet (emilie.o.gillet@gmail.com)

use crate::utils::polyblep::{next_blep_sample, this_blep_sample};
use crate::utils::random;

#[derive(Debug, Default, Clone)]
pub struct ClockedNoise {
    sample_rate: f32,

    // Generator state.
    phase: f32,
    sample: f32,
    next_sample: f32,

    // Setting, held between control-rate updates.
    frequency: f32,
}

impl ClockedNoise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.phase = 0.0;
        self.sample = 0.0;
        self.next_sample = 0.0;
        self.frequency = 0.001;
    }

    #[inline]
    pub fn set_freq(&mut self, freq: f32) {
        self.frequency = (freq / self.sample_rate).clamp(0.0, 1.0);
    }

    #[inline]
    pub fn process(&mut self) -> f32 {
        let frequency = self.frequency;

        let mut this_sample = self.next_sample;
        let mut next_sample = 0.0;

        let raw_sample = random::get_float() * 2.0 - 1.0;
        // Above a quarter of the sample rate, fade to unfiltered noise.
        let raw_amount = (4.0 * (frequency - 0.25)).clamp(0.0, 1.0);

        self.phase += frequency;

        if self.phase >= 1.0 {
            self.phase -= 1.0;
            let t = self.phase / frequency;
            let discontinuity = raw_sample - self.sample;
            this_sample += discontinuity * this_blep_sample(t);
            next_sample += discontinuity * next_blep_sample(t);
            self.sample = raw_sample;
        }

        next_sample += self.sample;
        self.next_sample = next_sample;

        this_sample + raw_amount * (raw_sample - this_sample)
    }
}

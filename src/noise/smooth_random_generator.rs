//! Random values reached by smoothstep interpolation, for slow modulations.

// Based on MIT-licensed code (c) 2016 by Emilie Gillet (emilie.o.gillet@gmail.com)

use crate::utils::random;

#[derive(Debug, Default, Clone)]
pub struct SmoothRandomGenerator {
    sample_rate: f32,

    phase: f32,
    from: f32,
    interval: f32,

    frequency: f32,
}

impl SmoothRandomGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.phase = 0.0;
        self.from = 0.0;
        self.interval = 0.0;
        self.frequency = 0.0;
    }

    #[inline]
    pub fn set_freq(&mut self, freq: f32) {
        self.frequency = (freq / self.sample_rate).clamp(0.0, 0.5);
    }

    #[inline]
    pub fn process(&mut self) -> f32 {
        self.phase += self.frequency;

        if self.phase >= 1.0 {
            self.phase -= 1.0;
            self.from += self.interval;
            self.interval = random::get_float() * 2.0 - 1.0 - self.from;
        }

        let t = self.phase * self.phase * (3.0 - 2.0 * self.phase);

        self.from + self.interval * t
    }
}

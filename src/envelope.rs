//! Gate-driven ADSR envelope generator and the panel knob to segment-time
//! mapping.
//!
//! Output is in [0, 1]. Segments approach their targets exponentially; the
//! attack aims slightly above full level so it terminates in finite time.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Attack segment time range and knob response.
pub const ATTACK_TIME_MIN: f32 = 0.002;
pub const ATTACK_TIME_MAX: f32 = 2.0;
pub const ATTACK_CURVE: f32 = 0.7;

/// Decay segment time range and knob response.
pub const DECAY_TIME_MIN: f32 = 0.003;
pub const DECAY_TIME_MAX: f32 = 1.5;
pub const DECAY_CURVE: f32 = 0.5;

/// Release segment time range and knob response.
pub const RELEASE_TIME_MIN: f32 = 0.01;
pub const RELEASE_TIME_MAX: f32 = 3.0;
pub const RELEASE_CURVE: f32 = 0.5;

const ATTACK_TARGET: f32 = 1.1;
const SILENCE_THRESHOLD: f32 = 1.0e-4;

/// Maps a [0, 1] knob onto a segment time in seconds:
/// `t_min * (t_max / t_min) ^ (knob ^ curve)`.
///
/// Strictly increasing in the knob, `t_min` exactly at 0 and `t_max`
/// exactly at 1.
#[inline]
pub fn map_knob_to_time(knob: f32, t_min: f32, t_max: f32, curve: f32) -> f32 {
    let shaped = knob.clamp(0.0, 1.0).powf(curve);
    t_min * (t_max / t_min).powf(shaped)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    #[default]
    Idle,
    Attack,
    Decay,
    Release,
}

#[derive(Debug, Default, Clone)]
pub struct Adsr {
    sample_rate: f32,
    segment: Segment,
    level: f32,
    sustain: f32,
    attack_coef: f32,
    decay_coef: f32,
    release_coef: f32,
}

impl Adsr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.segment = Segment::Idle;
        self.level = 0.0;
        self.sustain = 1.0;
        self.set_time(Segment::Attack, ATTACK_TIME_MIN);
        self.set_time(Segment::Decay, DECAY_TIME_MIN);
        self.set_time(Segment::Release, RELEASE_TIME_MIN);
    }

    /// Time in seconds for the attack, decay or release segment.
    pub fn set_time(&mut self, segment: Segment, time: f32) {
        let coef = time_to_coefficient(time, self.sample_rate);
        match segment {
            Segment::Attack => self.attack_coef = coef,
            Segment::Decay => self.decay_coef = coef,
            Segment::Release => self.release_coef = coef,
            Segment::Idle => {}
        }
    }

    pub fn set_sustain_level(&mut self, sustain: f32) {
        self.sustain = sustain.clamp(0.0, 1.0);
    }

    /// Restart the attack from the current level. `hard` snaps to zero
    /// first, at the cost of a click.
    pub fn retrigger(&mut self, hard: bool) {
        self.segment = Segment::Attack;
        if hard {
            self.level = 0.0;
        }
    }

    #[inline]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Advances the envelope by one sample.
    #[inline]
    pub fn process(&mut self, gate: bool) -> f32 {
        if gate {
            if self.segment == Segment::Idle || self.segment == Segment::Release {
                self.segment = Segment::Attack;
            }
        } else if self.segment != Segment::Idle {
            self.segment = Segment::Release;
        }

        match self.segment {
            Segment::Idle => {}
            Segment::Attack => {
                self.level += self.attack_coef * (ATTACK_TARGET - self.level);
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.segment = Segment::Decay;
                }
            }
            Segment::Decay => {
                self.level += self.decay_coef * (self.sustain - self.level);
            }
            Segment::Release => {
                self.level += self.release_coef * (0.0 - self.level);
                if self.level < SILENCE_THRESHOLD {
                    self.level = 0.0;
                    self.segment = Segment::Idle;
                }
            }
        }

        self.level.clamp(0.0, 1.0)
    }
}

#[inline]
fn time_to_coefficient(time: f32, sample_rate: f32) -> f32 {
    let samples = (time * sample_rate).max(1.0);
    1.0 - (-1.0 / samples).exp()
}

//! Multi-mode modulation source.
//!
//! One modulation sample per audio tick in one of six modes. The rate knob
//! changes meaning with the mode:
//!
//! | Mode            | Rate law                                  |
//! |-----------------|-------------------------------------------|
//! | Sine / Triangle | 0.01 Hz .. 100 Hz, exponential            |
//! | PitchTrack      | ratio 0.5 .. 4 of the note, exponential   |
//! | Stepped/Smooth  | 1 Hz .. 50 Hz, exponential over knob²     |
//! | ColoredNoise    | spectral tilt, (2·knob − 1)³              |
//!
//! Every generator advances each audio sample regardless of the active
//! mode, so switching modes picks up a live signal instead of a frozen or
//! reset one.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::filter::OnePole;
use crate::noise::clocked_noise::ClockedNoise;
use crate::noise::smooth_random_generator::SmoothRandomGenerator;
use crate::noise::white_noise::WhiteNoise;
use crate::oscillator::lfo_oscillator::{LfoOscillator, LfoWaveform};
use crate::params::{ControlFrame, LfoMode};

const F_MIN: f32 = 0.01;
const F_MAX: f32 = 100.0;
const RATIO_MIN: f32 = 0.5;
const RATIO_MAX: f32 = 4.0;
const RND_F_MIN: f32 = 1.0;
const RND_F_MAX: f32 = 50.0;
const MAX_TRACK_FREQ: f32 = 20000.0;
const COLOR_FREQ: f32 = 200.0;

#[derive(Debug, Default, Clone)]
pub struct Lfo {
    mode: LfoMode,
    /// Hz, frequency ratio or spectral tilt depending on the mode.
    rate: f32,

    osc: LfoOscillator,
    stepped_rnd: ClockedNoise,
    smooth_rnd: SmoothRandomGenerator,

    white_noise: WhiteNoise,
    noise_color: OnePole,
    noise_color_2: OnePole,
    gain_low: f32,
    gain_high: f32,
}

impl Lfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.osc.init(sample_rate);
        self.stepped_rnd.init(sample_rate);
        self.smooth_rnd.init(sample_rate);
        self.noise_color.init(sample_rate);
        self.noise_color.set_freq(COLOR_FREQ);
        self.noise_color_2.init(sample_rate);
        self.noise_color_2.set_freq(COLOR_FREQ);
        self.gain_low = 1.0;
        self.gain_high = 1.0;
    }

    /// One modulation sample in [-1, 1]. `note_freq` only matters in
    /// pitch-tracking mode.
    #[inline]
    pub fn process(&mut self, note_freq: f32) -> f32 {
        if self.mode == LfoMode::PitchTrack {
            let freq = (note_freq * self.rate).min(MAX_TRACK_FREQ);
            self.osc.set_freq(freq);
        }
        let periodic = self.osc.process();
        let stepped = self.stepped_rnd.process();
        let smooth = self.smooth_rnd.process();
        let noise = self.process_colored_noise();

        match self.mode {
            LfoMode::Sine | LfoMode::Triangle | LfoMode::PitchTrack => periodic,
            LfoMode::SteppedRandom => stepped,
            LfoMode::SmoothRandom => smooth,
            LfoMode::ColoredNoise => noise,
        }
    }

    #[inline]
    fn process_colored_noise(&mut self) -> f32 {
        let x = self.white_noise.process();
        let lp = self.noise_color.process(x);
        let lp2 = self.noise_color_2.process(lp);
        let hp = x - lp;
        0.5 * (self.gain_low * lp2 + self.gain_high * hp)
    }

    pub fn update_params(&mut self, frame: &ControlFrame) {
        let knob = frame.lfo_rate.clamp(0.0, 1.0);
        self.mode = frame.lfo_mode;

        match self.mode {
            LfoMode::Sine => {
                self.osc.set_waveform(LfoWaveform::Sine);
                self.rate = F_MIN * (F_MAX / F_MIN).powf(knob);
                self.osc.set_freq(self.rate);
            }
            LfoMode::Triangle => {
                self.osc.set_waveform(LfoWaveform::Triangle);
                self.rate = F_MIN * (F_MAX / F_MIN).powf(knob);
                self.osc.set_freq(self.rate);
            }
            LfoMode::PitchTrack => {
                self.osc.set_waveform(LfoWaveform::Sine);
                self.rate = RATIO_MIN * (RATIO_MAX / RATIO_MIN).powf(knob);
            }
            LfoMode::SteppedRandom => {
                self.rate = RND_F_MIN * (RND_F_MAX / RND_F_MIN).powf(knob * knob);
                self.stepped_rnd.set_freq(self.rate);
            }
            LfoMode::SmoothRandom => {
                self.rate = RND_F_MIN * (RND_F_MAX / RND_F_MIN).powf(knob * knob);
                self.smooth_rnd.set_freq(self.rate);
            }
            LfoMode::ColoredNoise => {
                let tilt = 2.0 * knob - 1.0;
                self.rate = tilt * tilt * tilt;
                self.gain_low = (1.0 - self.rate).max(0.0);
                self.gain_high = (1.0 + self.rate * 0.5).max(0.0);
            }
        }
    }
}

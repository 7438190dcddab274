//! Timbre generation: one audio sample per tick from a target frequency
//! plus envelope/LFO modulation signals.
//!
//! Three mutually exclusive families behind one bipolar character knob and
//! two shared modulation depths:
//!
//! - *Square*: pulse width modulation, from narrow pulse to full square.
//! - *Saw*: an analog-style morph; rightward character sweeps a four-stage
//!   waveshaper, away from center the wave narrows and folds.
//! - *Triangle*: the digital pair; rightward character hard-syncs a slave
//!   oscillator at a swept ratio, leftward wavefolds the triangle itself.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::oscillator::variable_saw_oscillator::VariableSawOscillator;
use crate::oscillator::variable_shape_oscillator::VariableShapeOscillator;
use crate::params::{ControlFrame, OscMode};
use crate::utils::{wave_fold, wave_shaper};

const MAX_MOD_OCTAVES: f32 = 5.0;
const MAX_SYNC_SEMITONES: f32 = 38.0;

#[derive(Debug, Default, Clone)]
pub struct OscEngine {
    osc: VariableShapeOscillator,
    saw_osc: VariableSawOscillator,

    mode: OscMode,
    character: f32,
    env_depth: f32,
    lfo_depth: f32,

    // Mode-specific values derived once per control tick.
    pw_amt: f32,
    sync_amt: f32,
    fold_amt: f32,
}

impl OscEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.osc.init(sample_rate);
        self.saw_osc.init(sample_rate);
    }

    /// One audio sample. `env` in [0, 1], `lfo` in [-1, 1].
    #[inline]
    pub fn process(&mut self, frequency: f32, env: f32, lfo: f32) -> f32 {
        match self.mode {
            OscMode::Square => self.process_square(frequency, env, lfo),
            OscMode::Saw => self.process_morph_pair(frequency, env, lfo),
            OscMode::Triangle => self.process_digital_pair(frequency, env, lfo),
        }
    }

    fn process_square(&mut self, freq: f32, env: f32, lfo: f32) -> f32 {
        self.osc.set_sync_freq(freq);
        let pw = self.pw_amt + env * self.env_depth + lfo * self.lfo_depth;
        self.osc.set_pw(pw.clamp(0.0, 1.0));
        self.osc.process()
    }

    fn process_morph_pair(&mut self, freq: f32, env: f32, lfo: f32) -> f32 {
        let x = self.character + env * self.env_depth + lfo * self.lfo_depth;

        let half = x.clamp(0.0, 1.0);
        let full = x.abs().min(1.0);

        let harmonics = 0.5 + 0.5 * half;
        let timbre = full;
        let morph = 1.0 - 0.5 * full;

        self.saw_osc.set_freq(freq);
        self.saw_osc.set_pw(morph);
        let s = self.saw_osc.process();

        wave_fold(wave_shaper(s, harmonics), timbre)
    }

    fn process_digital_pair(&mut self, freq: f32, env: f32, lfo: f32) -> f32 {
        if self.character > 0.0 {
            self.osc.set_freq(freq);
            let base_oct = self.sync_amt * MAX_MOD_OCTAVES;
            let env_oct = env * self.env_depth * MAX_SYNC_SEMITONES / 12.0;
            let lfo_oct = lfo * self.lfo_depth * MAX_MOD_OCTAVES;
            let total_oct = (base_oct + env_oct + lfo_oct).clamp(0.0, MAX_MOD_OCTAVES);
            self.osc.set_sync_freq(freq * total_oct.exp2());
            self.osc.process()
        } else if self.character < 0.0 {
            self.osc.set_freq(freq);
            self.osc.set_sync_freq(freq);
            let amount = self.fold_amt + env * self.env_depth + lfo * self.lfo_depth;
            let sample = self.osc.process();
            wave_fold(sample, amount.clamp(0.0, 1.0))
        } else {
            // Degenerate self-sync: a plain oscillator.
            self.osc.set_freq(freq);
            self.osc.set_sync_freq(freq);
            self.osc.process()
        }
    }

    /// Control-rate update; derived values stay constant over the
    /// following audio block.
    pub fn update_params(&mut self, frame: &ControlFrame) {
        self.character = frame.osc_character.clamp(-1.0, 1.0);
        self.env_depth = frame.env_osc_depth.clamp(-1.0, 1.0);
        self.lfo_depth = frame.lfo_osc_depth.clamp(0.0, 1.0);
        self.mode = frame.osc_mode;

        match self.mode {
            OscMode::Square => {
                self.pw_amt = (self.character + 1.0) * 0.5;
                self.osc.set_sync(false);
                self.osc.set_waveshape(1.0);
            }
            OscMode::Saw => {
                self.saw_osc.set_waveshape(1.0);
            }
            OscMode::Triangle => {
                self.osc.set_waveshape(0.0);
                self.osc.set_sync(true);
                self.osc.set_pw(0.5);
                if self.character > 0.0 {
                    self.sync_amt = self.character;
                } else if self.character < 0.0 {
                    self.fold_amt = -self.character;
                } else {
                    self.sync_amt = 0.0;
                    self.fold_amt = 0.0;
                }
            }
        }
    }
}

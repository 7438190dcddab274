//! The single synthesis voice: envelope, LFO, oscillator, filter and
//! output stage, advanced one sample at a time.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::envelope::{
    self, Adsr, Segment, ATTACK_CURVE, ATTACK_TIME_MAX, ATTACK_TIME_MIN, DECAY_CURVE,
    DECAY_TIME_MAX, DECAY_TIME_MIN, RELEASE_CURVE, RELEASE_TIME_MAX, RELEASE_TIME_MIN,
};
use crate::filter::LadderFilter;
use crate::lfo::Lfo;
use crate::osc_engine::OscEngine;
use crate::params::{AmpMode, ControlFrame};
use crate::utils::{midi_to_frequency, soft_clip};

pub const CUTOFF_MIN: f32 = 20.0;
pub const CUTOFF_MAX: f32 = 18000.0;
pub const MAX_DRIVE: f32 = 3.0;

const MAX_CUTOFF_MOD_OCTAVES: f32 = 5.0;

/// Base cutoff scaled by envelope and LFO in octave space, ±5 octaves per
/// source, clamped to the filter's usable range.
#[inline]
pub fn modulated_cutoff(base: f32, env: f32, lfo: f32, env_depth: f32, lfo_depth: f32) -> f32 {
    let env_oct = env * env_depth * MAX_CUTOFF_MOD_OCTAVES;
    let lfo_oct = lfo * lfo_depth * MAX_CUTOFF_MOD_OCTAVES;
    (base * (env_oct + lfo_oct).exp2()).clamp(CUTOFF_MIN, CUTOFF_MAX)
}

/// Input drive compensating the resonance's passband loss, capped at 3.
#[inline]
pub fn filter_drive(resonance: f32) -> f32 {
    (1.0 + resonance * resonance * 4.0).min(MAX_DRIVE)
}

#[derive(Debug, Default, Clone)]
pub struct Voice {
    osc: OscEngine,
    flt: LadderFilter,
    lfo: Lfo,

    env_amp: Adsr,
    /// Second envelope for the release-only amplitude mode; only its
    /// release segment is ever reconfigured.
    env_rel: Adsr,

    current_freq: f32,
    gate: bool,

    base_cutoff: f32,
    flt_drive: f32,
    env_cutoff_depth: f32,
    lfo_cutoff_depth: f32,
    amp_mode: AmpMode,
}

impl Voice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, sample_rate: f32) {
        self.osc.init(sample_rate);
        self.flt.init(sample_rate);
        self.lfo.init(sample_rate);
        self.env_amp.init(sample_rate);
        self.env_rel.init(sample_rate);

        self.current_freq = 0.0;
        self.gate = false;
        self.base_cutoff = 1000.0;
        self.flt_drive = 1.0;
        self.env_cutoff_depth = 0.0;
        self.lfo_cutoff_depth = 0.0;
        self.amp_mode = AmpMode::Adsr;
    }

    /// Note off may arrive as note on with velocity 0. A real note on
    /// always restarts the attack, even with the gate already open.
    pub fn note_on(&mut self, _channel: u8, note: u8, velocity: u8) {
        if velocity == 0 {
            self.gate = false;
        } else {
            self.current_freq = midi_to_frequency(note);
            self.gate = true;
            self.env_amp.retrigger(false);
            self.env_rel.retrigger(false);
        }
    }

    pub fn note_off(&mut self, _channel: u8, _note: u8, _velocity: u8) {
        self.gate = false;
    }

    pub fn gate(&self) -> bool {
        self.gate
    }

    /// True once the release tail has decayed to silence. Never true in
    /// drone mode, which sounds with the gate closed.
    pub fn is_idle(&self) -> bool {
        !self.gate
            && self.amp_mode != AmpMode::Drone
            && self.env_amp.segment() == Segment::Idle
            && self.env_rel.segment() == Segment::Idle
    }

    /// Renders one block; the same sample goes to both channels.
    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let env = self.env_amp.process(self.gate);
            let env_rel = self.env_rel.process(self.gate);
            let lfo = self.lfo.process(self.current_freq);

            let cutoff = modulated_cutoff(
                self.base_cutoff,
                env,
                lfo,
                self.env_cutoff_depth,
                self.lfo_cutoff_depth,
            );
            self.flt.set_freq(cutoff);

            let sig = self.osc.process(self.current_freq, env, lfo);
            let filt = self.flt.process(sig * self.flt_drive);

            let amp = self.compute_amp(env, env_rel);

            let s = soft_clip(filt * amp);
            *l = s;
            *r = s;
        }
    }

    #[inline]
    fn compute_amp(&self, env: f32, env_rel: f32) -> f32 {
        match self.amp_mode {
            AmpMode::Adsr => env,
            AmpMode::Drone => 1.0,
            AmpMode::Release => env_rel,
        }
    }

    /// Control-rate update from the current snapshot; every derived value
    /// is overwritten wholesale.
    pub fn update_params(&mut self, frame: &ControlFrame) {
        self.osc.update_params(frame);

        self.base_cutoff = frame.cutoff.clamp(CUTOFF_MIN, CUTOFF_MAX);
        let reso = frame.resonance.clamp(0.0, 0.93);
        self.flt.set_res(reso);
        self.flt_drive = filter_drive(reso);
        self.env_cutoff_depth = frame.env_cutoff_depth.clamp(-1.0, 1.0);
        self.lfo_cutoff_depth = frame.lfo_cutoff_depth.clamp(0.0, 1.0);

        self.env_amp.set_sustain_level(frame.sustain);
        let attack_s =
            envelope::map_knob_to_time(frame.attack, ATTACK_TIME_MIN, ATTACK_TIME_MAX, ATTACK_CURVE);
        let decay_s =
            envelope::map_knob_to_time(frame.decay, DECAY_TIME_MIN, DECAY_TIME_MAX, DECAY_CURVE);
        let release_s = envelope::map_knob_to_time(
            frame.release,
            RELEASE_TIME_MIN,
            RELEASE_TIME_MAX,
            RELEASE_CURVE,
        );
        self.env_amp.set_time(Segment::Attack, attack_s);
        self.env_amp.set_time(Segment::Decay, decay_s);
        self.env_amp.set_time(Segment::Release, release_s);
        self.env_rel.set_time(Segment::Release, release_s);

        self.amp_mode = frame.amp_mode;

        self.lfo.update_params(frame);
    }
}

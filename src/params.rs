//! Control-rate parameter snapshot and the discrete mode selectors.
//!
//! The control surface collaborator fills one [`ControlFrame`] per control
//! tick; the frame is then passed unchanged down the
//! `VoiceManager -> Voice -> {OscEngine, Lfo}` chain and every derived
//! value is recomputed wholesale from it. Pot conditioning (deadbands,
//! response squaring) is expected to happen before the frame is built;
//! the helpers for it live in [`crate::utils`].

/// Oscillator timbre family, named after the panel switch positions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OscMode {
    /// Digital pair: hard sync upward, wavefold downward of center.
    #[default]
    Triangle,
    /// Analog pair: continuous waveshape / fold / width morph.
    Saw,
    /// Pulse with modulated width.
    Square,
}

/// Amplitude stage behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AmpMode {
    #[default]
    Adsr,
    /// Full level while the gate is open, release envelope after.
    Release,
    /// Full level regardless of the gate.
    Drone,
}

/// Modulation source behavior. The rate knob's unit and response depend
/// on the mode; see [`crate::lfo`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LfoMode {
    Sine,
    Triangle,
    /// Sine at a ratio of the playing note's frequency.
    PitchTrack,
    /// Sample-and-hold random.
    SteppedRandom,
    /// Interpolated random.
    #[default]
    SmoothRandom,
    /// White noise tilted dark/bright by the rate knob.
    ColoredNoise,
}

impl LfoMode {
    /// Decodes the three panel switches. `signal` selects the periodic
    /// family, `shape_a`/`shape_b` pick within it. With nothing pressed
    /// the mode falls back to smoothed random.
    pub fn from_switches(signal: bool, shape_a: bool, shape_b: bool) -> Self {
        if signal && shape_a {
            Self::Sine
        } else if signal && shape_b {
            Self::PitchTrack
        } else if signal {
            Self::Triangle
        } else if shape_a {
            Self::SteppedRandom
        } else if shape_b {
            Self::ColoredNoise
        } else {
            Self::SmoothRandom
        }
    }
}

/// One immutable snapshot of every control the synthesis core consumes.
#[derive(Debug, Clone)]
pub struct ControlFrame {
    /// Oscillator character, bipolar [-1, 1]; meaning depends on
    /// `osc_mode`.
    pub osc_character: f32,
    /// Envelope to oscillator depth, bipolar [-1, 1].
    pub env_osc_depth: f32,
    /// LFO to oscillator depth, unipolar [0, 1].
    pub lfo_osc_depth: f32,

    /// Filter base cutoff in Hz, [20, 18000].
    pub cutoff: f32,
    /// Filter resonance, [0, 0.93].
    pub resonance: f32,
    /// Envelope to cutoff depth, bipolar [-1, 1].
    pub env_cutoff_depth: f32,
    /// LFO to cutoff depth, unipolar [0, 1].
    pub lfo_cutoff_depth: f32,

    /// ADSR knobs, [0, 1] each.
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,

    /// LFO rate knob, [0, 1]; unit and law depend on `lfo_mode`.
    pub lfo_rate: f32,

    pub osc_mode: OscMode,
    pub amp_mode: AmpMode,
    pub lfo_mode: LfoMode,
}

impl Default for ControlFrame {
    fn default() -> Self {
        Self {
            osc_character: 0.0,
            env_osc_depth: 0.0,
            lfo_osc_depth: 0.0,
            cutoff: 1000.0,
            resonance: 0.0,
            env_cutoff_depth: 0.0,
            lfo_cutoff_depth: 0.0,
            attack: 0.0,
            decay: 0.0,
            sustain: 1.0,
            release: 0.0,
            lfo_rate: 0.5,
            osc_mode: OscMode::default(),
            amp_mode: AmpMode::default(),
            lfo_mode: LfoMode::default(),
        }
    }
}

//! Tests for the oscillator primitives and the timbre engine.


use monosynth_dsp::osc_engine::OscEngine;
use monosynth_dsp::oscillator::variable_saw_oscillator::VariableSawOscillator;
use monosynth_dsp::oscillator::variable_shape_oscillator::VariableShapeOscillator;
use monosynth_dsp::params::{ControlFrame, OscMode};

use wav_writer::SAMPLE_RATE;

#[test]
fn variable_shape_sweep() {
    let mut osc = VariableShapeOscillator::new();
    let mut wav_data = Vec::new();
    osc.init(SAMPLE_RATE);
    osc.set_sync(false);
    osc.set_sync_freq(110.0);

    let samples = SAMPLE_RATE as usize;
    for n in 0..samples {
        let sweep = n as f32 / samples as f32;
        osc.set_waveshape(sweep);
        osc.set_pw(0.25 + 0.5 * sweep);
        let s = osc.process();
        assert!(s.is_finite());
        assert!(s.abs() < 2.0, "sample {n} out of range: {s}");
        wav_data.push(s);
    }

    wav_writer::write("oscillators/variable_shape_sweep.wav", &wav_data).ok();
}

#[test]
fn variable_shape_hard_sync() {
    let mut osc = VariableShapeOscillator::new();
    let mut wav_data = Vec::new();
    osc.init(SAMPLE_RATE);
    osc.set_sync(true);
    osc.set_waveshape(0.0);
    osc.set_pw(0.5);
    osc.set_freq(110.0);

    let samples = SAMPLE_RATE as usize;
    for n in 0..samples {
        let ratio = 1.0 + 4.0 * (n as f32 / samples as f32);
        osc.set_sync_freq(110.0 * ratio);
        let s = osc.process();
        assert!(s.is_finite());
        assert!(s.abs() < 2.0);
        wav_data.push(s);
    }

    wav_writer::write("oscillators/variable_shape_hard_sync.wav", &wav_data).ok();
}

#[test]
fn variable_saw_sweep() {
    let mut osc = VariableSawOscillator::new();
    let mut wav_data = Vec::new();
    osc.init(SAMPLE_RATE);
    osc.set_freq(110.0);

    let samples = SAMPLE_RATE as usize;
    for n in 0..samples {
        let sweep = n as f32 / samples as f32;
        osc.set_waveshape(sweep);
        osc.set_pw(0.5 + 0.45 * sweep);
        let s = osc.process();
        assert!(s.is_finite());
        assert!(s.abs() < 2.0);
        wav_data.push(s);
    }

    wav_writer::write("oscillators/variable_saw_sweep.wav", &wav_data).ok();
}

fn render_engine_sweep(mode: OscMode, name: &str) {
    let mut engine = OscEngine::new();
    engine.init(SAMPLE_RATE);
    let mut wav_data = Vec::new();

    let mut frame = ControlFrame {
        osc_mode: mode,
        env_osc_depth: 0.5,
        lfo_osc_depth: 0.5,
        ..Default::default()
    };

    // Half a second per character position across the knob's travel.
    for character in [-1.0, -0.5, 0.0, 0.5, 1.0] {
        frame.osc_character = character;
        engine.update_params(&frame);

        for n in 0..(SAMPLE_RATE as usize / 2) {
            let phase = n as f32 / SAMPLE_RATE;
            let env = (1.0 - phase * 2.0).max(0.0);
            let lfo = (phase * 6.0).sin();
            let s = engine.process(110.0, env, lfo);
            assert!(s.is_finite());
            assert!(s.abs() <= 2.0, "{name} character {character}: {s}");
            wav_data.push(s);
        }
    }

    wav_writer::write(&format!("osc_engine/{name}.wav"), &wav_data).ok();
}

#[test]
fn engine_square_mode() {
    render_engine_sweep(OscMode::Square, "square");
}

#[test]
fn engine_saw_morph_mode() {
    render_engine_sweep(OscMode::Saw, "saw_morph");
}

#[test]
fn engine_digital_pair_mode() {
    render_engine_sweep(OscMode::Triangle, "digital_pair");
}

#[test]
fn saw_morph_output_is_folded_into_range() {
    // The morph pair ends in the wavefolder, so its output is hard-bounded.
    let mut engine = OscEngine::new();
    engine.init(SAMPLE_RATE);
    let frame = ControlFrame {
        osc_mode: OscMode::Saw,
        osc_character: 1.0,
        env_osc_depth: 1.0,
        lfo_osc_depth: 1.0,
        ..Default::default()
    };
    engine.update_params(&frame);

    for n in 0..SAMPLE_RATE as usize {
        let lfo = ((n as f32) * 0.001).sin();
        let s = engine.process(220.0, 1.0, lfo);
        assert!((-1.0..=1.0).contains(&s));
    }
}

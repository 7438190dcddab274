//! Offline render of a short phrase to a WAV file.
//!
//! Run with `cargo run --example render`. Writes `out/demo.wav`.

use hound::{SampleFormat, WavSpec, WavWriter};
use log::info;

use monosynth_dsp::params::{AmpMode, ControlFrame, LfoMode, OscMode};
use monosynth_dsp::voice_manager::VoiceManager;

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZE: usize = 24;

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let mut synth = VoiceManager::new();
    synth.init(SAMPLE_RATE);

    let frame = ControlFrame {
        osc_character: 0.4,
        env_osc_depth: 0.2,
        cutoff: 800.0,
        resonance: 0.6,
        env_cutoff_depth: 0.7,
        attack: 0.1,
        decay: 0.5,
        sustain: 0.4,
        release: 0.4,
        lfo_rate: 0.6,
        lfo_osc_depth: 0.0,
        lfo_cutoff_depth: 0.2,
        osc_mode: OscMode::Saw,
        amp_mode: AmpMode::Adsr,
        lfo_mode: LfoMode::Triangle,
    };
    synth.update_params(&frame);

    // (time in seconds, note, velocity); velocity 0 releases.
    let events = [
        (0.0, 36, 100),
        (0.5, 48, 100),
        (0.9, 48, 0),
        (1.0, 43, 100),
        (1.4, 43, 0),
        (1.5, 36, 0),
        (1.6, 41, 100),
        (2.2, 41, 0),
    ];

    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    std::fs::create_dir_all("out").ok();
    let mut writer = WavWriter::create("out/demo.wav", spec).unwrap();

    let mut left = [0.0f32; BLOCK_SIZE];
    let mut right = [0.0f32; BLOCK_SIZE];
    let total_blocks = (4.0 * SAMPLE_RATE / BLOCK_SIZE as f32) as usize;
    let mut next_event = 0;

    for block in 0..total_blocks {
        let now = block as f32 * BLOCK_SIZE as f32 / SAMPLE_RATE;
        while next_event < events.len() && events[next_event].0 <= now {
            let (_, note, velocity) = events[next_event];
            info!("t={now:.2}s note {note} velocity {velocity}");
            synth.note_on(0, note, velocity);
            next_event += 1;
        }

        synth.process_block(&mut left, &mut right);
        for (l, r) in left.iter().zip(right.iter()) {
            writer.write_sample(*l).unwrap();
            writer.write_sample(*r).unwrap();
        }
    }

    writer.finalize().unwrap();
    info!("wrote out/demo.wav");
}

#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

pub mod envelope;
pub mod filter;
pub mod lfo;
pub mod noise;
pub mod osc_engine;
pub mod oscillator;
pub mod params;
pub mod utils;
pub mod voice;
pub mod voice_manager;

//! Filters: the resonant ladder low-pass and a one-pole building block.

pub mod ladder;
pub mod one_pole;

pub use ladder::LadderFilter;
pub use one_pole::OnePole;

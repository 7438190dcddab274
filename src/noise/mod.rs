//! Random signal generators.

pub mod clocked_noise;
pub mod smooth_random_generator;
pub mod white_noise;

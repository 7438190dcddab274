//! Spectrally flat noise source.

use crate::utils::random;

#[derive(Debug, Default, Clone)]
pub struct WhiteNoise;

impl WhiteNoise {
    pub fn new() -> Self {
        Self
    }

    /// Returns a bipolar sample in [-1, 1).
    #[inline]
    pub fn process(&mut self) -> f32 {
        random::get_float() * 2.0 - 1.0
    }
}

//! Stateless shaping, conditioning and pitch helpers shared by the
//! synthesis components.

pub mod polyblep;
pub mod random;

#[allow(unused_imports)]
use num_traits::float::Float;

#[inline]
pub fn crossfade(a: f32, b: f32, fade: f32) -> f32 {
    a + (b - a) * fade
}

#[inline]
pub fn soft_limit(x: f32) -> f32 {
    x * (27.0 + x * x) / (27.0 + 9.0 * x * x)
}

/// Rational tanh-like clipper, hard-limited outside [-3, 3].
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    if x < -3.0 {
        -1.0
    } else if x > 3.0 {
        1.0
    } else {
        soft_limit(x)
    }
}

/// Cheap cubic clipper, stable up to |x| = 1.5.
#[inline]
pub fn soft_clip_cubic(x: f32) -> f32 {
    let x = x.clamp(-1.5, 1.5);
    x - (x * x * x) * 0.3333333
}

/// x/(1+|x|) saturator.
#[inline]
pub fn sat_one_over(x: f32) -> f32 {
    x / (1.0 + x.abs())
}

/// Asymmetric bend: positives pushed harder than negatives.
#[inline]
pub fn asym_bend(x: f32) -> f32 {
    if x >= 0.0 {
        soft_clip_cubic(x * 1.2)
    } else {
        soft_clip_cubic(x * 0.9)
    }
}

/// Crossfade through four shaping stages: identity, cubic clip,
/// x/(1+|x|) saturator, asymmetric bend. `shape` in [0, 1].
#[inline]
pub fn wave_shaper(x: f32, shape: f32) -> f32 {
    let s = shape.clamp(0.0, 1.0) * 3.0;
    let i = (s as i32).min(2);
    let f = s - i as f32;

    let (y0, y1) = match i {
        0 => (x, soft_clip_cubic(x)),
        1 => (soft_clip_cubic(x), sat_one_over(x)),
        _ => (sat_one_over(x), asym_bend(x)),
    };

    crossfade(y0, y1, f)
}

/// Reflect the driven signal back into [-1, 1] with a period-4 triangle
/// map instead of clipping. `amount` in [0, 1] maps to drive 1..13.
#[inline]
pub fn wave_fold(sample: f32, amount: f32) -> f32 {
    let drive = 1.0 + amount * 12.0;
    let x = sample * drive;

    let mut y = (x + 1.0) % 4.0;
    if y < 0.0 {
        y += 4.0;
    }
    if y < 2.0 {
        y - 1.0
    } else {
        3.0 - y
    }
}

/// Zeroes a unipolar control below `db` and rescales the rest to [0, 1].
#[inline]
pub fn deadband(x: f32, db: f32) -> f32 {
    if x <= db {
        0.0
    } else {
        (x - db) / (1.0 - db)
    }
}

/// Zeroes a bipolar control within ±`db` and rescales each half to ±1.
#[inline]
pub fn deadband_bipolar(x: f32, db: f32) -> f32 {
    let ax = x.abs();
    if ax <= db {
        return 0.0;
    }
    let sign = if x > 0.0 { 1.0 } else { -1.0 };
    sign * (ax - db) / (1.0 - db)
}

/// MIDI note number to frequency in Hz, equal temperament, A4 = 440 Hz.
#[inline]
pub fn midi_to_frequency(note: u8) -> f32 {
    440.0 * ((note as f32 - 69.0) / 12.0).exp2()
}

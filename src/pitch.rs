//! # Pitch Resolution
//!
//! Maps a scale degree with its octave and accidental offsets to a frequency
//! ratio relative to the reference pitch (A4, 440 Hz by default).
//!
//! ## Semitone Arithmetic
//! ```text
//! degree:     1   2   3   4   5   6   7
//! solfege:    Do  Re  Mi  Fa  Sol La  Si
//! semitones:  0   2   4   5   7   9   11
//! ```
//! `total = table[degree] + octave * 12 + accidentals - 9`, where 9 is the
//! distance from Do (C4) up to the reference A4. The ratio is `2^(total/12)`.
//!
//! The power is computed by repeated multiplication, never `powf`, so it
//! stays usable in `const` contexts and on targets without a math library.
//! Whole octaves are applied as exact powers of two: raising a note by an
//! octave doubles its ratio bit-for-bit.

/// Semitones above Do for scale degrees 1 through 7.
pub const SCALE_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitones from Do up to the reference pitch (C4 to A4).
pub const REFERENCE_OFFSET: i32 = 9;

/// 2^(1/12)
const SEMITONE_STEP: f32 = 1.059_463_1;

/// Beyond this many octaves an `f32` ratio is already infinite or zero.
const OCTAVE_LIMIT: i32 = 160;

/// `base` raised to an integer power.
///
/// Negative exponents take the reciprocal of the positive power.
pub const fn power(base: f32, exp: i32) -> f32 {
    let mut result = 1.0;
    let mut remaining = exp.unsigned_abs();
    while remaining > 0 {
        result *= base;
        remaining -= 1;
    }
    if exp < 0 {
        1.0 / result
    } else {
        result
    }
}

/// Frequency ratio of a note `semitones` away from the reference pitch.
///
/// # Example
/// ```
/// use ems::pitch::semitone_ratio;
///
/// assert_eq!(semitone_ratio(0), 1.0);
/// assert_eq!(semitone_ratio(12), 2.0);
/// assert_eq!(semitone_ratio(-24), 0.25);
/// ```
pub const fn semitone_ratio(semitones: i32) -> f32 {
    let mut octaves = semitones.div_euclid(12);
    if octaves > OCTAVE_LIMIT {
        octaves = OCTAVE_LIMIT;
    } else if octaves < -OCTAVE_LIMIT {
        octaves = -OCTAVE_LIMIT;
    }
    let steps = semitones.rem_euclid(12);
    power(SEMITONE_STEP, steps) * power(2.0, octaves)
}

/// Frequency ratio for a scale degree with octave and accidental offsets.
///
/// Degree 0 is a rest and always yields `0.0`. Degrees outside 0..=7 are
/// treated as rests as well.
pub const fn ratio(degree: u8, octave: i32, semitones: i32) -> f32 {
    if degree == 0 || degree > 7 {
        return 0.0;
    }
    let total = SCALE_SEMITONES[(degree - 1) as usize]
        .saturating_add(octave.saturating_mul(12))
        .saturating_add(semitones)
        .saturating_sub(REFERENCE_OFFSET);
    semitone_ratio(total)
}

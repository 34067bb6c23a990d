//! Conversions between control ranges and parameter ranges
//!
//! UI controls produce unsigned ([0, 1]) or signed ([-1, 1]) normalized values,
//! audio nodes want Hz, gain etc. None of these functions validate their input:
//! an empty range (`min == max`) or a non-positive log bound gives back NaN or
//! infinity the way IEEE-754 arithmetic does. Use [`crate::range`] for checked ranges.

use crate::consts::{A4_FREQ, A4_MIDI, SEMITONES_PER_OCTAVE};

/// Linear interpolation from [0, 1] to [min, max]. Extrapolates outside [0, 1].
#[inline]
pub fn unsigned_norm_to_param(t: f64, min: f64, max: f64) -> f64 {
    min + (max - min) * t
}

/// Inverse of [`unsigned_norm_to_param`]. `min == max` yields NaN or infinity.
#[inline]
pub fn param_to_unsigned_norm(p: f64, min: f64, max: f64) -> f64 {
    (p - min) / (max - min)
}

#[inline]
pub fn unsigned_n_to_signed_n(t: f64) -> f64 {
    t * 2.0 - 1.0
}

#[inline]
pub fn signed_n_to_unsigned_n(t: f64) -> f64 {
    (t + 1.0) / 2.0
}

/// -1 maps to min, 0 to the midpoint, 1 to max
#[inline]
pub fn signed_norm_to_param(t: f64, min: f64, max: f64) -> f64 {
    unsigned_norm_to_param(signed_n_to_unsigned_n(t), min, max)
}

#[inline]
pub fn param_to_signed_norm(p: f64, min: f64, max: f64) -> f64 {
    unsigned_n_to_signed_n(param_to_unsigned_norm(p, min, max))
}

/// Exponential mapping from [0, 1] to [min, max]: equal steps of `t` give equal
/// frequency ratios. Both bounds must be positive, a negative bound gives NaN.
/// `t = 0` and `t = 1` land on `min` and `max` only to within rounding, since the
/// bounds go through `ln` and back through `exp`.
#[inline]
pub fn unsigned_norm_to_log(t: f64, min: f64, max: f64) -> f64 {
    let ln_min = min.ln();
    ((max.ln() - ln_min) * t + ln_min).exp()
}

/// Inverse of [`unsigned_norm_to_log`]. `p`, `min` and `max` must be positive:
/// negative values give NaN, zero gives NaN or an infinite result.
#[inline]
pub fn log_to_unsigned_norm(p: f64, min: f64, max: f64) -> f64 {
    let ln_min = min.ln();
    (p.ln() - ln_min) / (max.ln() - ln_min)
}

/// Maps a linear range onto a log range, e.g. a 0..127 CC value onto a cutoff in Hz
pub fn lin_to_log(lin: f64, lin_min: f64, lin_max: f64, log_min: f64, log_max: f64) -> f64 {
    unsigned_norm_to_log(param_to_unsigned_norm(lin, lin_min, lin_max), log_min, log_max)
}

/// 12-TET, A4 (note 69) = 440 Hz. Fractional notes are allowed.
#[inline]
pub fn midi_note_to_hz(note: f64) -> f64 {
    A4_FREQ * 2f64.powf((note - A4_MIDI) / SEMITONES_PER_OCTAVE)
}

/// Unrounded inverse of [`midi_note_to_hz`]
#[inline]
pub fn hz_to_midi_note(hz: f64) -> f64 {
    (hz / A4_FREQ).log2() * SEMITONES_PER_OCTAVE + A4_MIDI
}

//! Constants

pub const A4_FREQ: f64 = 440.0;
pub const A4_MIDI: f64 = 69.0;
pub const SEMITONES_PER_OCTAVE: f64 = 12.0;
pub const MIDI_NOTE_MAX: u8 = 127;

/// audible frequency range, the usual bounds for a filter cutoff control
pub const MIN_AUDIBLE_HZ: f64 = 20.0;
pub const MAX_AUDIBLE_HZ: f64 = 20000.0;

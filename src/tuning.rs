use crate::consts::{A4_FREQ, A4_MIDI, SEMITONES_PER_OCTAVE};
use crate::error::{Error, Result};

/*
    Equal-tempered tuning around a reference pitch
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    reference_hz: f64,
    reference_note: f64,
}

impl Tuning {
    pub fn new(reference_hz: f64, reference_note: f64) -> Result<Self> {
        if !reference_hz.is_finite() || reference_hz <= 0.0 {
            log::debug!("rejecting tuning reference frequency {reference_hz}");
            return Err(Error::InvalidReferenceFreq(reference_hz));
        }
        if !reference_note.is_finite() {
            log::debug!("rejecting tuning reference note {reference_note}");
            return Err(Error::InvalidReferenceNote(reference_note));
        }

        Ok(Self {
            reference_hz,
            reference_note,
        })
    }

    pub fn reference_hz(&self) -> f64 {
        self.reference_hz
    }

    pub fn reference_note(&self) -> f64 {
        self.reference_note
    }

    #[inline]
    pub fn note_to_hz(&self, note: f64) -> f64 {
        self.reference_hz * 2f64.powf((note - self.reference_note) / SEMITONES_PER_OCTAVE)
    }

    #[inline]
    pub fn hz_to_note(&self, hz: f64) -> f64 {
        (hz / self.reference_hz).log2() * SEMITONES_PER_OCTAVE + self.reference_note
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            reference_hz: A4_FREQ,
            reference_note: A4_MIDI,
        }
    }
}

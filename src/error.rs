//! Error types for profile construction and parsing.
//!
//! Matching itself never fails; everything fallible happens while building a
//! profile (constructors, note-name parsing, deserialization) and surfaces
//! here so a bad profile is rejected at load time.

use crate::pitch::Pitch;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("MIDI note number {0} out of range (0-127)")]
    PitchOutOfRange(u8),

    #[error("Chord needs at least two pitches, got {0}")]
    ChordTooSmall(usize),

    #[error("Duplicate pitch {0} in chord")]
    DuplicateChordPitch(Pitch),

    #[error("Invalid note name: {0:?}")]
    ParseNote(String),

    #[error("Invalid trigger: {0:?}")]
    ParseTrigger(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! MIDI pitch representation and note-name parsing.
//!
//! `Pitch` wraps a MIDI note number (0-127). Names use scientific pitch
//! notation: letter, optional accidental, octave -1 to 9. Middle C
//! (MIDI 60) is "C4"; concert A (440 Hz, MIDI 69) is "A4".

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Note name for each pitch class, sharp spellings only.
const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// MIDI pitch (note number 0-127).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pitch(u8);

impl Pitch {
    pub const MIDDLE_C: Pitch = Pitch(60);
    pub const MAX: Pitch = Pitch(127);

    /// Returns `None` if the value is > 127.
    pub const fn from_midi(midi: u8) -> Option<Pitch> {
        if midi > 127 {
            None
        } else {
            Some(Pitch(midi))
        }
    }

    pub const fn midi(self) -> u8 {
        self.0
    }

    /// Returns -1 to 9.
    pub const fn octave(self) -> i8 {
        (self.0 / 12) as i8 - 1
    }

    /// 0-11, where 0 = C.
    pub const fn pitch_class(self) -> u8 {
        self.0 % 12
    }

    /// Returns `None` if the result would be out of MIDI range (0-127).
    pub fn transpose(self, semitones: i8) -> Option<Pitch> {
        let midi = (self.0 as i16) + (semitones as i16);
        if !(0..=127).contains(&midi) {
            None
        } else {
            Some(Pitch(midi as u8))
        }
    }
}

impl From<Pitch> for u8 {
    fn from(pitch: Pitch) -> u8 {
        pitch.0
    }
}

impl TryFrom<u8> for Pitch {
    type Error = Error;

    fn try_from(midi: u8) -> Result<Pitch> {
        Pitch::from_midi(midi).ok_or(Error::PitchOutOfRange(midi))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            NOTE_NAMES[self.pitch_class() as usize],
            self.octave()
        )
    }
}

impl FromStr for Pitch {
    type Err = Error;

    /// Parses scientific pitch notation: letter A-G (either case), optional
    /// `#` or `b` accidental, octave -1 to 9. Enharmonic edges resolve
    /// arithmetically, so "B#4" is C5 and "Cb4" is B3.
    fn from_str(s: &str) -> Result<Pitch> {
        let invalid = || Error::ParseNote(s.to_string());

        let mut chars = s.chars();
        let base: i32 = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(invalid()),
        };

        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.bytes().next() {
            Some(b'#') => (1, &rest[1..]),
            Some(b'b') => (-1, &rest[1..]),
            _ => (0, rest),
        };

        let octave: i32 = octave_str.parse().map_err(|_| invalid())?;
        if !(-1..=9).contains(&octave) {
            return Err(invalid());
        }

        let midi = (octave + 1) * 12 + base + accidental;
        if !(0..=127).contains(&midi) {
            return Err(invalid());
        }
        Ok(Pitch(midi as u8))
    }
}

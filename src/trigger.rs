//! Trigger types: single notes and chords.
//!
//! A `Trigger` is either one pitch or a chord of two or more distinct
//! pitches. `Chord::new` is the only way to build a chord, so a malformed
//! one (too few pitches, duplicates) is unrepresentable, and the serde
//! implementation funnels through the same validation.

use crate::error::{Error, Result};
use crate::pitch::Pitch;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Two or more distinct pitches, in the order they were given.
///
/// Order is cosmetic (it shows in the text form); matching treats the chord
/// as a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord(Vec<Pitch>);

impl Chord {
    /// Build a chord, rejecting fewer than two pitches or any duplicate.
    pub fn new(pitches: impl Into<Vec<Pitch>>) -> Result<Chord> {
        let pitches = pitches.into();
        if pitches.len() < 2 {
            return Err(Error::ChordTooSmall(pitches.len()));
        }
        for (i, &pitch) in pitches.iter().enumerate() {
            if pitches[..i].contains(&pitch) {
                return Err(Error::DuplicateChordPitch(pitch));
            }
        }
        Ok(Chord(pitches))
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }

    /// Number of pitches, always at least two.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a chord holds at least two pitches.
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, pitch: Pitch) -> bool {
        self.0.contains(&pitch)
    }
}

/// A mapping trigger: one pitch, or a chord of two or more.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Fires when exactly this pitch sounds.
    SingleNote(Pitch),
    /// Fires when every chord pitch is held at once.
    Chord(Chord),
}

impl Trigger {
    pub fn single_note(pitch: Pitch) -> Trigger {
        Trigger::SingleNote(pitch)
    }

    /// Chord trigger; validates like [`Chord::new`].
    pub fn chord(pitches: impl Into<Vec<Pitch>>) -> Result<Trigger> {
        Ok(Trigger::Chord(Chord::new(pitches)?))
    }

    #[inline]
    pub fn is_chord(&self) -> bool {
        matches!(self, Trigger::Chord(_))
    }

    #[inline]
    pub fn is_single_note(&self) -> bool {
        matches!(self, Trigger::SingleNote(_))
    }

    /// The trigger's pitches; a one-element slice for a single note.
    pub fn pitches(&self) -> &[Pitch] {
        match self {
            Trigger::SingleNote(pitch) => std::slice::from_ref(pitch),
            Trigger::Chord(chord) => chord.pitches(),
        }
    }

    /// How many pitches must be held for this trigger.
    #[inline]
    pub fn note_count(&self) -> usize {
        self.pitches().len()
    }

    pub fn contains(&self, pitch: Pitch) -> bool {
        match self {
            Trigger::SingleNote(p) => *p == pitch,
            Trigger::Chord(chord) => chord.contains(pitch),
        }
    }
}

impl From<Chord> for Trigger {
    fn from(chord: Chord) -> Trigger {
        Trigger::Chord(chord)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pitch) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{pitch}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::SingleNote(pitch) => write!(f, "{pitch}"),
            Trigger::Chord(chord) => write!(f, "{chord}"),
        }
    }
}

impl FromStr for Trigger {
    type Err = Error;

    /// Parses `+`-joined note names: "C4" is a single note, "C4+E4+G4" a
    /// chord. Whitespace around each name is ignored.
    fn from_str(s: &str) -> Result<Trigger> {
        if s.trim().is_empty() {
            return Err(Error::ParseTrigger(s.to_string()));
        }
        let pitches = s
            .split('+')
            .map(|part| part.trim().parse::<Pitch>())
            .collect::<Result<Vec<Pitch>>>()?;
        match pitches.len() {
            1 => Ok(Trigger::SingleNote(pitches[0])),
            _ => Trigger::chord(pitches),
        }
    }
}

// Serializable representation; deserializing funnels through the validating
// constructor so a stored profile cannot smuggle in a malformed chord.
#[derive(Serialize, Deserialize)]
enum TriggerRepr {
    SingleNote(Pitch),
    Chord(Vec<Pitch>),
}

impl Serialize for Trigger {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let repr = match self {
            Trigger::SingleNote(pitch) => TriggerRepr::SingleNote(*pitch),
            Trigger::Chord(chord) => TriggerRepr::Chord(chord.pitches().to_vec()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match TriggerRepr::deserialize(deserializer)? {
            TriggerRepr::SingleNote(pitch) => Ok(Trigger::SingleNote(pitch)),
            TriggerRepr::Chord(pitches) => {
                Trigger::chord(pitches).map_err(serde::de::Error::custom)
            }
        }
    }
}

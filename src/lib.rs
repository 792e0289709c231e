//! Chord and single-note trigger matching for MIDI-driven control surfaces.
//!
//! A host binds triggers (single notes or chords) to actions in a
//! [`MappingProfile`], builds a [`MappingMatcher`] over it, and asks which
//! mappings a set of held notes satisfies. Chords win over single notes,
//! wider chords win over narrower ones, and a matched chord consumes its
//! notes so they cannot fire anything else in the same pass. Action values
//! are opaque to this crate; executing them is the host's job, as is the
//! MIDI device connection itself.
//!
//! # Example
//!
//! ```
//! use chordmap::{MappingMatcher, MappingProfile, MappingRecord, Pitch, Trigger};
//!
//! let c4 = Pitch::MIDDLE_C;
//! let e4 = c4.transpose(4).unwrap();
//! let g4 = c4.transpose(7).unwrap();
//!
//! let mut profile = MappingProfile::new();
//! profile.push(MappingRecord::new(Trigger::chord([c4, e4, g4])?, "build"));
//! profile.push(MappingRecord::new(Trigger::single_note(c4), "save"));
//!
//! let matcher = MappingMatcher::new(&profile);
//!
//! // The full triad fires the chord mapping and consumes all three notes.
//! let matches = matcher.find_matches_in_buffer(&[c4, e4, g4]);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].action, "build");
//!
//! // C4 alone fires the single-note mapping instead.
//! let matches = matcher.find_matches_in_buffer(&[c4]);
//! assert_eq!(matches[0].action, "save");
//! # Ok::<(), chordmap::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

mod pitch;
pub use pitch::Pitch;

mod trigger;
pub use trigger::{Chord, Trigger};

mod profile;
pub use profile::{MappingProfile, MappingRecord};

mod matcher;
pub use matcher::MappingMatcher;

mod buffer;
pub use buffer::{NoteBuffer, MAX_POLYPHONY};

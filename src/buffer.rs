//! Held-note tracking.
//!
//! `NoteBuffer` keeps the currently-held notes in the order the keys went
//! down, ready to feed
//! [`MappingMatcher::find_matches_in_buffer`](crate::MappingMatcher::find_matches_in_buffer).
//! The host calls [`note_on`](NoteBuffer::note_on) and
//! [`note_off`](NoteBuffer::note_off) from its MIDI input callback.

use crate::pitch::Pitch;
use smallvec::SmallVec;

/// GM2 requires 32 simultaneous notes; inline storage is sized to match.
pub const MAX_POLYPHONY: usize = 32;

/// Currently-held notes in performance order.
///
/// Holds up to [`MAX_POLYPHONY`] notes inline; beyond that it spills to the
/// heap rather than dropping input.
#[derive(Debug, Clone, Default)]
pub struct NoteBuffer {
    held: SmallVec<[Pitch; MAX_POLYPHONY]>,
}

impl NoteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. A pitch that is already held is ignored,
    /// since a held key cannot go down a second time.
    pub fn note_on(&mut self, pitch: Pitch) {
        if !self.held.contains(&pitch) {
            self.held.push(pitch);
        }
    }

    /// Record a key coming up, releasing every occurrence of the pitch.
    pub fn note_off(&mut self, pitch: Pitch) {
        self.held.retain(|held| *held != pitch);
    }

    /// Snapshot of the held notes, oldest first. Feed this straight to the
    /// matcher as its buffer.
    pub fn pitches(&self) -> &[Pitch] {
        &self.held
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pitch> {
        self.held.iter()
    }

    pub fn contains(&self, pitch: Pitch) -> bool {
        self.held.contains(&pitch)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Release everything (all-notes-off).
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl<'a> IntoIterator for &'a NoteBuffer {
    type Item = &'a Pitch;
    type IntoIter = std::slice::Iter<'a, Pitch>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

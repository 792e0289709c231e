//! Mapping records and profiles.

use crate::trigger::Trigger;
use serde::{Deserialize, Serialize};

/// One trigger paired with the action it fires.
///
/// The action type `A` is opaque to this crate: it is carried through
/// matching untouched and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord<A> {
    /// The trigger to recognize.
    pub trigger: Trigger,
    /// The host-defined action this trigger fires.
    pub action: A,
}

impl<A> MappingRecord<A> {
    pub fn new(trigger: Trigger, action: A) -> Self {
        Self { trigger, action }
    }
}

/// An ordered sequence of mapping records.
///
/// Order is significant: single-note and chord-containment queries report
/// matches in profile order, and equally-sized chords keep profile order in
/// the match cache. The profile is owned by the host; a
/// [`MappingMatcher`](crate::MappingMatcher) only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingProfile<A> {
    mappings: Vec<MappingRecord<A>>,
}

impl<A> MappingProfile<A> {
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Append a record; later records rank after earlier ones.
    pub fn push(&mut self, record: MappingRecord<A>) {
        self.mappings.push(record);
    }

    pub fn mappings(&self) -> &[MappingRecord<A>] {
        &self.mappings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingRecord<A>> {
        self.mappings.iter()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl<A> Default for MappingProfile<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Vec<MappingRecord<A>>> for MappingProfile<A> {
    fn from(mappings: Vec<MappingRecord<A>>) -> Self {
        Self { mappings }
    }
}

impl<A> FromIterator<MappingRecord<A>> for MappingProfile<A> {
    fn from_iter<I: IntoIterator<Item = MappingRecord<A>>>(iter: I) -> Self {
        Self {
            mappings: iter.into_iter().collect(),
        }
    }
}

impl<'a, A> IntoIterator for &'a MappingProfile<A> {
    type Item = &'a MappingRecord<A>;
    type IntoIter = std::slice::Iter<'a, MappingRecord<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

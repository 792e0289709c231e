//! Greedy chord and single-note matching over a mapping profile.

use crate::buffer::MAX_POLYPHONY;
use crate::pitch::Pitch;
use crate::profile::{MappingProfile, MappingRecord};
use crate::trigger::Trigger;
use smallvec::SmallVec;
use std::cmp::Reverse;
use tracing::{debug, trace};

/// One buffer pass's working set; `None` marks a consumed slot.
type WorkingSet = SmallVec<[Option<Pitch>; MAX_POLYPHONY]>;

/// Matches pitch events against a mapping profile.
///
/// Construction precomputes a cache of the chord mappings ordered widest
/// first, so buffer matching can be greedy. The profile is borrowed for the
/// matcher's whole lifetime; it cannot change underneath the cache.
///
/// All queries are pure and infallible: an unmatched pitch or buffer just
/// produces an empty result.
pub struct MappingMatcher<'p, A> {
    profile: &'p MappingProfile<A>,
    /// Chord-trigger records, widest first; equal sizes keep profile order.
    chord_mappings: Vec<&'p MappingRecord<A>>,
}

impl<'p, A> MappingMatcher<'p, A> {
    pub fn new(profile: &'p MappingProfile<A>) -> Self {
        let mut chord_mappings: Vec<&'p MappingRecord<A>> = profile
            .iter()
            .filter(|mapping| mapping.trigger.is_chord())
            .collect();
        // Stable sort: equally-sized chords stay in profile order.
        chord_mappings.sort_by_key(|mapping| Reverse(mapping.trigger.note_count()));

        debug!(
            "Built matcher over {} mappings ({} chords cached)",
            profile.len(),
            chord_mappings.len()
        );

        Self {
            profile,
            chord_mappings,
        }
    }

    /// The profile this matcher was built over.
    pub fn profile(&self) -> &'p MappingProfile<A> {
        self.profile
    }

    /// The cached chord mappings in match precedence order (widest first).
    pub fn chord_mappings(&self) -> impl Iterator<Item = &'p MappingRecord<A>> + '_ {
        self.chord_mappings.iter().copied()
    }

    /// Every record whose trigger is exactly this single note, in profile
    /// order.
    pub fn find_single_note_matches(&self, pitch: Pitch) -> Vec<&'p MappingRecord<A>> {
        self.profile
            .iter()
            .filter(|mapping| matches!(&mapping.trigger, Trigger::SingleNote(p) if *p == pitch))
            .collect()
    }

    /// Every record whose chord trigger contains this note, in profile order.
    ///
    /// The chord need not be satisfied; hosts use this to show which chords
    /// a held note could still complete.
    pub fn find_chord_matches_containing_note(&self, pitch: Pitch) -> Vec<&'p MappingRecord<A>> {
        self.profile
            .iter()
            .filter(|mapping| mapping.trigger.is_chord() && mapping.trigger.contains(pitch))
            .collect()
    }

    /// Every trigger satisfied by a snapshot of held notes.
    ///
    /// Chord triggers are tried widest first. A chord is complete when each
    /// of its pitches is still present in the working set; on a match it
    /// consumes all occurrences of each of its pitch values, so those notes
    /// neither satisfy a later chord nor count as single notes in the same
    /// pass. Whatever survives the chord pass is matched as single notes in
    /// buffer order.
    ///
    /// Chord results come first, in precedence order, followed by the
    /// single-note results. Stateless: the same buffer always produces the
    /// same matches.
    pub fn find_matches_in_buffer(&self, buffer: &[Pitch]) -> Vec<&'p MappingRecord<A>> {
        let mut results = Vec::new();
        let mut events: WorkingSet = buffer.iter().map(|&pitch| Some(pitch)).collect();

        for mapping in &self.chord_mappings {
            let complete = mapping
                .trigger
                .pitches()
                .iter()
                .all(|&pitch| events.iter().any(|&slot| slot == Some(pitch)));
            if !complete {
                continue;
            }

            trace!("Chord trigger matched: {}", mapping.trigger);

            // Consume every remaining occurrence of the chord's pitches.
            for slot in events.iter_mut() {
                if let Some(pitch) = *slot {
                    if mapping.trigger.contains(pitch) {
                        *slot = None;
                    }
                }
            }
            results.push(*mapping);
        }

        for slot in &events {
            if let Some(pitch) = *slot {
                results.extend(self.find_single_note_matches(pitch));
            }
        }

        results
    }
}

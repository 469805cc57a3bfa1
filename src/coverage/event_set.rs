//! Deduplicating set of timeline events.
//!
//! Membership is decided by [`EventId`], so pushing the same event twice
//! (for example from two interaction records) keeps a single entry.

use crate::model::{Event, EventId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A set of events borrowed from a trace model, keyed by event id
#[derive(Debug, Clone, Default)]
pub struct EventSet<'m> {
    events: HashMap<EventId, &'m Event>,
}

impl<'m> EventSet<'m> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event
    ///
    /// Returns false if an event with the same id was already present.
    pub fn push(&mut self, event: &'m Event) -> bool {
        match self.events.entry(event.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(event);
                true
            }
        }
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains_key(&event.id)
    }

    pub fn contains_id(&self, id: EventId) -> bool {
        self.events.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over member events in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &'m Event> + '_ {
        self.events.values().copied()
    }

    /// Member ids in ascending order
    pub fn sorted_ids(&self) -> Vec<EventId> {
        let mut ids: Vec<EventId> = self.events.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl<'m> FromIterator<&'m Event> for EventSet<'m> {
    fn from_iter<I: IntoIterator<Item = &'m Event>>(iter: I) -> Self {
        let mut set = EventSet::new();
        for event in iter {
            set.push(event);
        }
        set
    }
}

impl<'m> Extend<&'m Event> for EventSet<'m> {
    fn extend<I: IntoIterator<Item = &'m Event>>(&mut self, iter: I) {
        for event in iter {
            self.push(event);
        }
    }
}

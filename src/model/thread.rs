//! Threads and the slice groups that hold their timelines.

use super::event::Event;
use serde::{Deserialize, Serialize};

/// Thread identifier within a process
pub type Tid = u64;

/// All slices recorded on one thread timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SliceGroup {
    top_level: Vec<Event>,
}

impl SliceGroup {
    pub fn new(top_level: Vec<Event>) -> Self {
        Self { top_level }
    }

    pub fn push_slice(&mut self, slice: Event) {
        self.top_level.push(slice);
    }

    /// Top-level slices in timeline order
    pub fn top_level_slices(&self) -> &[Event] {
        &self.top_level
    }

    pub(crate) fn top_level_slices_mut(&mut self) -> &mut [Event] {
        &mut self.top_level
    }

    /// Visit every event in the group, including nested slices, exactly once
    pub fn iterate_all_events<'m>(&'m self, mut visit: impl FnMut(&'m Event)) {
        for slice in &self.top_level {
            slice.walk(&mut visit);
        }
    }

    /// Number of events, nested ones included
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.iterate_all_events(|_| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }
}

/// A thread and its timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub tid: Tid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, alias = "slices", alias = "sliceGroup")]
    pub slice_group: SliceGroup,
}

impl Thread {
    pub fn new(tid: Tid) -> Self {
        Self {
            tid,
            name: None,
            slice_group: SliceGroup::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_slice(mut self, slice: Event) -> Self {
        self.slice_group.push_slice(slice);
        self
    }
}

//! Timeline events and their identity.
//!
//! Every event carries a stable [`EventId`]. Coverage sets key on that id
//! rather than on references, so two copies of the same event compare equal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a timeline event, unique within one model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of timeline event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Synchronous slice on a thread timeline
    #[default]
    Slice,
    /// Slice belonging to an async operation
    AsyncSlice,
    /// Causal link between slices; has no container and no CPU attribution
    Flow,
}

impl EventKind {
    pub fn is_flow(self) -> bool {
        matches!(self, EventKind::Flow)
    }
}

/// A single event on a thread timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub kind: EventKind,

    /// Start timestamp in milliseconds
    #[serde(default, alias = "start")]
    pub start_ms: f64,

    /// Wall duration in milliseconds
    #[serde(default, alias = "duration")]
    pub duration_ms: f64,

    /// CPU self time in milliseconds, if the trace recorded one
    #[serde(default, alias = "cpuSelfTime", skip_serializing_if = "Option::is_none")]
    pub cpu_self_time: Option<f64>,

    /// Slices nested directly under this one
    #[serde(default, alias = "subSlices", skip_serializing_if = "Vec::is_empty")]
    pub sub_slices: Vec<Event>,
}

impl Event {
    /// Create a slice event with no CPU time and no children
    pub fn slice(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: EventId(id),
            title: title.into(),
            category: None,
            kind: EventKind::Slice,
            start_ms: 0.0,
            duration_ms: 0.0,
            cpu_self_time: None,
            sub_slices: Vec::new(),
        }
    }

    /// Create a flow event
    pub fn flow(id: u64, title: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Flow,
            ..Self::slice(id, title)
        }
    }

    pub fn with_cpu_self_time(mut self, cpu_ms: f64) -> Self {
        self.cpu_self_time = Some(cpu_ms);
        self
    }

    pub fn with_sub_slice(mut self, child: Event) -> Self {
        self.sub_slices.push(child);
        self
    }

    /// CPU self time attributed to this event
    ///
    /// Flow events never carry CPU attribution, whatever value was recorded.
    /// Negative and non-finite values count as no attribution.
    pub fn cpu_self_time_ms(&self) -> Option<f64> {
        match self.kind {
            EventKind::Flow => None,
            EventKind::Slice | EventKind::AsyncSlice => self
                .cpu_self_time
                .filter(|cpu| cpu.is_finite() && *cpu >= 0.0),
        }
    }

    /// Visit this event and all of its nested slices, parents first
    pub fn walk<'m>(&'m self, visit: &mut impl FnMut(&'m Event)) {
        visit(self);
        for child in &self.sub_slices {
            child.walk(visit);
        }
    }
}

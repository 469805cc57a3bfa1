//! Interaction records: labelled spans of interest over the timeline.

use super::event::Event;

/// A labelled span together with the events an external detector associated with it
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    pub title: String,
    pub start_ms: f64,
    pub duration_ms: f64,
    associated_events: Vec<Event>,
}

impl InteractionRecord {
    pub fn new(title: impl Into<String>, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            title: title.into(),
            start_ms,
            duration_ms,
            associated_events: Vec::new(),
        }
    }

    pub fn with_associated_event(mut self, event: Event) -> Self {
        self.associated_events.push(event);
        self
    }

    pub fn with_associated_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.associated_events.extend(events);
        self
    }

    /// Events associated with this record, as supplied by the detector
    pub fn associated_events(&self) -> &[Event] {
        &self.associated_events
    }
}

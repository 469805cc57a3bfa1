//! The read-only trace model snapshot consumed by coverage analysis.

use super::event::Event;
use super::interaction::InteractionRecord;
use super::process::{Pid, Process};
use std::collections::BTreeMap;

/// Processes, flow events and interaction records of one trace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceModel {
    processes: BTreeMap<Pid, Process>,
    flow_events: Vec<Event>,
    interaction_records: Vec<InteractionRecord>,
}

impl TraceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a process, replacing any existing process with the same pid
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.insert(process.pid, process);
        self
    }

    pub fn with_flow_event(mut self, flow: Event) -> Self {
        self.flow_events.push(flow);
        self
    }

    pub fn with_interaction_record(mut self, record: InteractionRecord) -> Self {
        self.interaction_records.push(record);
        self
    }

    pub fn add_interaction_record(&mut self, record: InteractionRecord) {
        self.interaction_records.push(record);
    }

    /// Interaction records in detection order
    pub fn interaction_records(&self) -> &[InteractionRecord] {
        &self.interaction_records
    }

    pub fn all_processes(&self) -> impl Iterator<Item = &Process> {
        self.processes.values()
    }

    pub fn flow_events(&self) -> &[Event] {
        &self.flow_events
    }

    pub fn thread_count(&self) -> usize {
        self.processes.values().map(|p| p.threads.len()).sum()
    }

    /// Number of timeline events across every thread of every process
    pub fn event_count(&self) -> usize {
        self.processes.values().map(Process::event_count).sum()
    }
}

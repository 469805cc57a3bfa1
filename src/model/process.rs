//! Processes and their thread maps.

use super::thread::{Thread, Tid};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Process identifier
pub type Pid = u64;

/// A traced process, owning its threads keyed by thread id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub threads: BTreeMap<Tid, Thread>,
}

impl Process {
    pub fn new(pid: Pid) -> Self {
        Self {
            pid,
            name: None,
            threads: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a thread, replacing any existing thread with the same tid
    pub fn with_thread(mut self, thread: Thread) -> Self {
        self.threads.insert(thread.tid, thread);
        self
    }

    /// Total number of timeline events across all threads
    pub fn event_count(&self) -> usize {
        self.threads.values().map(|t| t.slice_group.len()).sum()
    }
}

//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use crate::model::{EventId, Pid, Tid};
use thiserror::Error;

/// Errors that can occur while loading a trace model snapshot
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read model file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid model format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported model schema version: {0}")]
    UnsupportedVersion(String),

    #[error("Process id {0} appears more than once in the model")]
    DuplicateProcess(Pid),

    #[error("Process map key '{key}' does not match process id {pid}")]
    ProcessKeyMismatch { key: String, pid: Pid },

    #[error("Thread map key {key} of process {pid} does not match thread id {tid}")]
    ThreadKeyMismatch { pid: Pid, key: Tid, tid: Tid },

    #[error("Event id {0} appears more than once in the model")]
    DuplicateEventId(EventId),

    #[error("Interaction record '{record}' references unknown event {id}")]
    UnknownEvent { record: String, id: EventId },
}

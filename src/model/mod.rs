//! Read-only trace model consumed by coverage analysis.
//!
//! This module defines:
//! - Timeline events and their stable identity
//! - Slice groups, threads and processes
//! - Interaction records
//! - A loader for JSON model snapshots

pub mod event;
pub mod interaction;
pub mod loader;
pub mod process;
pub mod thread;
pub mod trace_model;

// Re-export main types
pub use event::{Event, EventId, EventKind};
pub use interaction::InteractionRecord;
pub use loader::{load_model, parse_model};
pub use process::{Pid, Process};
pub use thread::{SliceGroup, Thread, Tid};
pub use trace_model::TraceModel;

//! Interaction-record coverage over a trace model.
//!
//! This module partitions timeline events into:
//! - Events associated with at least one interaction record
//! - Events not associated with any record
//!
//! and reports count and CPU-time coverage ratios over that partition.

pub mod collector;
pub mod cpu_time;
pub mod event_set;
pub mod report;

// Re-export main types and functions
pub use collector::{collect_associated_events, collect_unassociated_events};
pub use cpu_time::total_cpu_duration;
pub use event_set::EventSet;
pub use report::{ir_coverage_from_model, CoverageReport};

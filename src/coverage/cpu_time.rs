//! CPU self time totals over event sets.

use super::event_set::EventSet;

/// Sum the CPU self time of every event in the set
///
/// **Public** - used for both halves of the partition
///
/// Events without CPU attribution contribute nothing. The total starts at
/// positive zero, so an empty set never reports `-0.0`.
pub fn total_cpu_duration(events: &EventSet<'_>) -> f64 {
    events
        .iter()
        .filter_map(|event| event.cpu_self_time_ms())
        .fold(0.0, |total, cpu| total + cpu)
}

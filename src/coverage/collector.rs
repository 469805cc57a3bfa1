//! Partition timeline events by interaction-record association.
//!
//! The associated set comes from the records themselves; the unassociated set
//! is everything else found by walking every thread of every process.

use super::event_set::EventSet;
use crate::model::{InteractionRecord, TraceModel};
use log::debug;

/// Collect the events associated with any of the given records
///
/// **Public** - first half of the partition
///
/// # Arguments
/// * `records` - Interaction records, in any order
///
/// # Returns
/// Deduplicated set of associated events. Flow events are skipped: they have
/// no parent container and no CPU duration, so they take no part in coverage.
pub fn collect_associated_events(records: &[InteractionRecord]) -> EventSet<'_> {
    let mut associated = EventSet::new();

    for record in records {
        for event in record.associated_events() {
            if event.kind.is_flow() {
                continue;
            }
            associated.push(event);
        }
    }

    debug!(
        "Collected {} associated events from {} interaction records",
        associated.len(),
        records.len()
    );

    associated
}

/// Collect every timeline event that is not in the associated set
///
/// **Public** - second half of the partition
///
/// # Arguments
/// * `model` - Trace model to walk
/// * `associated` - Result of [`collect_associated_events`]
///
/// # Returns
/// Set of events visited on any thread timeline and absent from `associated`
pub fn collect_unassociated_events<'m>(
    model: &'m TraceModel,
    associated: &EventSet<'_>,
) -> EventSet<'m> {
    let mut unassociated = EventSet::new();
    let mut visited = 0usize;

    for process in model.all_processes() {
        for thread in process.threads.values() {
            thread.slice_group.iterate_all_events(|event| {
                visited += 1;
                if !associated.contains(event) {
                    unassociated.push(event);
                }
            });
        }
    }

    debug!(
        "Visited {} timeline events, {} are unassociated",
        visited,
        unassociated.len()
    );

    unassociated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, EventId, Process, Thread};

    #[test]
    fn test_associated_skips_flow_and_duplicates() {
        let records = vec![
            InteractionRecord::new("first", 0.0, 10.0)
                .with_associated_event(Event::slice(1, "a"))
                .with_associated_event(Event::flow(2, "link")),
            InteractionRecord::new("second", 5.0, 10.0)
                .with_associated_event(Event::slice(1, "a"))
                .with_associated_event(Event::slice(3, "b")),
        ];

        let associated = collect_associated_events(&records);

        assert_eq!(associated.sorted_ids(), vec![EventId(1), EventId(3)]);
    }

    #[test]
    fn test_associated_empty_inputs() {
        assert!(collect_associated_events(&[]).is_empty());

        let records = vec![InteractionRecord::new("empty", 0.0, 1.0)];
        assert!(collect_associated_events(&records).is_empty());
    }

    #[test]
    fn test_unassociated_walks_nested_slices() {
        let model = TraceModel::new().with_process(
            Process::new(1).with_thread(
                Thread::new(1).with_slice(
                    Event::slice(1, "outer")
                        .with_sub_slice(Event::slice(2, "inner"))
                        .with_sub_slice(Event::slice(3, "inner2")),
                ),
            ),
        );
        let records = vec![InteractionRecord::new("ir", 0.0, 1.0)
            .with_associated_event(Event::slice(2, "inner"))];

        let associated = collect_associated_events(&records);
        let unassociated = collect_unassociated_events(&model, &associated);

        assert_eq!(unassociated.sorted_ids(), vec![EventId(1), EventId(3)]);
    }

    #[test]
    fn test_unassociated_empty_model() {
        let model = TraceModel::new();
        let unassociated = collect_unassociated_events(&model, &EventSet::new());
        assert!(unassociated.is_empty());
    }
}

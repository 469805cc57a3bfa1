use ir_coverage::coverage::{
    collect_associated_events, collect_unassociated_events, ir_coverage_from_model,
    total_cpu_duration, EventSet,
};
use ir_coverage::model::{Event, EventId, InteractionRecord, Process, Thread, TraceModel};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn process_a_events() -> Vec<Event> {
    vec![
        Event::slice(1, "a1").with_cpu_self_time(5.0),
        Event::slice(2, "a2").with_cpu_self_time(0.0),
        Event::flow(3, "a3").with_cpu_self_time(3.0),
    ]
}

/// Two processes: A has 5/0/3 ms (slice, slice, flow), B has 2 and 4 ms
fn worked_example_model(records: Vec<InteractionRecord>) -> TraceModel {
    let mut thread_a = Thread::new(1);
    for event in process_a_events() {
        thread_a = thread_a.with_slice(event);
    }

    let mut model = TraceModel::new()
        .with_process(Process::new(1).with_name("A").with_thread(thread_a))
        .with_process(
            Process::new(2).with_name("B").with_thread(
                Thread::new(1)
                    .with_slice(Event::slice(4, "b1").with_cpu_self_time(2.0))
                    .with_slice(Event::slice(5, "b2").with_cpu_self_time(4.0)),
            ),
        );
    for record in records {
        model.add_interaction_record(record);
    }
    model
}

fn first_record() -> InteractionRecord {
    InteractionRecord::new("Response", 0.0, 16.0).with_associated_events(process_a_events())
}

fn ids(set: &EventSet<'_>) -> BTreeSet<EventId> {
    set.iter().map(|event| event.id).collect()
}

#[test]
fn test_worked_example() {
    let model = worked_example_model(vec![first_record()]);

    let report = ir_coverage_from_model(&model).unwrap();

    assert_eq!(report.associated_events_count, 2);
    assert_eq!(report.unassociated_events_count, 3);
    assert_eq!(report.associated_events_cpu_time_ms, 5.0);
    assert_eq!(report.unassociated_events_cpu_time_ms, 6.0);
    assert_eq!(report.covered_events_count_ratio, 0.4);

    let cpu_ratio = report.covered_events_cpu_time_ratio.unwrap();
    assert!((cpu_ratio - 5.0 / 11.0).abs() < 1e-12);
}

#[test]
fn test_partition_is_disjoint_and_complete() {
    let model = worked_example_model(vec![
        first_record(),
        InteractionRecord::new("Animation", 20.0, 5.0)
            .with_associated_event(Event::slice(5, "b2").with_cpu_self_time(4.0)),
    ]);

    let associated = collect_associated_events(model.interaction_records());
    let unassociated = collect_unassociated_events(&model, &associated);

    let associated_ids = ids(&associated);
    let unassociated_ids = ids(&unassociated);
    assert!(associated_ids.is_disjoint(&unassociated_ids));

    let mut timeline_ids = BTreeSet::new();
    for process in model.all_processes() {
        for thread in process.threads.values() {
            thread.slice_group.iterate_all_events(|event| {
                timeline_ids.insert(event.id);
            });
        }
    }
    let union: BTreeSet<EventId> = associated_ids.union(&unassociated_ids).copied().collect();
    assert_eq!(union, timeline_ids);
}

#[test]
fn test_idempotent() {
    let model = worked_example_model(vec![first_record()]);

    assert_eq!(ir_coverage_from_model(&model), ir_coverage_from_model(&model));
}

#[test]
fn test_superset_record_does_not_decrease_coverage() {
    let base = worked_example_model(vec![first_record()]);
    let before = ir_coverage_from_model(&base).unwrap();

    let wider = InteractionRecord::new("Wider", 0.0, 40.0)
        .with_associated_events(process_a_events())
        .with_associated_event(Event::slice(4, "b1").with_cpu_self_time(2.0));
    let extended = worked_example_model(vec![first_record(), wider]);
    let after = ir_coverage_from_model(&extended).unwrap();

    assert!(after.associated_events_count >= before.associated_events_count);
    assert_eq!(after.associated_events_count, 3);
    assert_eq!(after.unassociated_events_count, 2);
}

#[test]
fn test_flow_events_never_counted_as_associated() {
    let model = worked_example_model(vec![InteractionRecord::new("Flows", 0.0, 1.0)
        .with_associated_event(Event::flow(3, "a3").with_cpu_self_time(3.0))
        .with_associated_event(Event::slice(4, "b1").with_cpu_self_time(2.0))]);

    let associated = collect_associated_events(model.interaction_records());
    assert!(!associated.contains_id(EventId(3)));
    assert_eq!(total_cpu_duration(&associated), 2.0);

    let report = ir_coverage_from_model(&model).unwrap();
    assert_eq!(report.associated_events_count, 1);
    assert_eq!(report.associated_events_cpu_time_ms, 2.0);
}

#[test]
fn test_no_records_returns_none() {
    let model = worked_example_model(Vec::new());

    assert_eq!(ir_coverage_from_model(&model), None);
}

#[test]
fn test_associated_event_outside_timeline_still_counts() {
    let model = TraceModel::new().with_interaction_record(
        InteractionRecord::new("Detached", 0.0, 1.0)
            .with_associated_event(Event::slice(42, "orphan").with_cpu_self_time(1.0)),
    );

    let report = ir_coverage_from_model(&model).unwrap();

    assert_eq!(report.associated_events_count, 1);
    assert_eq!(report.unassociated_events_count, 0);
    assert_eq!(report.covered_events_count_ratio, 1.0);
    assert_eq!(report.covered_events_cpu_time_ratio, Some(1.0));
}

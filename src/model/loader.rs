//! Loader for JSON trace model snapshots.
//!
//! Reads the snapshot written by a trace importer into a validated [`TraceModel`].
//! Interaction records reference events by id; the loader resolves those ids
//! against the thread timelines and the flow events.

use super::event::{Event, EventId};
use super::interaction::InteractionRecord;
use super::process::Process;
use super::trace_model::TraceModel;
use crate::utils::config::{MODEL_SCHEMA_VERSION, PROCESS_FIELD_NAMES, RECORD_FIELD_NAMES};
use crate::utils::error::ModelError;
use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Interaction record as stored in the snapshot
#[derive(Debug, Clone, Deserialize)]
struct RawInteractionRecord {
    #[serde(default)]
    title: String,

    #[serde(default, alias = "start")]
    start_ms: f64,

    #[serde(default, alias = "duration")]
    duration_ms: f64,

    #[serde(default, alias = "associatedEventIds", alias = "associated_events")]
    associated_event_ids: Vec<EventId>,
}

/// Parse a trace model snapshot from JSON
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `ModelError::InvalidFormat` - Top level is not an object
/// * `ModelError::UnsupportedVersion` - Snapshot major version differs
/// * `ModelError::JsonError` - A collection does not match the schema
/// * `ModelError::DuplicateProcess` - Two processes share a pid
/// * `ModelError::ProcessKeyMismatch` / `ThreadKeyMismatch` - A map key disagrees with its id
/// * `ModelError::DuplicateEventId` - Two events share an id
/// * `ModelError::UnknownEvent` - A record references an id not in the model
pub fn parse_model(raw: &Value) -> Result<TraceModel, ModelError> {
    let obj = raw.as_object().ok_or_else(|| {
        ModelError::InvalidFormat("expected a JSON object at the top level".to_string())
    })?;

    check_version(obj)?;

    let mut processes: Vec<Process> = match find_field(obj, PROCESS_FIELD_NAMES) {
        Some(value) => read_processes(value)?,
        None => {
            warn!("Model has no process collection, treating it as empty");
            Vec::new()
        }
    };

    let mut flow_events: Vec<Event> = match find_field(obj, &["flow_events", "flowEvents"]) {
        Some(value) => serde_json::from_value(value.clone())?,
        None => Vec::new(),
    };

    let raw_records: Vec<RawInteractionRecord> = match find_field(obj, RECORD_FIELD_NAMES) {
        Some(value) => serde_json::from_value(value.clone())?,
        None => Vec::new(),
    };

    for process in &mut processes {
        for thread in process.threads.values_mut() {
            for slice in thread.slice_group.top_level_slices_mut() {
                sanitize_cpu_time(slice);
            }
        }
    }
    for flow in &mut flow_events {
        sanitize_cpu_time(flow);
    }

    let records = resolve_records(&processes, &flow_events, raw_records)?;

    let mut model = TraceModel::new();
    for process in processes {
        model = model.with_process(process);
    }
    for flow in flow_events {
        model = model.with_flow_event(flow);
    }
    for record in records {
        model.add_interaction_record(record);
    }

    debug!(
        "Parsed model: {} processes, {} threads, {} events, {} interaction records",
        model.all_processes().count(),
        model.thread_count(),
        model.event_count(),
        model.interaction_records().len()
    );

    Ok(model)
}

/// Read and parse a trace model snapshot from a JSON file
///
/// **Public** - used by the CLI and tests
///
/// # Errors
/// * `ModelError::IoError` - File cannot be opened
/// * Any error returned by [`parse_model`]
pub fn load_model(input_path: impl AsRef<Path>) -> Result<TraceModel, ModelError> {
    let input_path = input_path.as_ref();

    info!("Loading trace model from: {}", input_path.display());

    let file = File::open(input_path)?;
    let raw: Value = serde_json::from_reader(BufReader::new(file))?;

    parse_model(&raw)
}

/// Find the first present field among alternative names
///
/// **Private** - internal helper
fn find_field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| obj.get(*name))
}

/// Read the process collection, either a list or a map keyed by pid
///
/// **Private** - rejects repeated pids and map keys that disagree with ids,
/// since either would silently drop a process or thread from the model
fn read_processes(value: &Value) -> Result<Vec<Process>, ModelError> {
    let processes: Vec<Process> = if value.is_object() {
        let by_key: BTreeMap<String, Process> = serde_json::from_value(value.clone())?;
        by_key
            .into_iter()
            .map(|(key, process)| {
                if key.parse::<u64>().ok() != Some(process.pid) {
                    return Err(ModelError::ProcessKeyMismatch { key, pid: process.pid });
                }
                Ok(process)
            })
            .collect::<Result<Vec<_>, ModelError>>()?
    } else {
        serde_json::from_value(value.clone())?
    };

    let mut seen = BTreeSet::new();
    for process in &processes {
        if !seen.insert(process.pid) {
            return Err(ModelError::DuplicateProcess(process.pid));
        }
        for (key, thread) in &process.threads {
            if *key != thread.tid {
                return Err(ModelError::ThreadKeyMismatch {
                    pid: process.pid,
                    key: *key,
                    tid: thread.tid,
                });
            }
        }
    }

    Ok(processes)
}

/// Reject snapshots whose major version differs from ours
///
/// **Private** - internal validation
fn check_version(obj: &Map<String, Value>) -> Result<(), ModelError> {
    let Some(version) = obj.get("version") else {
        debug!("Model has no version field, assuming {}", MODEL_SCHEMA_VERSION);
        return Ok(());
    };

    let version = version
        .as_str()
        .ok_or_else(|| ModelError::InvalidFormat("version must be a string".to_string()))?;

    let major = |v: &str| v.split('.').next().map(str::to_owned);
    if major(version) != major(MODEL_SCHEMA_VERSION) {
        return Err(ModelError::UnsupportedVersion(version.to_string()));
    }

    Ok(())
}

/// Drop CPU self times that are negative or not finite
///
/// **Private** - applied recursively to nested slices
fn sanitize_cpu_time(event: &mut Event) {
    if let Some(cpu) = event.cpu_self_time {
        if !cpu.is_finite() || cpu < 0.0 {
            warn!("Event {} has invalid CPU self time {}, ignoring it", event.id, cpu);
            event.cpu_self_time = None;
        }
    }
    for child in &mut event.sub_slices {
        sanitize_cpu_time(child);
    }
}

/// Resolve record event ids into events
///
/// **Private** - builds an id index over timelines and flow events
fn resolve_records<'m>(
    processes: &'m [Process],
    flow_events: &'m [Event],
    raw_records: Vec<RawInteractionRecord>,
) -> Result<Vec<InteractionRecord>, ModelError> {
    let mut index: HashMap<EventId, &'m Event> = HashMap::new();
    let mut duplicate = None;

    let mut add = |event: &'m Event| {
        if index.insert(event.id, event).is_some() && duplicate.is_none() {
            duplicate = Some(event.id);
        }
    };
    for process in processes {
        for thread in process.threads.values() {
            thread.slice_group.iterate_all_events(&mut add);
        }
    }
    flow_events.iter().for_each(&mut add);

    if let Some(id) = duplicate {
        return Err(ModelError::DuplicateEventId(id));
    }

    raw_records
        .into_iter()
        .map(|raw| -> Result<InteractionRecord, ModelError> {
            let events = raw
                .associated_event_ids
                .iter()
                .map(|id| {
                    index.get(id).map(|event| detached(event)).ok_or_else(|| {
                        ModelError::UnknownEvent {
                            record: raw.title.clone(),
                            id: *id,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(InteractionRecord::new(raw.title, raw.start_ms, raw.duration_ms)
                .with_associated_events(events))
        })
        .collect()
}

/// Copy an event without its nested slices
///
/// **Private** - records reference single events, not subtrees
fn detached(event: &Event) -> Event {
    Event {
        id: event.id,
        title: event.title.clone(),
        category: event.category.clone(),
        kind: event.kind,
        start_ms: event.start_ms,
        duration_ms: event.duration_ms,
        cpu_self_time: event.cpu_self_time,
        sub_slices: Vec::new(),
    }
}

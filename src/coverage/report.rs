//! Interaction-record coverage report.
//!
//! Coverage is the share of timeline events (by count and by CPU self time)
//! that are associated with at least one interaction record.

use super::collector::{collect_associated_events, collect_unassociated_events};
use super::cpu_time::total_cpu_duration;
use crate::model::TraceModel;
use crate::utils::config::RATIO_DISPLAY_PRECISION;
use log::{debug, info};

/// Coverage numbers for one trace model
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Number of distinct non-flow events associated with some record
    pub associated_events_count: usize,

    /// Number of timeline events not associated with any record
    pub unassociated_events_count: usize,

    /// CPU self time of associated events, in milliseconds
    pub associated_events_cpu_time_ms: f64,

    /// CPU self time of unassociated events, in milliseconds
    pub unassociated_events_cpu_time_ms: f64,

    /// `associated / (associated + unassociated)` by event count
    pub covered_events_count_ratio: f64,

    /// `associated / (associated + unassociated)` by CPU self time
    ///
    /// `None` when no event in the model carries CPU time, since the ratio is
    /// undefined. Callers must check this before display.
    pub covered_events_cpu_time_ratio: Option<f64>,
}

impl CoverageReport {
    pub fn total_events_count(&self) -> usize {
        self.associated_events_count + self.unassociated_events_count
    }

    pub fn total_cpu_time_ms(&self) -> f64 {
        self.associated_events_cpu_time_ms + self.unassociated_events_cpu_time_ms
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and the CLI
    pub fn summary(&self) -> String {
        let cpu_ratio = match self.covered_events_cpu_time_ratio {
            Some(ratio) => format!("{:.*}%", RATIO_DISPLAY_PRECISION, ratio * 100.0),
            None => "n/a".to_string(),
        };

        format!(
            "Events: {}/{} covered ({:.*}%) | CPU: {:.3}/{:.3} ms covered ({})",
            self.associated_events_count,
            self.total_events_count(),
            RATIO_DISPLAY_PRECISION,
            self.covered_events_count_ratio * 100.0,
            self.associated_events_cpu_time_ms,
            self.total_cpu_time_ms(),
            cpu_ratio
        )
    }
}

/// Compute interaction-record coverage for a trace model
///
/// **Public** - main entry point for coverage analysis
///
/// # Arguments
/// * `model` - Trace model with interaction records
///
/// # Returns
/// `None` if no record has a non-flow associated event, since coverage is not
/// measurable then. Otherwise the coverage report.
pub fn ir_coverage_from_model(model: &TraceModel) -> Option<CoverageReport> {
    let associated = collect_associated_events(model.interaction_records());

    if associated.is_empty() {
        debug!("No associated events, coverage is not measurable");
        return None;
    }

    let unassociated = collect_unassociated_events(model, &associated);

    let associated_cpu_ms = total_cpu_duration(&associated);
    let unassociated_cpu_ms = total_cpu_duration(&unassociated);

    let total_event_count = associated.len() + unassociated.len();
    let total_cpu_ms = associated_cpu_ms + unassociated_cpu_ms;

    let covered_events_cpu_time_ratio = if total_cpu_ms > 0.0 {
        Some(associated_cpu_ms / total_cpu_ms)
    } else {
        None
    };

    let report = CoverageReport {
        associated_events_count: associated.len(),
        unassociated_events_count: unassociated.len(),
        associated_events_cpu_time_ms: associated_cpu_ms,
        unassociated_events_cpu_time_ms: unassociated_cpu_ms,
        covered_events_count_ratio: associated.len() as f64 / total_event_count as f64,
        covered_events_cpu_time_ratio,
    };

    info!("IR coverage: {}", report.summary());

    Some(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, InteractionRecord, Process, Thread};

    #[test]
    fn test_no_records_is_none() {
        let thread = Thread::new(1).with_slice(Event::slice(1, "a"));
        let model = TraceModel::new().with_process(Process::new(1).with_thread(thread));

        assert!(ir_coverage_from_model(&model).is_none());
    }

    #[test]
    fn test_only_flow_associations_is_none() {
        let model = TraceModel::new().with_interaction_record(
            InteractionRecord::new("ir", 0.0, 1.0).with_associated_event(Event::flow(1, "link")),
        );

        assert!(ir_coverage_from_model(&model).is_none());
    }

    #[test]
    fn test_zero_cpu_ratio_is_none() {
        let slice = Event::slice(1, "a");
        let model = TraceModel::new()
            .with_process(Process::new(1).with_thread(Thread::new(1).with_slice(slice.clone())))
            .with_interaction_record(
                InteractionRecord::new("ir", 0.0, 1.0).with_associated_event(slice),
            );

        let report = ir_coverage_from_model(&model).unwrap();

        assert_eq!(report.covered_events_count_ratio, 1.0);
        assert_eq!(report.covered_events_cpu_time_ratio, None);
        assert!(report.summary().contains("n/a"));
    }

    #[test]
    fn test_summary_format() {
        let report = CoverageReport {
            associated_events_count: 1,
            unassociated_events_count: 3,
            associated_events_cpu_time_ms: 2.0,
            unassociated_events_cpu_time_ms: 6.0,
            covered_events_count_ratio: 0.25,
            covered_events_cpu_time_ratio: Some(0.25),
        };

        assert_eq!(
            report.summary(),
            "Events: 1/4 covered (25.0%) | CPU: 2.000/8.000 ms covered (25.0%)"
        );
    }
}

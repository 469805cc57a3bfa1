//! Report command implementation.
//!
//! The report command:
//! 1. Loads the trace model snapshot
//! 2. Computes interaction-record coverage
//! 3. Prints the coverage numbers

use crate::coverage::{ir_coverage_from_model, CoverageReport};
use crate::model::load_model;
use crate::utils::config::DEFAULT_MODEL_PATH;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Path to the trace model snapshot
    pub model_path: PathBuf,

    /// Print every field instead of the one-line summary
    pub detailed: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            detailed: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The computed report, or `None` when the model has nothing to measure
///
/// # Errors
/// * Model file cannot be read or is invalid
pub fn execute_report(args: &ReportArgs) -> Result<Option<CoverageReport>> {
    let start_time = Instant::now();

    info!("Step 1/2: Loading trace model...");
    let model = load_model(&args.model_path).with_context(|| {
        format!("Failed to load trace model from {}", args.model_path.display())
    })?;

    debug!(
        "Model has {} interaction records over {} events",
        model.interaction_records().len(),
        model.event_count()
    );

    info!("Step 2/2: Computing interaction-record coverage...");
    let report = ir_coverage_from_model(&model);

    match &report {
        Some(report) => println!("{}", render_report(report, args.detailed)),
        None => println!("No interaction-record coverage data"),
    }

    info!("Report completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Format a report for the terminal
///
/// **Public** - shared by the CLI and tests
pub fn render_report(report: &CoverageReport, detailed: bool) -> String {
    if !detailed {
        return report.summary();
    }

    let cpu_ratio = report.covered_events_cpu_time_ratio.map_or_else(
        || "undefined (no CPU time recorded)".to_string(),
        |r| format!("{:.4}", r),
    );

    [
        format!("Associated events:          {}", report.associated_events_count),
        format!("Unassociated events:        {}", report.unassociated_events_count),
        format!("Associated CPU time (ms):   {:.3}", report.associated_events_cpu_time_ms),
        format!(
            "Unassociated CPU time (ms): {:.3}",
            report.unassociated_events_cpu_time_ms
        ),
        format!("Covered events ratio:       {:.4}", report.covered_events_count_ratio),
        format!("Covered CPU time ratio:     {}", cpu_ratio),
    ]
    .join("\n")
}

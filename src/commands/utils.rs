use crate::model::load_model;
use crate::utils::config::MODEL_SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a trace model snapshot
pub fn validate_model_file(file_path: &Path) -> Result<()> {
    println!("Validating model: {}", file_path.display());

    let model = load_model(file_path)?;

    println!("✓ Valid trace model");
    println!("  Processes: {}", model.all_processes().count());
    println!("  Threads: {}", model.thread_count());
    println!("  Timeline Events: {}", model.event_count());
    println!("  Flow Events: {}", model.flow_events().len());
    println!("  Interaction Records: {}", model.interaction_records().len());

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("IR Coverage v{}", env!("CARGO_PKG_VERSION"));
    println!("Model Schema: v{}", MODEL_SCHEMA_VERSION);
    println!();
    println!("Interaction-record coverage analysis for performance trace models.");
}

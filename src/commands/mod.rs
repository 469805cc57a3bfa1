//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod report;
pub mod utils;

// Re-export main command functions
pub use report::{execute_report, render_report, ReportArgs};
pub use utils::{display_version, validate_model_file};

//! IR Coverage
//!
//! Interaction-record coverage analysis for performance trace models.
//!
//! Given a trace model whose interaction records have been associated with
//! timeline events, this crate splits every timeline event into those covered
//! by some record and those that are not, and reports count and CPU-time
//! coverage ratios.
//!
//! ## Getting Started
//!
//! ```ignore
//! use ir_coverage::coverage::ir_coverage_from_model;
//! use ir_coverage::model::load_model;
//!
//! let model = load_model("trace_model.json")?;
//! match ir_coverage_from_model(&model) {
//!     Some(report) => println!("{}", report.summary()),
//!     None => println!("No interaction-record coverage data"),
//! }
//! ```

pub mod commands;
pub mod coverage;
pub mod model;
pub mod utils;

pub use coverage::{ir_coverage_from_model, CoverageReport, EventSet};
pub use model::TraceModel;

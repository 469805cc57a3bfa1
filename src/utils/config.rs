//! Configuration and constants for the library and CLI.

/// Trace model snapshot schema version accepted by the loader
pub const MODEL_SCHEMA_VERSION: &str = "1.0.0";

/// Model file used when `--model` is not given
pub const DEFAULT_MODEL_PATH: &str = "trace_model.json";

/// Environment variable that can supply the model path
pub const MODEL_PATH_ENV: &str = "IR_COVERAGE_MODEL";

/// Decimal places used when printing ratios as percentages
pub const RATIO_DISPLAY_PRECISION: usize = 1;

// Field names for the process/thread collections (exporters disagree on casing)
pub const PROCESS_FIELD_NAMES: &[&str] = &["processes", "process_map", "processMap"];
pub const RECORD_FIELD_NAMES: &[&str] = &["interaction_records", "interactionRecords", "irs"];

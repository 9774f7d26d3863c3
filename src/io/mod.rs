/// Command-line interface and batch file processing
pub mod cli;
/// Run constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Map text parsing
pub mod map;
/// Batch progress display
pub mod progress;
/// Plain-text run reports
pub mod report;

//! Input/output, configuration and error handling

/// Command-line parsing and batch orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Rasterization and PNG export
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Batch progress display
pub mod progress;

//! Input/output: errors, defaults, CLI, rendering and tables

/// Command-line parsing and bundle writing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG chart and preview rendering
pub mod image;
/// Batch progress display
pub mod progress;
/// CSV index, palette and stitch count tables
pub mod table;

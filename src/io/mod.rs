//! Input/output, configuration and error handling

/// Command-line argument parsing and command dispatch
pub mod cli;
/// Compile-time constants and defaults
pub mod configuration;
/// Crate error type
pub mod error;
/// PNG rendering of patterns
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Plaintext pattern file reading
pub mod plaintext;
/// Batch import progress display
pub mod progress;

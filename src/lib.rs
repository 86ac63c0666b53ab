#![warn(missing_docs)]
//! Library support for the mow task runner.

/// Trailing-argument splitting into positional and keyword values.
mod args;
/// Builtin `list` and `help` tasks.
mod builtins;
/// Command-line interface wiring and dispatch.
mod cli;
/// Warning aggregation and diagnostic output.
mod diagnostics;
/// Discovery of task-definition files across search directories.
mod discovery;
/// Task resolution and single-shot invocation.
mod dispatch;
/// Error handling for the crate.
mod error;
/// Locating and loading task-definition files.
mod loader;
/// Mowfile schema and parsing.
mod manifest;
/// Color palette and styling for CLI output.
mod palette;
/// Path expansion and normalization utilities.
mod paths;
/// Task registry with builtin and user task maps.
mod registry;
/// Task descriptors and executable behaviors.
mod task;
/// Fixtures shared by the crate's tests.
#[cfg(test)]
mod testutil;

pub use crate::error::{Error, Result};

/// Run the CLI, returning a structured error on failure.
pub fn run() -> Result<()> {
    cli::run()
}

//! Error types for the mow task runner.

use std::{env::VarError, path::PathBuf, process::ExitCode, result::Result as StdResult};

use thiserror::Error;

/// Result type for mow operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// A user task tried to reuse a builtin task name.
    #[error("Task '{name}' collides with a builtin task name.")]
    BuiltinNameCollision {
        /// The reserved name.
        name: String,
    },
    /// A registration derived an empty task name.
    #[error("Task registered from handler '{handler}' derives an empty name.")]
    EmptyTaskName {
        /// Handler identifier the name was derived from.
        handler: String,
    },
    /// A directory contained no recognized task-definition file.
    #[error("No Mowfile found in {}.", dir.display())]
    NoTaskFile {
        /// Directory that was searched.
        dir: PathBuf,
    },
    /// A task-definition file was found but could not be loaded.
    #[error("Failed to load Mowfile at {}: {message}", path.display())]
    ModuleLoad {
        /// Path to the file that failed to load.
        path: PathBuf,
        /// Description of the underlying failure.
        message: String,
    },
    /// No search directory contained a task-definition file.
    #[error("Could not find a Mowfile. Valid filenames: {}", candidates.join(", "))]
    NoMowfiles {
        /// Filenames recognized by the loader.
        candidates: &'static [&'static str],
    },
    /// A search-path entry could not be expanded.
    #[error("Invalid path in MOW_PATH: {path}: {source}")]
    PathExpansion {
        /// Input path that failed to expand.
        path: String,
        /// Underlying expansion error.
        source: shellexpand::LookupError<VarError>,
    },
    /// The requested task is not registered.
    #[error("Task not found: {name}")]
    TaskNotFound {
        /// Missing task name.
        name: String,
    },
    /// The task ran but its behavior faulted.
    #[error("Task '{name}' failed: {message} (see 'mow help {name}')")]
    TaskExecution {
        /// Name of the task that faulted.
        name: String,
        /// Message describing the fault.
        message: String,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}

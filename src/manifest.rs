//! Mowfile schema and parsing.

use serde::Deserialize;

use crate::task::{DEFAULT_USAGE, Version};

/// Parsed contents of a single task-definition file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Sibling task files to load before this one.
    #[serde(default)]
    pub include: Vec<String>,
    /// Task declarations, in document order.
    #[serde(default, rename = "task")]
    pub tasks: Vec<TaskEntry>,
}

/// One `[[task]]` declaration in a Mowfile.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEntry {
    /// Handler identifier the task name is derived from (`db__migrate`).
    #[serde(rename = "fn")]
    pub handler: String,
    /// Explicit task name; overrides derivation when present.
    #[serde(default)]
    pub name: Option<String>,
    /// Author name or email.
    #[serde(default)]
    pub author: Option<String>,
    /// Task version as `[major, minor, patch]`.
    #[serde(default)]
    pub version: Version,
    /// Usage template with `%prog` and `%name` placeholders.
    #[serde(default = "default_usage")]
    pub usage: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Command lines executed, in order, when the task runs.
    #[serde(default)]
    pub run: Vec<String>,
}

/// Default usage template for entries that declare none.
fn default_usage() -> String {
    DEFAULT_USAGE.to_string()
}

/// Errors that can occur when parsing a Mowfile.
#[derive(Debug, Clone)]
pub struct ManifestError {
    /// A human-readable error message.
    pub message: String,
}

impl ManifestError {
    /// Create a new manifest error message.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Parse a Mowfile from its contents.
pub fn parse_manifest(contents: &str) -> Result<Manifest, ManifestError> {
    let manifest: Manifest =
        toml::from_str(contents).map_err(|error| ManifestError::new(error.to_string()))?;

    for entry in &manifest.tasks {
        if entry.handler.is_empty() {
            return Err(ManifestError::new("task entry has an empty 'fn' identifier"));
        }
    }

    Ok(manifest)
}

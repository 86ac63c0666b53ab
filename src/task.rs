//! Task descriptors and executable behaviors.

use std::{fmt, path::PathBuf};

use serde::Deserialize;

use crate::{args::KeywordArgs, registry::Registry};

/// Default usage template applied when a task declares none.
pub const DEFAULT_USAGE: &str = "%prog %name";

/// Namespace separator in task names.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Three-component task version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Version(pub u32, pub u32, pub u32);

impl Default for Version {
    fn default() -> Self {
        Self(0, 1, 0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

/// Context handed to a task behavior for one invocation.
pub struct Invocation<'a> {
    /// Registry the task was resolved from.
    pub registry: &'a Registry,
    /// Positional arguments after the task name.
    pub positional: &'a [String],
    /// Keyword arguments after the task name.
    pub keyword: &'a KeywordArgs,
    /// Whether colored output is enabled.
    pub color: bool,
}

/// Fault raised by a task behavior.
#[derive(Debug, Clone)]
pub struct BehaviorError {
    /// A human-readable fault message.
    pub message: String,
}

impl BehaviorError {
    /// Create a new behavior fault message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for BehaviorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Executable behavior of a task.
pub type Behavior = Box<dyn Fn(&Invocation<'_>) -> Result<(), BehaviorError>>;

/// Where a task definition came from.
#[derive(Debug, Clone)]
pub struct Origin {
    /// Task-definition file the task was declared in.
    pub file: PathBuf,
    /// Handler identifier inside that file.
    pub handler: String,
}

/// A registered task: immutable metadata plus its behavior.
pub struct Task {
    /// Final, possibly namespaced, task name.
    pub(crate) name: String,
    /// Optional author name or email.
    pub(crate) author: Option<String>,
    /// Task version.
    pub(crate) version: Version,
    /// Usage line, expanded once at registration time.
    pub(crate) usage: String,
    /// Task description.
    pub(crate) description: String,
    /// Whether this is a builtin task.
    pub(crate) builtin: bool,
    /// Definition location for user tasks.
    pub(crate) origin: Option<Origin>,
    /// The task's executable behavior.
    pub(crate) behavior: Behavior,
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("author", &self.author)
            .field("version", &self.version)
            .field("usage", &self.usage)
            .field("builtin", &self.builtin)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl Task {
    /// Return the task's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Derive the final task name from an explicit name or a handler identifier.
///
/// An explicit non-empty name wins verbatim. Otherwise every doubled
/// underscore in the handler identifier becomes the namespace separator,
/// left to right. Un-namespaced results are allowed.
pub(crate) fn derive_name(explicit: Option<&str>, handler: &str) -> String {
    match explicit {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => handler.replace("__", &NAMESPACE_SEPARATOR.to_string()),
    }
}

/// Expand a usage template for a task, once, at registration time.
pub(crate) fn expand_usage(template: &str, program: &str, name: &str) -> String {
    template.replace("%prog", program).replace("%name", name)
}

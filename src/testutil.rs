//! Test utilities for building Mowfile directory trees and registrations.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::{
    registry::Registration,
    task::{DEFAULT_USAGE, Task, Version},
};

/// Minimal Mowfile body declaring one task.
pub fn mowfile_content(handler: &str, description: &str) -> String {
    format!("[[task]]\nfn = \"{handler}\"\ndescription = \"{description}\"\n")
}

/// A registration request with defaults and a no-op behavior.
pub fn registration(handler: &str, name: Option<&str>) -> Registration {
    Registration {
        name: name.map(ToString::to_string),
        handler: handler.to_string(),
        author: None,
        version: Version::default(),
        usage: DEFAULT_USAGE.to_string(),
        description: String::new(),
        origin: None,
        behavior: Box::new(|_| Ok(())),
    }
}

/// A builtin task descriptor with a no-op behavior.
pub fn builtin_task(name: &str) -> Task {
    Task {
        name: name.to_string(),
        author: None,
        version: Version::default(),
        usage: format!("mow {name}"),
        description: String::new(),
        builtin: true,
        origin: None,
        behavior: Box::new(|_| Ok(())),
    }
}

/// Test fixture holding a temporary tree of Mowfile directories.
pub struct TestFixture {
    /// Root temp directory (holds everything).
    root: TempDir,
}

impl TestFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    /// The fixture root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create (if needed) and return a directory under the fixture root.
    pub fn dir(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).expect("create dir");
        dir
    }

    /// Write a file into a fixture directory.
    pub fn write_file(&self, dir: &str, filename: &str, contents: &str) -> PathBuf {
        let path = self.dir(dir).join(filename);
        fs::write(&path, contents).expect("write file");
        path
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

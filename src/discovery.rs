//! Discovery of task-definition files across the search directories.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
    loader::{MOW_FILE_NAMES, SearchPath, load_dir},
    paths,
    registry::Registry,
};

/// Environment variable naming extra search directories.
pub const MOW_PATH_VAR: &str = "MOW_PATH";

/// Build the ordered candidate directory list for one run.
///
/// Closest first: the explicit `-C` directory (or the current directory),
/// then `~/.mow`, then each `MOW_PATH` entry in the order given. Entries are
/// tilde- and environment-expanded.
pub fn candidate_dirs(directory: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    match directory {
        Some(dir) => dirs.push(dir.to_path_buf()),
        None => {
            if let Ok(cwd) = env::current_dir() {
                dirs.push(cwd);
            }
        }
    }

    if let Some(home_tasks) = paths::home_tasks_dir() {
        dirs.push(home_tasks);
    }

    let raw = env::var(MOW_PATH_VAR).unwrap_or_default();
    for entry in env::split_paths(&raw) {
        let entry = entry.to_string_lossy().into_owned();
        if entry.is_empty() {
            continue;
        }
        dirs.push(paths::expand_search_entry(&entry)?);
    }

    Ok(dirs)
}

/// Load every candidate directory into the registry, farthest first.
///
/// Walking the list in reverse makes closer directories apply later, so
/// their registrations win same-name replacement. Missing directories and
/// directories without a Mowfile are skipped; a file that was found but
/// failed to load aborts the run. A registration rejected for colliding
/// with a builtin is reported and skipped without aborting.
pub fn discover(registry: &mut Registry, dirs: &[PathBuf], diagnostics: &mut Diagnostics) -> Result<()> {
    registry.reset_user();

    let mut search = SearchPath::default();
    let mut found = 0usize;

    for dir in dirs.iter().rev() {
        if !dir.is_dir() {
            diagnostics.note(format!("skipping missing directory {}", dir.display()));
            continue;
        }

        match load_dir(dir, &mut search) {
            Ok(module) => {
                found += 1;
                diagnostics.note(format!(
                    "loaded {} ({} task(s))",
                    module.path.display(),
                    module.manifest.tasks.len()
                ));
                for registration in module.registrations {
                    match registry.apply(registration, diagnostics) {
                        Ok(()) => {}
                        Err(error @ Error::BuiltinNameCollision { .. }) => {
                            diagnostics.warn(error.to_string());
                        }
                        Err(error) => return Err(error),
                    }
                }
            }
            Err(Error::NoTaskFile { .. }) => {
                diagnostics.note(format!("no Mowfile in {}", dir.display()));
            }
            Err(error) => return Err(error),
        }
    }

    if found == 0 {
        return Err(Error::NoMowfiles {
            candidates: &MOW_FILE_NAMES,
        });
    }

    Ok(())
}

//! Locating and loading task-definition files.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    args::FlagValue,
    error::{Error, Result},
    manifest::{Manifest, TaskEntry, parse_manifest},
    registry::Registration,
    task::{Behavior, BehaviorError, Invocation, Origin},
};

/// Recognized task-definition filenames, in priority order.
pub const MOW_FILE_NAMES: [&str; 4] = ["mowfile", "Mowfile", "mowfile.toml", "Mowfile.toml"];

/// Search path used to resolve files named in `include` lists.
///
/// While a file loads, its own directory is prepended so the file may
/// reference siblings; the entry is popped again when loading finishes,
/// on the error path too.
#[derive(Debug, Default)]
pub struct SearchPath {
    /// Directories searched front to back.
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Resolve a relative file name against the search directories.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.dirs.iter().map(|dir| dir.join(name)).find(|path| path.is_file())
    }

    /// Run `body` with `dir` prepended, popping it on every exit path.
    ///
    /// Failures travel back as `Result` values, so the pop below always runs
    /// before control returns to the caller.
    fn scoped<R>(&mut self, dir: PathBuf, body: impl FnOnce(&mut Self) -> R) -> R {
        self.dirs.insert(0, dir);
        let result = body(self);
        self.dirs.remove(0);
        result
    }

    /// Number of directories currently on the path.
    #[cfg(test)]
    fn depth(&self) -> usize {
        self.dirs.len()
    }
}

/// A successfully loaded task-definition file.
pub struct LoadedModule {
    /// Path of the file that was loaded.
    pub path: PathBuf,
    /// The parsed manifest, kept for introspection.
    pub manifest: Manifest,
    /// Registration requests collected in load order.
    pub registrations: Vec<Registration>,
}

impl fmt::Debug for LoadedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModule")
            .field("path", &self.path)
            .field("manifest", &self.manifest)
            .field("registrations", &self.registrations.len())
            .finish_non_exhaustive()
    }
}

/// Find the task-definition file in a directory, if any.
fn find_mowfile(dir: &Path) -> Option<PathBuf> {
    MOW_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load the single recognized task-definition file from a directory.
///
/// The first candidate filename that exists wins; candidates are never
/// merged. Returns `NoTaskFile` when the directory has no candidate and
/// `ModuleLoad` when a found file fails to load cleanly.
pub fn load_dir(dir: &Path, search: &mut SearchPath) -> Result<LoadedModule> {
    let Some(path) = find_mowfile(dir) else {
        return Err(Error::NoTaskFile {
            dir: dir.to_path_buf(),
        });
    };

    let mut registrations = Vec::new();
    let mut visited = Vec::new();
    let manifest = load_file(&path, search, &mut visited, &mut registrations).map_err(|message| {
        Error::ModuleLoad {
            path: path.clone(),
            message,
        }
    })?;

    Ok(LoadedModule {
        path,
        manifest,
        registrations,
    })
}

/// Load one file, then its includes, collecting registration requests.
///
/// Included files load before the including file's own tasks, so the
/// including file wins same-name replacement. A file already seen in this
/// load is skipped, which also breaks include cycles.
fn load_file(
    path: &Path,
    search: &mut SearchPath,
    visited: &mut Vec<PathBuf>,
    out: &mut Vec<Registration>,
) -> std::result::Result<Manifest, String> {
    let canonical = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if visited.contains(&canonical) {
        return Ok(Manifest::default());
    }
    visited.push(canonical);

    let contents = fs::read_to_string(path)
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;
    let manifest = parse_manifest(&contents)
        .map_err(|error| format!("failed to parse {}: {}", path.display(), error.message))?;

    let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
    search.scoped(dir.clone(), |search| {
        for include in &manifest.include {
            let Some(resolved) = search.resolve(include) else {
                return Err(format!(
                    "unresolved include '{include}' in {}",
                    path.display()
                ));
            };
            load_file(&resolved, search, visited, out)?;
        }
        Ok(())
    })?;

    for entry in &manifest.tasks {
        out.push(registration_for(entry, path, &dir));
    }

    Ok(manifest)
}

/// Build a registration request for one manifest entry.
fn registration_for(entry: &TaskEntry, path: &Path, dir: &Path) -> Registration {
    Registration {
        name: entry.name.clone(),
        handler: entry.handler.clone(),
        author: entry.author.clone(),
        version: entry.version,
        usage: entry.usage.clone(),
        description: entry.description.clone(),
        origin: Some(Origin {
            file: path.to_path_buf(),
            handler: entry.handler.clone(),
        }),
        behavior: command_behavior(entry.run.clone(), dir.to_path_buf()),
    }
}

/// Build a behavior that runs each declared command line in order.
///
/// Commands run from the Mowfile's directory. The invocation's positional
/// arguments and re-rendered keyword flags are appended to every command.
fn command_behavior(commands: Vec<String>, dir: PathBuf) -> Behavior {
    Box::new(move |invocation| {
        for line in &commands {
            run_command(line, &dir, invocation)?;
        }
        Ok(())
    })
}

/// Spawn one command line and wait for it.
fn run_command(line: &str, dir: &Path, invocation: &Invocation<'_>) -> std::result::Result<(), BehaviorError> {
    let mut parts = shell_words::split(line)
        .map_err(|error| BehaviorError::new(format!("bad command `{line}`: {error}")))?;
    let program = parts
        .first()
        .cloned()
        .ok_or_else(|| BehaviorError::new("empty command in task definition"))?;
    let args = parts.split_off(1);

    let mut command = Command::new(&program);
    command.args(&args).current_dir(dir);
    command.args(invocation.positional);
    for (key, value) in invocation.keyword {
        command.args(render_flag(key, value));
    }

    let status = command
        .status()
        .map_err(|error| BehaviorError::new(format!("failed to run `{program}`: {error}")))?;

    if !status.success() {
        return Err(BehaviorError::new(format!("`{line}` exited with {status}")));
    }

    Ok(())
}

/// Re-render a keyword argument as long flags for a child command.
fn render_flag(key: &str, value: &FlagValue) -> Vec<String> {
    match value {
        FlagValue::Switch => vec![format!("--{key}")],
        FlagValue::Text(text) => vec![format!("--{key}={text}")],
        FlagValue::Many(values) => values
            .iter()
            .flat_map(|value| render_flag(key, value))
            .collect(),
    }
}

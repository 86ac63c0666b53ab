//! Path expansion and normalization utilities.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use path_clean::PathClean;

use crate::error::{Error, Result};

/// Return the user's task-definition directory (`~/.mow`), if resolvable.
pub fn home_tasks_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mow"))
}

/// Expand a `MOW_PATH` entry (tilde and environment variables) and normalize it.
pub fn expand_search_entry(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|error| Error::PathExpansion {
        path: raw.to_string(),
        source: error,
    })?;
    Ok(normalize_path(Path::new(expanded.as_ref())))
}

/// Normalize a path for comparisons by cleaning and canonicalizing when possible.
pub fn normalize_path(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(_) => path.clean(),
    }
}

/// Render a path for display, using a tilde prefix for the home directory.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

//! Task registry with builtin and user task maps.

use std::collections::HashMap;

use crate::{
    diagnostics::Diagnostics,
    error::{Error, Result},
    paths::display_path,
    task::{Behavior, Origin, Task, Version, derive_name, expand_usage},
};

/// A request to register one user task, collected while loading a Mowfile.
pub struct Registration {
    /// Explicit task name; wins verbatim when non-empty.
    pub name: Option<String>,
    /// Handler identifier the name is otherwise derived from.
    pub handler: String,
    /// Optional author name or email.
    pub author: Option<String>,
    /// Task version.
    pub version: Version,
    /// Unexpanded usage template.
    pub usage: String,
    /// Task description.
    pub description: String,
    /// Definition location.
    pub origin: Option<Origin>,
    /// The task's executable behavior.
    pub behavior: Behavior,
}

/// Registry of builtin and user tasks for one run.
///
/// The builtin map is populated once at bootstrap and never mutated after;
/// the user map is reset at the start of each discovery run. Their key sets
/// stay disjoint.
pub struct Registry {
    /// Program invocation name used for `%prog` expansion.
    program: String,
    /// Builtin tasks keyed by name.
    builtins: HashMap<String, Task>,
    /// User tasks keyed by name.
    user: HashMap<String, Task>,
}

impl Registry {
    /// Create an empty registry for the given program name.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            builtins: HashMap::new(),
            user: HashMap::new(),
        }
    }

    /// The program invocation name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Insert a builtin task. Bootstrap only, before any user task exists.
    pub fn register_builtin(&mut self, task: Task) {
        self.builtins.insert(task.name.clone(), task);
    }

    /// Apply one registration request to the user map.
    ///
    /// Derives the final name, expands the usage template once, and rejects
    /// names reserved by builtins. Replacing an existing user task succeeds
    /// with a warning.
    pub fn apply(&mut self, registration: Registration, diagnostics: &mut Diagnostics) -> Result<()> {
        let name = derive_name(registration.name.as_deref(), &registration.handler);
        if name.is_empty() {
            return Err(Error::EmptyTaskName {
                handler: registration.handler,
            });
        }
        if self.builtins.contains_key(&name) {
            return Err(Error::BuiltinNameCollision { name });
        }

        let task = Task {
            usage: expand_usage(&registration.usage, &self.program, &name),
            name: name.clone(),
            author: registration.author,
            version: registration.version,
            description: registration.description,
            builtin: false,
            origin: registration.origin,
            behavior: registration.behavior,
        };

        if let Some(previous) = self.user.insert(name.clone(), task) {
            match &previous.origin {
                Some(origin) => diagnostics.warn(format!(
                    "task '{name}' replaced (was defined in {})",
                    display_path(&origin.file)
                )),
                None => diagnostics.warn(format!("task '{name}' replaced")),
            }
        }

        Ok(())
    }

    /// Clear the user map at the start of a discovery run.
    pub fn reset_user(&mut self) {
        self.user.clear();
    }

    /// Resolve a task name, builtins first.
    pub fn resolve(&self, name: &str) -> Option<&Task> {
        self.builtins.get(name).or_else(|| self.user.get(name))
    }

    /// List builtin and user tasks, each sorted by name.
    ///
    /// With a namespace filter, user tasks are restricted to names under
    /// that namespace prefix.
    pub fn list(&self, namespace: Option<&str>) -> (Vec<&Task>, Vec<&Task>) {
        let mut builtins: Vec<&Task> = self.builtins.values().collect();
        builtins.sort_by_key(|task| task.name.as_str());

        let mut user: Vec<&Task> = match namespace {
            Some(namespace) => {
                let prefix = format!("{namespace}:");
                self.user
                    .values()
                    .filter(|task| task.name.starts_with(&prefix))
                    .collect()
            }
            None => self.user.values().collect(),
        };
        user.sort_by_key(|task| task.name.as_str());

        (builtins, user)
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::{
        diagnostics::Diagnostics,
        error::Error,
        testutil::{builtin_task, registration},
    };

    #[test]
    fn applies_a_registration() {
        let mut registry = Registry::new("mow");
        let mut diagnostics = Diagnostics::default();

        registry
            .apply(registration("test__task", None), &mut diagnostics)
            .expect("registration should apply");

        let task = registry.resolve("test:task").expect("task resolves");
        assert_eq!(task.name(), "test:task");
        assert!(!task.builtin);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn expands_usage_at_registration_time() {
        let mut registry = Registry::new("mow");
        let mut diagnostics = Diagnostics::default();

        let mut request = registration("greet", None);
        request.usage = "usage: %prog %name WHO".to_string();
        registry
            .apply(request, &mut diagnostics)
            .expect("registration should apply");

        let task = registry.resolve("greet").expect("task resolves");
        assert_eq!(task.usage, "usage: mow greet WHO");
    }

    #[test]
    fn rejects_builtin_name_collision() {
        let mut registry = Registry::new("mow");
        registry.register_builtin(builtin_task("list"));
        let mut diagnostics = Diagnostics::default();

        let error = registry
            .apply(registration("ignored", Some("list")), &mut diagnostics)
            .expect_err("registration should fail");
        assert!(matches!(error, Error::BuiltinNameCollision { name } if name == "list"));
    }

    #[test]
    fn rejects_empty_derived_name() {
        let mut registry = Registry::new("mow");
        let mut diagnostics = Diagnostics::default();

        let mut request = registration("x", None);
        request.handler = String::new();
        let error = registry
            .apply(request, &mut diagnostics)
            .expect_err("registration should fail");
        assert!(matches!(error, Error::EmptyTaskName { .. }));
    }

    #[test]
    fn replacement_warns_and_keeps_second() {
        let mut registry = Registry::new("mow");
        let mut diagnostics = Diagnostics::default();

        let mut first = registration("test__task", None);
        first.description = "first".to_string();
        let mut second = registration("test__task", None);
        second.description = "second".to_string();

        registry.apply(first, &mut diagnostics).expect("first applies");
        registry.apply(second, &mut diagnostics).expect("second applies");

        assert_eq!(diagnostics.warnings().len(), 1);
        assert!(diagnostics.warnings()[0].contains("test:task"));
        let task = registry.resolve("test:task").expect("task resolves");
        assert_eq!(task.description, "second");
    }

    #[test]
    fn builtins_take_precedence_in_resolve() {
        let mut registry = Registry::new("mow");
        registry.register_builtin(builtin_task("help"));
        assert!(registry.resolve("help").expect("resolves").builtin);
    }

    #[test]
    fn reset_clears_only_user_tasks() {
        let mut registry = Registry::new("mow");
        registry.register_builtin(builtin_task("list"));
        let mut diagnostics = Diagnostics::default();
        registry
            .apply(registration("build", None), &mut diagnostics)
            .expect("registration should apply");

        registry.reset_user();

        assert!(registry.resolve("build").is_none());
        assert!(registry.resolve("list").is_some());
    }

    #[test]
    fn lists_sorted_and_filtered() {
        let mut registry = Registry::new("mow");
        registry.register_builtin(builtin_task("list"));
        registry.register_builtin(builtin_task("help"));
        let mut diagnostics = Diagnostics::default();
        for handler in ["db__migrate", "db__seed", "docs__build"] {
            registry
                .apply(registration(handler, None), &mut diagnostics)
                .expect("registration should apply");
        }

        let (builtins, user) = registry.list(None);
        let builtin_names: Vec<&str> = builtins.iter().map(|task| task.name()).collect();
        let user_names: Vec<&str> = user.iter().map(|task| task.name()).collect();
        assert_eq!(builtin_names, vec!["help", "list"]);
        assert_eq!(user_names, vec!["db:migrate", "db:seed", "docs:build"]);

        let (_, filtered) = registry.list(Some("db"));
        let filtered_names: Vec<&str> = filtered.iter().map(|task| task.name()).collect();
        assert_eq!(filtered_names, vec!["db:migrate", "db:seed"]);
    }
}

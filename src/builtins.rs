//! Builtin `list` and `help` tasks.

use crate::{
    palette,
    paths::display_path,
    registry::Registry,
    task::{Behavior, BehaviorError, Invocation, Task, Version, expand_usage},
};

/// Register the builtin tasks. Called once at process bootstrap.
pub fn register_builtins(registry: &mut Registry) {
    let program = registry.program().to_string();
    registry.register_builtin(builtin(
        &program,
        "list",
        "List all available tasks.",
        "usage: %prog %name [namespace]",
        Box::new(run_list),
    ));
    registry.register_builtin(builtin(
        &program,
        "help",
        "Get help for a task.",
        "usage: %prog %name task [--extended]",
        Box::new(run_help),
    ));
}

/// Build a builtin task descriptor.
fn builtin(program: &str, name: &str, description: &str, usage: &str, behavior: Behavior) -> Task {
    Task {
        usage: expand_usage(usage, program, name),
        name: name.to_string(),
        author: Some("brandonvfx".to_string()),
        version: Version::default(),
        description: description.to_string(),
        builtin: true,
        origin: None,
        behavior,
    }
}

/// Behavior of the `list` task.
fn run_list(invocation: &Invocation<'_>) -> Result<(), BehaviorError> {
    let namespace = invocation.positional.first().map(String::as_str);
    let (builtins, user) = invocation.registry.list(namespace);
    let color = invocation.color;

    if namespace.is_none() {
        println!("{}", palette::fmt_heading("Builtin Tasks:", color));
        for task in builtins {
            print_entry(task, color);
        }
        println!();
    }

    println!("{}", palette::fmt_heading("Loaded Tasks:", color));
    for task in user {
        print_entry(task, color);
    }

    Ok(())
}

/// Print one `list` line: padded name and wrapped description.
fn print_entry(task: &Task, color: bool) {
    let description = task.description.trim();
    let options = textwrap::Options::new(72).subsequent_indent("                           ");
    let wrapped = textwrap::fill(description, options);
    println!(
        "{}: {}",
        palette::fmt_task_name(&format!("{:<24}", task.name), color),
        palette::fmt_description(&wrapped, color)
    );
}

/// Behavior of the `help` task.
fn run_help(invocation: &Invocation<'_>) -> Result<(), BehaviorError> {
    let Some(name) = invocation.positional.first() else {
        return Err(BehaviorError::new("a task name is required"));
    };
    let extended = invocation.keyword.contains_key("extended");
    let color = invocation.color;

    let Some(task) = invocation.registry.resolve(name) else {
        println!("Task not found: {name}");
        return Ok(());
    };

    if task.builtin {
        println!("{}", palette::fmt_heading("Builtin Task", color));
    }
    print_field("Name:", &task.name, color);
    print_field("Description:", task.description.trim(), color);
    if extended {
        print_field("Author:", task.author.as_deref().unwrap_or("-"), color);
        print_field("Version:", &task.version.to_string(), color);
        if let Some(origin) = &task.origin {
            print_field("File:", &display_path(&origin.file), color);
            print_field("Function:", &origin.handler, color);
        }
    }
    println!();
    println!("{}", task.usage);

    Ok(())
}

/// Print one labeled help field.
fn print_field(label: &str, value: &str, color: bool) {
    println!("{} {value}", palette::fmt_label(label, color));
}

#[cfg(test)]
mod tests {
    use super::register_builtins;
    use crate::{
        args::ArgBundle,
        registry::Registry,
        task::Invocation,
    };

    fn invoke(registry: &Registry, name: &str, bundle: &ArgBundle) -> Result<(), String> {
        let task = registry.resolve(name).expect("builtin resolves");
        let invocation = Invocation {
            registry,
            positional: &bundle.positional,
            keyword: &bundle.keyword,
            color: false,
        };
        (task.behavior)(&invocation).map_err(|error| error.message)
    }

    #[test]
    fn registers_list_and_help() {
        let mut registry = Registry::new("mow");
        register_builtins(&mut registry);

        let list = registry.resolve("list").expect("list resolves");
        assert!(list.builtin);
        assert_eq!(list.usage, "usage: mow list [namespace]");
        assert!(registry.resolve("help").expect("help resolves").builtin);
    }

    #[test]
    fn list_runs_without_arguments() {
        let mut registry = Registry::new("mow");
        register_builtins(&mut registry);

        invoke(&registry, "list", &ArgBundle::default()).expect("list runs");
    }

    #[test]
    fn help_requires_a_task_name() {
        let mut registry = Registry::new("mow");
        register_builtins(&mut registry);

        let error = invoke(&registry, "help", &ArgBundle::default()).expect_err("help fails");
        assert_eq!(error, "a task name is required");
    }

    #[test]
    fn help_reports_unknown_tasks_without_failing() {
        let mut registry = Registry::new("mow");
        register_builtins(&mut registry);

        let bundle = ArgBundle {
            positional: vec!["nope".to_string()],
            ..ArgBundle::default()
        };
        invoke(&registry, "help", &bundle).expect("help still succeeds");
    }
}

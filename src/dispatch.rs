//! Task resolution and single-shot invocation.

use crate::{
    args::ArgBundle,
    error::{Error, Result},
    registry::Registry,
    task::Invocation,
};

/// Resolve a task name and invoke it with the argument bundle.
///
/// Builtins take lookup priority. A fault raised by the behavior is caught
/// and mapped to `TaskExecution` with the cause preserved; nothing is
/// retried and no second task ever runs.
pub fn dispatch(registry: &Registry, name: &str, bundle: &ArgBundle, color: bool) -> Result<()> {
    let Some(task) = registry.resolve(name) else {
        return Err(Error::TaskNotFound {
            name: name.to_string(),
        });
    };

    let invocation = Invocation {
        registry,
        positional: &bundle.positional,
        keyword: &bundle.keyword,
        color,
    };

    (task.behavior)(&invocation).map_err(|error| Error::TaskExecution {
        name: name.to_string(),
        message: error.message,
    })
}

//! CLI parsing and task dispatch.

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::{ArgAction, Parser, ValueEnum};

use crate::{
    args::split_args,
    builtins::register_builtins,
    diagnostics::Diagnostics,
    discovery::{candidate_dirs, discover},
    dispatch::dispatch,
    error::Result,
    registry::Registry,
};

/// Parsed command line arguments.
#[derive(Debug, Parser)]
#[command(name = "mow", version, about = "Minimal namespaced task runner")]
struct Cli {
    /// Control colored output.
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,
    /// Increase verbosity (-v, -vv).
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,
    /// Directory searched for a Mowfile before any other location.
    #[arg(short = 'C', long = "directory")]
    directory: Option<PathBuf>,
    /// Task to run (defaults to list).
    task: Option<String>,
    /// Arguments passed through to the task.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Supported color output modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    /// Only colorize when stdout is a TTY.
    Auto,
    /// Always colorize output.
    Always,
    /// Never colorize output.
    Never,
}

impl ColorMode {
    /// Determine whether color output should be enabled.
    fn enabled(self) -> bool {
        match self {
            Self::Auto => io::stdout().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Run one discovery pass and dispatch the requested task.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let color = cli.color.enabled();
    let mut diagnostics = Diagnostics::new(cli.verbose);

    let mut registry = Registry::new("mow");
    register_builtins(&mut registry);

    let dirs = candidate_dirs(cli.directory.as_deref())?;
    discover(&mut registry, &dirs, &mut diagnostics)?;

    let task = cli.task.as_deref().unwrap_or("list");
    let bundle = split_args(&cli.args);
    let result = dispatch(&registry, task, &bundle, color);

    if cli.verbose > 1 {
        diagnostics.print_warning_summary();
    }

    result
}

//! Developer workflow tasks for the mow workspace.

use std::{
    env, fs,
    path::Path,
    process::{Command, ExitCode, Stdio},
};

fn main() -> ExitCode {
    match parse_command() {
        Some(Task::Tidy) => run_tidy(),
        Some(Task::Demo) => run_demo(),
        None => {
            eprintln!("Usage: cargo xtask <tidy|demo>");
            ExitCode::from(2)
        }
    }
}

enum Task {
    Tidy,
    Demo,
}

fn parse_command() -> Option<Task> {
    let mut args = env::args();
    let _ = args.next();
    match args.next().as_deref() {
        Some("tidy") if args.next().is_none() => Some(Task::Tidy),
        Some("demo") if args.next().is_none() => Some(Task::Demo),
        _ => None,
    }
}

fn run_tidy() -> ExitCode {
    if !run_fmt() {
        return ExitCode::from(1);
    }

    if !run_clippy() {
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Write a scratch Mowfile and run `mow list` against it.
fn run_demo() -> ExitCode {
    let dir = env::temp_dir().join("mow-demo");
    if let Err(err) = fs::create_dir_all(&dir) {
        eprintln!("Failed to create {}: {err}", dir.display());
        return ExitCode::from(1);
    }

    let mowfile = dir.join("Mowfile");
    let contents = "[[task]]\n\
                    fn = \"demo__hello\"\n\
                    description = \"Say hello from the demo Mowfile.\"\n\
                    run = [\"echo hello from mow\"]\n";
    if let Err(err) = fs::write(&mowfile, contents) {
        eprintln!("Failed to write {}: {err}", mowfile.display());
        return ExitCode::from(1);
    }

    let dir_arg = dir.display().to_string();
    if !run_command("cargo", &["run", "-q", "--", "-C", &dir_arg, "list"]) {
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run_fmt() -> bool {
    if Path::new("rustfmt-nightly.toml").exists() {
        run_command(
            "cargo",
            &[
                "+nightly",
                "fmt",
                "--all",
                "--",
                "--config-path",
                "./rustfmt-nightly.toml",
            ],
        )
    } else {
        run_command("cargo", &["+nightly", "fmt", "--all"])
    }
}

fn run_clippy() -> bool {
    run_command(
        "cargo",
        &[
            "clippy",
            "-q",
            "--fix",
            "--all",
            "--all-targets",
            "--all-features",
            "--allow-dirty",
            "--tests",
            "--examples",
        ],
    )
}

fn run_command(program: &str, args: &[&str]) -> bool {
    match Command::new(program)
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
    {
        Ok(status) if status.success() => true,
        Ok(status) => {
            eprintln!("Command `{program}` failed with status {status}");
            false
        }
        Err(err) => {
            eprintln!("Failed to run `{program}`: {err}");
            false
        }
    }
}

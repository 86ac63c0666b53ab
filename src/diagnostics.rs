//! Warning aggregation and diagnostic output.

/// Aggregates warnings and verbose notes for one run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Verbosity level from the CLI (`-v` flags).
    verbose: u8,
    /// Collected warning messages.
    warnings: Vec<String>,
}

impl Diagnostics {
    /// Create a new diagnostics collector.
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            warnings: Vec::new(),
        }
    }

    /// Record a warning and print it immediately.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        eprintln!("Warning: {message}");
        self.warnings.push(message);
    }

    /// Print a note, only when verbose output was requested.
    pub fn note(&self, message: impl Into<String>) {
        if self.verbose > 0 {
            eprintln!("{}", message.into());
        }
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Print a warning summary when warnings were emitted.
    pub fn print_warning_summary(&self) {
        if self.warnings.is_empty() {
            return;
        }

        eprintln!("Completed with {} warning(s).", self.warnings.len());
    }
}

//! Color palette and styling for CLI output.
//!
//! This module defines a consistent visual style for all CLI output.
//! Colors are designed for modern terminals with full color support.

use owo_colors::{OwoColorize, Style};

/// Style for task names - the primary identifier, visually prominent.
pub fn task_name() -> Style {
    Style::new().cyan().bold()
}

/// Style for section headings like "Builtin Tasks:" or "Loaded Tasks:".
pub fn heading() -> Style {
    Style::new().white().bold()
}

/// Style for labels like "Name:", "Author:", "File:".
pub fn label() -> Style {
    Style::new().blue()
}

/// Style for description text - readable but subdued.
pub fn description() -> Style {
    Style::new().dimmed()
}

/// Format a task name with styling.
pub fn fmt_task_name(name: &str, use_color: bool) -> String {
    if use_color {
        name.style(task_name()).to_string()
    } else {
        name.to_string()
    }
}

/// Format a section heading with styling.
pub fn fmt_heading(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(heading()).to_string()
    } else {
        text.to_string()
    }
}

/// Format a label with styling.
pub fn fmt_label(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(label()).to_string()
    } else {
        text.to_string()
    }
}

/// Format description text with styling.
pub fn fmt_description(text: &str, use_color: bool) -> String {
    if use_color {
        text.style(description()).to_string()
    } else {
        text.to_string()
    }
}

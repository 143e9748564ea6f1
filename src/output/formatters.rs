//! Formatting utilities for terminal output

use crate::core::PayoffMatrix;

/// Render a matrix with every line indented
#[must_use]
pub fn indented_matrix(matrix: &PayoffMatrix, indent: &str) -> String {
    matrix
        .to_string()
        .lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a 0..=1 rate as a bar
#[must_use]
pub fn rate_bar(rate: f64, width: usize) -> String {
    create_progress_bar(rate, 1.0, width)
}

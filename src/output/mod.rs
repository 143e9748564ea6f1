//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_catalog, print_solve_report, print_sweep_result};
pub use formatters::{indented_matrix, rate_bar};

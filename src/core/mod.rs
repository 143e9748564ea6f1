//! Core domain types for matrix games
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod matrix;

pub use matrix::{MatrixError, PayoffMatrix};

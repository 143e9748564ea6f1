//! Saddle Point Solver
//!
//! Computes the pure-strategy Nash equilibrium (saddle point) of two-player
//! zero-sum games: dominance elimination, maximin/minimax, and the equality
//! test that decides whether optimal play is deterministic.
//!
//! # Quick Start
//!
//! ```rust
//! use saddle::core::PayoffMatrix;
//! use saddle::solver::find_saddle_point;
//!
//! let matrix = PayoffMatrix::new(vec![vec![1.0, 2.0], vec![0.0, 3.0]]).unwrap();
//!
//! let saddle = find_saddle_point(&matrix).unwrap();
//! assert_eq!((saddle.row, saddle.col, saddle.value), (0, 0, 1.0));
//! ```

// Core domain types
pub mod core;

// Equilibrium analysis
pub mod solver;

// Matrix loading and built-in games
pub mod games;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

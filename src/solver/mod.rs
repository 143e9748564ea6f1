//! Equilibrium analysis for zero-sum matrix games
//!
//! This module contains the analytical operations: the two guaranteed-value
//! scans, dominance elimination, and the saddle point test that composes them.

pub mod maximin;
pub mod minimax;
pub mod reduction;
pub mod saddle;

pub use maximin::row_maximin;
pub use minimax::column_minimax;
pub use reduction::reduce_by_dominance;
pub use saddle::{SaddlePoint, find_saddle_point};

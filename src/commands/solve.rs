//! Game analysis command
//!
//! Runs the full pipeline on one matrix and collects everything the driver
//! prints: shapes, both players' guaranteed values, and the verdict.

use crate::core::PayoffMatrix;
use crate::solver::{
    SaddlePoint, column_minimax, find_saddle_point, reduce_by_dominance, row_maximin,
};

/// Result of analyzing a single game
pub struct SolveReport {
    pub original_shape: (usize, usize),
    pub reduced: PayoffMatrix,
    pub maximin: (usize, f64),
    pub minimax: (usize, f64),
    pub saddle: Option<SaddlePoint>,
}

impl SolveReport {
    /// Whether dominance elimination removed any strategy
    #[must_use]
    pub fn was_reduced(&self) -> bool {
        self.original_shape != self.reduced.shape()
    }
}

/// Analyze a game end to end
///
/// The maximin and minimax pairs are computed on the reduced matrix, the same
/// matrix the saddle point test runs against, so all reported indices share
/// one frame of reference.
#[must_use]
pub fn analyze_matrix(matrix: &PayoffMatrix) -> SolveReport {
    let reduced = reduce_by_dominance(matrix);
    let maximin = row_maximin(&reduced);
    let minimax = column_minimax(&reduced);
    let saddle = find_saddle_point(matrix);

    SolveReport {
        original_shape: matrix.shape(),
        reduced,
        maximin,
        minimax,
        saddle,
    }
}

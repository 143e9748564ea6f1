//! Minimax column selection for Player 2
//!
//! The column player concedes the least by choosing the column whose maximum
//! payoff to Player 1 is smallest.

use crate::core::PayoffMatrix;
use rayon::prelude::*;

/// Select the column conceding the smallest guaranteed payoff
///
/// For every column the maximum across rows is the most Player 1 can extract
/// from it; the returned column minimizes that maximum. When several columns
/// share the minimal maximum, the lowest column index wins.
///
/// # Examples
/// ```
/// use saddle::core::PayoffMatrix;
/// use saddle::solver::column_minimax;
///
/// let matrix = PayoffMatrix::new(vec![vec![1.0, 2.0], vec![0.0, 3.0]]).unwrap();
///
/// let (col, value) = column_minimax(&matrix);
/// assert_eq!(col, 0);
/// assert_eq!(value, 1.0);
/// ```
///
/// # Panics
/// Will not panic - a `PayoffMatrix` always has at least one column.
#[must_use]
pub fn column_minimax(matrix: &PayoffMatrix) -> (usize, f64) {
    (0..matrix.cols())
        .into_par_iter()
        .map(|col| (col, matrix.column_max(col)))
        .reduce_with(better_column)
        .expect("matrix has at least one column")
}

// Lexicographic minimum on (value, lowest index). Associative, so the
// parallel reduction is identical to a sequential first-occurring-min scan.
fn better_column(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    if b.1 < a.1 || (b.1 == a.1 && b.0 < a.0) {
        b
    } else {
        a
    }
}

//! Dominance elimination for payoff matrices
//!
//! Shrinks a game by removing strategies that can never be optimal before the
//! equilibrium analysis runs. The test applied is deliberately narrow: a row
//! is dominated when every entry equals its own minimum (a constant row), and
//! a column when every entry equals its own maximum. A constant strategy
//! offers its player a single outcome and nothing better.

use crate::core::PayoffMatrix;

/// Iteratively remove dominated rows and columns
///
/// Each pass removes every constant row, then every constant column of the
/// row-reduced matrix. Passes repeat while the matrix is larger than 2x2 in
/// both dimensions and the previous pass made progress. The input matrix is
/// never mutated; the caller gets a fresh matrix (or an identical copy when
/// nothing is eliminable).
///
/// A pass never empties the game: if every remaining row (or column) is
/// flagged at once, that dimension is left alone for the pass. The result
/// therefore always keeps at least one row and one column.
///
/// # Examples
/// ```
/// use saddle::core::PayoffMatrix;
/// use saddle::solver::reduce_by_dominance;
///
/// let matrix = PayoffMatrix::new(vec![
///     vec![2.0, 2.0, 2.0],
///     vec![1.0, 5.0, 0.0],
///     vec![4.0, 1.0, 3.0],
/// ])
/// .unwrap();
///
/// let reduced = reduce_by_dominance(&matrix);
/// assert_eq!(reduced.shape(), (2, 3)); // Constant first row is gone
/// ```
#[must_use]
pub fn reduce_by_dominance(matrix: &PayoffMatrix) -> PayoffMatrix {
    let mut current = matrix.clone();

    while current.rows() > 2 && current.cols() > 2 {
        let next = eliminate_pass(&current);
        if next.shape() == current.shape() {
            // Nothing eliminable; without this check the loop never ends
            break;
        }
        current = next;
    }

    current
}

/// One elimination pass: rows first, then columns of the row-reduced matrix
fn eliminate_pass(matrix: &PayoffMatrix) -> PayoffMatrix {
    let rows_reduced = eliminate_constant_rows(matrix);
    eliminate_constant_columns(&rows_reduced)
}

fn eliminate_constant_rows(matrix: &PayoffMatrix) -> PayoffMatrix {
    let keep: Vec<bool> = (0..matrix.rows())
        .map(|r| !is_constant(matrix.row(r).iter().copied()))
        .collect();

    if keep.iter().all(|&k| !k) {
        // Every row flagged at once; removing them would empty the game
        return matrix.clone();
    }
    matrix.retain_rows(&keep)
}

fn eliminate_constant_columns(matrix: &PayoffMatrix) -> PayoffMatrix {
    let keep: Vec<bool> = (0..matrix.cols())
        .map(|c| !is_constant(matrix.column(c)))
        .collect();

    if keep.iter().all(|&k| !k) {
        return matrix.clone();
    }
    matrix.retain_columns(&keep)
}

/// True when every entry equals the first (so the row minimum or column
/// maximum equals every entry)
fn is_constant(mut entries: impl Iterator<Item = f64>) -> bool {
    match entries.next() {
        Some(first) => entries.all(|v| v == first),
        None => true,
    }
}

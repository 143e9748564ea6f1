//! Maximin row selection for Player 1
//!
//! The row player guarantees the best worst case by choosing the row whose
//! minimum payoff is largest.

use crate::core::PayoffMatrix;
use rayon::prelude::*;

/// Select the row with the largest guaranteed payoff
///
/// For every row the minimum across columns is the worst outcome Player 2 can
/// force against it; the returned row maximizes that minimum. When several
/// rows share the maximal minimum, the lowest row index wins.
///
/// # Examples
/// ```
/// use saddle::core::PayoffMatrix;
/// use saddle::solver::row_maximin;
///
/// let matrix = PayoffMatrix::new(vec![vec![1.0, 2.0], vec![0.0, 3.0]]).unwrap();
///
/// let (row, value) = row_maximin(&matrix);
/// assert_eq!(row, 0);
/// assert_eq!(value, 1.0);
/// ```
///
/// # Panics
/// Will not panic - a `PayoffMatrix` always has at least one row.
#[must_use]
pub fn row_maximin(matrix: &PayoffMatrix) -> (usize, f64) {
    (0..matrix.rows())
        .into_par_iter()
        .map(|row| (row, matrix.row_min(row)))
        .reduce_with(better_row)
        .expect("matrix has at least one row")
}

// Lexicographic maximum on (value, lowest index). Associative, so the
// parallel reduction is identical to a sequential first-occurring-max scan.
fn better_row(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> PayoffMatrix {
        PayoffMatrix::new(rows).unwrap()
    }

    #[test]
    fn maximin_two_by_two() {
        let m = matrix(vec![vec![1.0, 2.0], vec![0.0, 3.0]]);
        assert_eq!(row_maximin(&m), (0, 1.0));
    }

    #[test]
    fn maximin_three_by_three() {
        // Row minima are (-1, -2, -1); the largest is -1, first at row 0
        let m = matrix(vec![
            vec![1.0, -1.0, 3.0],
            vec![2.0, 0.0, -2.0],
            vec![-1.0, 4.0, -1.0],
        ]);
        assert_eq!(row_maximin(&m), (0, -1.0));
    }

    #[test]
    fn maximin_single_cell() {
        let m = matrix(vec![vec![5.0]]);
        assert_eq!(row_maximin(&m), (0, 5.0));
    }

    #[test]
    fn maximin_single_row() {
        let m = matrix(vec![vec![4.0, -2.0, 7.0]]);
        assert_eq!(row_maximin(&m), (0, -2.0));
    }

    #[test]
    fn maximin_single_column() {
        // With one column each row minimum is its only entry
        let m = matrix(vec![vec![1.0], vec![9.0], vec![3.0]]);
        assert_eq!(row_maximin(&m), (1, 9.0));
    }

    #[test]
    fn maximin_tie_breaks_to_first_row() {
        let m = matrix(vec![
            vec![5.0, 2.0],
            vec![2.0, 8.0],
            vec![2.0, 3.0],
        ]);
        // Rows 0, 1, and 2 all have minimum 2
        assert_eq!(row_maximin(&m), (0, 2.0));
    }

    #[test]
    fn maximin_value_is_min_of_chosen_row() {
        let m = matrix(vec![
            vec![3.0, 7.0, 1.0],
            vec![4.0, 2.0, 6.0],
            vec![8.0, 5.0, 9.0],
        ]);
        let (row, value) = row_maximin(&m);

        assert_eq!(value, m.row_min(row));
        // No other row has a strictly greater minimum
        for r in 0..m.rows() {
            assert!(m.row_min(r) <= value);
        }
    }

    #[test]
    fn maximin_all_negative() {
        let m = matrix(vec![vec![-5.0, -3.0], vec![-1.0, -8.0]]);
        // Row minima: -5 and -8
        assert_eq!(row_maximin(&m), (0, -5.0));
    }
}

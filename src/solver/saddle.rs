//! Saddle point detection
//!
//! End-to-end equilibrium analysis: reduce the game by dominance, compute
//! both players' guaranteed values, and test whether they meet in a single
//! deterministic outcome.

use crate::core::PayoffMatrix;
use crate::solver::{column_minimax, reduce_by_dominance, row_maximin};

/// A pure-strategy equilibrium of a zero-sum game
///
/// `row` and `col` index the reduced matrix that was actually analyzed, not
/// the caller's original matrix when reduction removed strategies. `value` is
/// the common maximin/minimax payoff: the entry at `(row, col)` is the
/// minimum of its row and the maximum of its column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaddlePoint {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// Find the pure-strategy saddle point of a zero-sum game
///
/// Reduces the matrix by dominance, then compares Player 1's maximin value
/// with Player 2's minimax value on the reduced game. Equal values mean
/// neither player gains by randomizing and the game is strictly determined.
///
/// Returns `None` when the two values differ, or when reduction collapsed a
/// dimension below two strategies (too little game left to analyze). A matrix
/// that was already 1xN, Nx1, or 1x1 is analyzed as-is; such games are
/// trivially determined by one player's single option.
///
/// The value comparison is exact `f64` equality: both values are verbatim
/// entries of the reduced matrix (the whole pipeline compares entries, it
/// never does arithmetic on them), so a genuine saddle point cannot be lost
/// to rounding.
///
/// # Examples
/// ```
/// use saddle::core::PayoffMatrix;
/// use saddle::solver::find_saddle_point;
///
/// let matrix = PayoffMatrix::new(vec![vec![1.0, 2.0], vec![0.0, 3.0]]).unwrap();
///
/// let saddle = find_saddle_point(&matrix).unwrap();
/// assert_eq!((saddle.row, saddle.col, saddle.value), (0, 0, 1.0));
/// ```
#[must_use]
pub fn find_saddle_point(matrix: &PayoffMatrix) -> Option<SaddlePoint> {
    let reduced = reduce_by_dominance(matrix);

    let collapsed_rows = reduced.rows() < 2 && reduced.rows() < matrix.rows();
    let collapsed_cols = reduced.cols() < 2 && reduced.cols() < matrix.cols();
    if collapsed_rows || collapsed_cols {
        return None;
    }

    let (row, row_value) = row_maximin(&reduced);
    let (col, col_value) = column_minimax(&reduced);

    if row_value == col_value {
        Some(SaddlePoint {
            row,
            col,
            value: row_value,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn matrix(rows: Vec<Vec<f64>>) -> PayoffMatrix {
        PayoffMatrix::new(rows).unwrap()
    }

    #[test]
    fn saddle_in_two_by_two() {
        let m = matrix(vec![vec![1.0, 2.0], vec![0.0, 3.0]]);
        let saddle = find_saddle_point(&m).unwrap();

        assert_eq!(saddle, SaddlePoint {
            row: 0,
            col: 0,
            value: 1.0
        });
    }

    #[test]
    fn no_saddle_when_values_differ() {
        // Irreducible 3x3 with maximin -1 and minimax 2
        let m = matrix(vec![
            vec![1.0, -1.0, 3.0],
            vec![2.0, 0.0, -2.0],
            vec![-1.0, 4.0, -1.0],
        ]);
        assert_eq!(find_saddle_point(&m), None);
    }

    #[test]
    fn single_cell_is_its_own_saddle() {
        let m = matrix(vec![vec![5.0]]);
        let saddle = find_saddle_point(&m).unwrap();

        assert_eq!(saddle, SaddlePoint {
            row: 0,
            col: 0,
            value: 5.0
        });
    }

    #[test]
    fn single_row_game_is_determined() {
        // Player 2 simply picks the smallest concession
        let m = matrix(vec![vec![4.0, -2.0, 7.0]]);
        let saddle = find_saddle_point(&m).unwrap();

        assert_eq!(saddle, SaddlePoint {
            row: 0,
            col: 1,
            value: -2.0
        });
    }

    #[test]
    fn single_column_game_is_determined() {
        let m = matrix(vec![vec![1.0], vec![9.0], vec![3.0]]);
        let saddle = find_saddle_point(&m).unwrap();

        assert_eq!(saddle, SaddlePoint {
            row: 1,
            col: 0,
            value: 9.0
        });
    }

    #[test]
    fn saddle_in_irreducible_three_by_three() {
        // Row minima (1, -1, 2), column maxima (5, 2, 4): both meet at 2
        let m = matrix(vec![
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, -1.0],
            vec![5.0, 2.0, 4.0],
        ]);
        let saddle = find_saddle_point(&m).unwrap();

        assert_eq!(saddle, SaddlePoint {
            row: 2,
            col: 1,
            value: 2.0
        });
    }

    #[test]
    fn saddle_reported_in_reduced_indices() {
        // The constant first row is eliminated, so the winning strategy that
        // started as row 2 is reported as row 1 of the reduced game
        let m = matrix(vec![
            vec![3.0, 3.0, 3.0],
            vec![1.0, 4.0, 2.0],
            vec![2.0, 5.0, 2.0],
        ]);
        let saddle = find_saddle_point(&m).unwrap();

        assert_eq!(saddle, SaddlePoint {
            row: 1,
            col: 0,
            value: 2.0
        });
    }

    #[test]
    fn collapse_below_two_rows_yields_none() {
        // Two constant rows go in one pass, leaving a 1x3 remnant of what was
        // a 3x3 game
        let m = matrix(vec![
            vec![1.0, 1.0, 1.0],
            vec![2.0, 2.0, 2.0],
            vec![0.0, 5.0, 3.0],
        ]);
        assert_eq!(find_saddle_point(&m), None);
    }

    #[test]
    fn rock_paper_scissors_has_no_saddle() {
        let m = matrix(vec![
            vec![0.0, -1.0, 1.0],
            vec![1.0, 0.0, -1.0],
            vec![-1.0, 1.0, 0.0],
        ]);
        assert_eq!(find_saddle_point(&m), None);
    }

    #[test]
    fn saddle_value_matches_both_players() {
        let m = matrix(vec![
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, -1.0],
            vec![5.0, 2.0, 4.0],
        ]);
        let saddle = find_saddle_point(&m).unwrap();
        let reduced = reduce_by_dominance(&m);

        assert_eq!(saddle.value, row_maximin(&reduced).1);
        assert_eq!(saddle.value, column_minimax(&reduced).1);
        // The entry itself is the minimum of its row and maximum of its column
        assert_eq!(saddle.value, reduced.get(saddle.row, saddle.col));
        assert_eq!(saddle.value, reduced.row_min(saddle.row));
        assert_eq!(saddle.value, reduced.column_max(saddle.col));
    }

    #[test]
    fn maximin_never_exceeds_minimax_on_random_games() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let rows = rng.random_range(1..=6);
            let cols = rng.random_range(1..=6);
            let m = matrix(
                (0..rows)
                    .map(|_| {
                        (0..cols)
                            .map(|_| f64::from(rng.random_range(-9..=9)))
                            .collect()
                    })
                    .collect(),
            );

            let (_, lo) = row_maximin(&m);
            let (_, hi) = column_minimax(&m);
            assert!(lo <= hi, "maximin {lo} exceeded minimax {hi} on\n{m}");

            // When a saddle point is reported it equals both values of the
            // matrix actually analyzed
            if let Some(saddle) = find_saddle_point(&m) {
                let reduced = reduce_by_dominance(&m);
                assert_eq!(saddle.value, row_maximin(&reduced).1);
                assert_eq!(saddle.value, column_minimax(&reduced).1);
            }
        }
    }
}

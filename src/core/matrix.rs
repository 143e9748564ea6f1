//! Payoff matrix representation
//!
//! A `PayoffMatrix` stores the row player's payoffs for a two-player zero-sum
//! game. The column player's payoffs are the negation and are never stored.

use std::fmt;

/// A validated rectangular payoff matrix for the row player
///
/// Rows are Player 1 actions, columns are Player 2 actions. Construction
/// rejects empty, ragged, and non-finite input, so every `PayoffMatrix` in
/// circulation has at least one row and one column of finite entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffMatrix {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Error type for invalid matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    NoRows,
    NoColumns,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    NonFinite {
        row: usize,
        col: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "Matrix must have at least one row"),
            Self::NoColumns => write!(f, "Matrix must have at least one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} entries, expected {expected} (matrix must be rectangular)"
                )
            }
            Self::NonFinite { row, col } => {
                write!(f, "Entry at row {row}, column {col} is not a finite number")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

impl PayoffMatrix {
    /// Create a new matrix from a list of rows
    ///
    /// # Errors
    /// Returns `MatrixError` if:
    /// - The row list is empty
    /// - The first row is empty
    /// - Any row has a different length than the first
    /// - Any entry is NaN or infinite
    ///
    /// # Examples
    /// ```
    /// use saddle::core::PayoffMatrix;
    ///
    /// let matrix = PayoffMatrix::new(vec![vec![1.0, 2.0], vec![0.0, 3.0]]).unwrap();
    /// assert_eq!(matrix.shape(), (2, 2));
    ///
    /// assert!(PayoffMatrix::new(vec![]).is_err());
    /// assert!(PayoffMatrix::new(vec![vec![1.0], vec![1.0, 2.0]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Err(MatrixError::NoRows);
        }

        let cols = rows[0].len();
        if cols == 0 {
            return Err(MatrixError::NoColumns);
        }

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::NonFinite { row: r, col: c });
                }
            }
        }

        let row_count = rows.len();
        let values = rows.into_iter().flatten().collect();

        Ok(Self {
            values,
            rows: row_count,
            cols,
        })
    }

    /// Number of rows (Player 1 actions)
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (Player 2 actions)
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The payoff at a specific cell
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.values[row * self.cols + col]
    }

    /// A full row as a slice
    ///
    /// # Panics
    /// Panics if `row >= rows()`
    #[inline]
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterator over a full column, top to bottom
    ///
    /// # Panics
    /// Panics if `col >= cols()`
    #[inline]
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(col < self.cols, "column out of bounds");
        (0..self.rows).map(move |r| self.values[r * self.cols + col])
    }

    /// The minimum payoff in a row (Player 1's worst case for that action)
    ///
    /// # Panics
    /// Panics if `row >= rows()`
    #[must_use]
    pub fn row_min(&self, row: usize) -> f64 {
        self.row(row).iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// The maximum payoff in a column (Player 2's worst case for that action)
    ///
    /// # Panics
    /// Panics if `col >= cols()`
    #[must_use]
    pub fn column_max(&self, col: usize) -> f64 {
        self.column(col).fold(f64::NEG_INFINITY, f64::max)
    }

    /// A fresh matrix keeping only the rows where `keep` is true
    ///
    /// The original matrix is untouched.
    ///
    /// # Panics
    /// Panics if `keep.len() != rows()` or if no row would survive
    #[must_use]
    pub fn retain_rows(&self, keep: &[bool]) -> Self {
        assert_eq!(keep.len(), self.rows, "keep mask must cover every row");
        assert!(keep.iter().any(|&k| k), "cannot remove every row");

        let values: Vec<f64> = (0..self.rows)
            .filter(|&r| keep[r])
            .flat_map(|r| self.row(r).iter().copied())
            .collect();
        let rows = values.len() / self.cols;

        Self {
            values,
            rows,
            cols: self.cols,
        }
    }

    /// A fresh matrix keeping only the columns where `keep` is true
    ///
    /// The original matrix is untouched.
    ///
    /// # Panics
    /// Panics if `keep.len() != cols()` or if no column would survive
    #[must_use]
    pub fn retain_columns(&self, keep: &[bool]) -> Self {
        assert_eq!(keep.len(), self.cols, "keep mask must cover every column");
        assert!(keep.iter().any(|&k| k), "cannot remove every column");

        let cols = keep.iter().filter(|&&k| k).count();
        let values: Vec<f64> = (0..self.rows)
            .flat_map(|r| {
                self.row(r)
                    .iter()
                    .enumerate()
                    .filter(|&(c, _)| keep[c])
                    .map(|(_, &v)| v)
            })
            .collect();

        Self {
            values,
            rows: self.rows,
            cols,
        }
    }
}

impl fmt::Display for PayoffMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Right-align each column to its widest entry
        let rendered: Vec<Vec<String>> = (0..self.rows)
            .map(|r| self.row(r).iter().map(|v| format!("{v}")).collect())
            .collect();
        let widths: Vec<usize> = (0..self.cols)
            .map(|c| rendered.iter().map(|row| row[c].len()).max().unwrap_or(0))
            .collect();

        for (r, row) in rendered.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:>width$}", width = widths[c])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

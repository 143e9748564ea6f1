//! Payoff matrix loading utilities
//!
//! Parses matrices from plain text: one row per line, entries separated by
//! whitespace, blank lines skipped.

use crate::core::{MatrixError, PayoffMatrix};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for unparsable matrix text
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    BadNumber { line: usize, token: String },
    Matrix(MatrixError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Input contains no matrix rows"),
            Self::BadNumber { line, token } => {
                write!(f, "Line {line}: '{token}' is not a number")
            }
            Self::Matrix(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<MatrixError> for ParseError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

/// Parse a payoff matrix from whitespace-separated text
///
/// # Errors
/// Returns `ParseError` if the text holds no rows, a token fails to parse as
/// a number, or the parsed rows do not form a valid matrix (ragged rows,
/// NaN/infinite entries).
///
/// # Examples
/// ```
/// use saddle::games::parse_matrix;
///
/// let matrix = parse_matrix("1 2\n0 3").unwrap();
/// assert_eq!(matrix.shape(), (2, 2));
/// assert_eq!(matrix.get(1, 1), 3.0);
/// ```
pub fn parse_matrix(text: &str) -> Result<PayoffMatrix, ParseError> {
    let mut rows = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let row = trimmed
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| ParseError::BadNumber {
                    line: number + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, ParseError>>()?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(PayoffMatrix::new(rows)?)
}

/// Load a payoff matrix from a text file
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or one of kind
/// `InvalidData` wrapping the parse failure if its contents are not a matrix.
///
/// # Examples
/// ```no_run
/// use saddle::games::load_from_file;
///
/// let matrix = load_from_file("games/colonel.txt").unwrap();
/// println!("Loaded a {}x{} game", matrix.rows(), matrix.cols());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<PayoffMatrix> {
    let content = fs::read_to_string(path)?;
    parse_matrix(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_matrix() {
        let m = parse_matrix("1 2 3\n4 5 6").unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let m = parse_matrix("  1 2 \n\n0 3\n").unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn parse_negative_and_fractional() {
        let m = parse_matrix("-1.5 2\n0.25 -3").unwrap();
        assert_eq!(m.get(0, 0), -1.5);
        assert_eq!(m.get(1, 0), 0.25);
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!(parse_matrix(""), Err(ParseError::Empty));
        assert_eq!(parse_matrix("\n  \n"), Err(ParseError::Empty));
    }

    #[test]
    fn parse_bad_token_reports_line() {
        assert_eq!(
            parse_matrix("1 2\n3 four"),
            Err(ParseError::BadNumber {
                line: 2,
                token: "four".to_string()
            })
        );
    }

    #[test]
    fn parse_ragged_rows_rejected() {
        assert_eq!(
            parse_matrix("1 2\n3"),
            Err(ParseError::Matrix(MatrixError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }))
        );
    }

    #[test]
    fn parse_nan_token_rejected() {
        // "nan" parses as a float but is not a usable payoff
        assert_eq!(
            parse_matrix("1 nan"),
            Err(ParseError::Matrix(MatrixError::NonFinite {
                row: 0,
                col: 1
            }))
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("no/such/file.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

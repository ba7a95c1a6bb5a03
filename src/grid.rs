//! Immutable rectangular board of integer cell weights.
//!
//! A [`Grid`] is validated once on construction and never mutated afterwards.
//! Cells are stored row-major; `get(row, col)` addresses logical row `row`
//! (bit `row` in every [`Mask`](crate::utils::Mask)) and column `col`.
//!
//! The textual input format is the one the command-line tool reads:
//! whitespace-separated integers, first the column count, then the row count,
//! then `rows × cols` cell values in row-major order.
//!
//! ```
//! use domino_dp::Grid;
//!
//! let grid: Grid = "2 2\n1 2\n3 4\n".parse().unwrap();
//! assert_eq!(grid.rows(), 2);
//! assert_eq!(grid.get(1, 0), 3);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::utils::MAX_ROWS;

/// Errors raised while building or parsing a [`Grid`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has {rows} rows, at most {max} are supported")]
    TooManyRows { rows: usize, max: usize },
    #[error("grid dimensions {rows}x{cols} overflow the cell count")]
    Overflow { rows: usize, cols: usize },
    #[error("a {rows}x{cols} grid needs {expected} cells, got {found}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("missing {0}")]
    MissingDimension(&'static str),
    #[error("invalid {what} '{token}'")]
    InvalidToken { what: &'static str, token: String },
    #[error("expected {expected} cell values, found {found}")]
    MissingValues { expected: usize, found: usize },
    #[error("unexpected trailing value '{0}'")]
    TrailingValue(String),
    #[error("cell ({row}, {col}) = {value} exceeds the magnitude limit {limit} for this grid size")]
    CellOutOfRange {
        row: usize,
        col: usize,
        value: i64,
        limit: u64,
    },
}

/// Rectangular table of signed cell weights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

impl Grid {
    /// Build a grid from row-major `cells`.
    ///
    /// Zero rows or zero columns are accepted; such a grid has no cells.
    ///
    /// Every cell must satisfy `|v| <= i64::MAX / (rows * cols)`, so no sum of
    /// cell weights can overflow the `i64` accumulator.
    pub fn new(rows: usize, cols: usize, cells: Vec<i64>) -> Result<Self, GridError> {
        if rows > MAX_ROWS {
            return Err(GridError::TooManyRows {
                rows,
                max: MAX_ROWS,
            });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::Overflow { rows, cols })?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                rows,
                cols,
                expected,
                found: cells.len(),
            });
        }
        let limit = cell_limit(expected);
        if let Some(idx) = cells.iter().position(|v| v.unsigned_abs() > limit) {
            return Err(GridError::CellOutOfRange {
                row: idx / cols,
                col: idx % cols,
                value: cells[idx],
                limit,
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from a list of rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, GridError> {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(n.saturating_mul(cols));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Self::new(n, cols, cells)
    }

    /// Parse `cols rows v00 v01 ...` from whitespace-separated text.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut tokens = text.split_whitespace();
        let cols = parse_dimension(tokens.next(), "column count")?;
        let rows = parse_dimension(tokens.next(), "row count")?;
        if rows > MAX_ROWS {
            return Err(GridError::TooManyRows {
                rows,
                max: MAX_ROWS,
            });
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(GridError::Overflow { rows, cols })?;

        let mut cells = Vec::with_capacity(expected);
        for token in tokens.by_ref().take(expected) {
            let value = token.parse::<i64>().map_err(|_| GridError::InvalidToken {
                what: "cell value",
                token: token.to_string(),
            })?;
            cells.push(value);
        }
        if cells.len() < expected {
            return Err(GridError::MissingValues {
                expected,
                found: cells.len(),
            });
        }
        if let Some(extra) = tokens.next() {
            return Err(GridError::TrailingValue(extra.to_string()));
        }
        Self::new(rows, cols, cells)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True if the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Weight of the cell at (`row`, `col`).
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of range");
        self.cells[row * self.cols + col]
    }

    /// All weights of one row.
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    /// Sum of the strictly positive cells, an upper bound on any tiling.
    pub fn positive_total(&self) -> i64 {
        self.cells.iter().filter(|&&v| v > 0).sum()
    }

    /// Copy of this grid with one cell replaced.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn with_cell(&self, row: usize, col: usize, value: i64) -> Result<Self, GridError> {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of range");
        let mut cells = self.cells.clone();
        cells[row * self.cols + col] = value;
        Self::new(self.rows, self.cols, cells)
    }
}

/// Largest cell magnitude for which the absolute sum of `cells` values fits in `i64`.
#[inline]
fn cell_limit(cells: usize) -> u64 {
    i64::MAX as u64 / cells.max(1) as u64
}

fn parse_dimension(token: Option<&str>, what: &'static str) -> Result<usize, GridError> {
    let token = token.ok_or(GridError::MissingDimension(what))?;
    token.parse::<usize>().map_err(|_| GridError::InvalidToken {
        what,
        token: token.to_string(),
    })
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    /// Writes the grid back in the input format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.cols, self.rows)?;
        for row in 0..self.rows {
            let line = self
                .row(row)
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

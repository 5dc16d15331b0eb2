use std::fmt;
use std::str::FromStr;

use crate::error::TableauError;

/// A standard-form simplex tableau.
///
/// Rows `0..rows-1` are constraints and the last row is the objective row,
/// stored negated so that a negative entry marks an improving column. The
/// last column holds the right-hand side.
///
/// Construction only checks the shape. Whether the matrix really is in
/// standard form (all `<=`, non-negative RHS, slack identity block) is up to
/// the caller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    pub(crate) data: Vec<Vec<f64>>,
}

impl Tableau {
    /// Build a tableau from its rows, objective row last
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TableauError> {
        if rows.len() < 2 {
            return Err(TableauError::TooFewRows(rows.len()));
        }

        let n_cols = rows[0].len();
        if n_cols < 2 {
            return Err(TableauError::TooFewColumns(n_cols));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(TableauError::RaggedRow {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(TableauError::NonFinite { row: i, col: j });
            }
        }

        Ok(Self { data: rows })
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data[0].len()
    }

    pub fn num_constraints(&self) -> usize {
        self.rows() - 1
    }

    /// Structural plus slack variables, i.e. every column except the RHS
    pub fn num_variables(&self) -> usize {
        self.cols() - 1
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row]
    }

    pub fn objective_row(&self) -> &[f64] {
        &self.data[self.rows() - 1]
    }

    pub fn rhs(&self, row: usize) -> f64 {
        self.data[row][self.cols() - 1]
    }

    /// The bottom-right cell: current value of the objective
    pub fn objective_value(&self) -> f64 {
        self.rhs(self.rows() - 1)
    }

    /// True when no objective-row entry (RHS excluded) is negative
    pub fn is_optimal(&self) -> bool {
        let obj = self.objective_row();
        obj[..obj.len() - 1].iter().all(|&v| v >= 0.0)
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data
    }
}

impl TryFrom<Vec<Vec<f64>>> for Tableau {
    type Error = TableauError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Tableau> for Vec<Vec<f64>> {
    fn from(tableau: Tableau) -> Self {
        tableau.data
    }
}

/// Parses the plain-text tableau format: one row per line, objective row
/// last, cells separated by whitespace or commas. `#` starts a comment and
/// blank lines are skipped.
impl FromStr for Tableau {
    type Err = TableauError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();

        for (idx, line) in source.lines().enumerate() {
            let content = line.split('#').next().unwrap_or("");
            let mut row = Vec::new();
            for token in content
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty())
            {
                let value = token.parse::<f64>().map_err(|_| TableauError::InvalidNumber {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
                row.push(value);
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }

        Self::from_rows(rows)
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::render_rows(&self.data))
    }
}

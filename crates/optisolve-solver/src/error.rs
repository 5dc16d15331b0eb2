use thiserror::Error;

/// Errors raised while building a tableau from rows or text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableauError {
    #[error("Tableau needs at least one constraint row and the objective row, found {0} row(s)")]
    TooFewRows(usize),
    #[error("Tableau needs at least one variable column and the RHS column, found {0} column(s)")]
    TooFewColumns(usize),
    #[error("Row {row} has {found} column(s), expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Cell ({row}, {col}) is not a finite number")]
    NonFinite { row: usize, col: usize },
    #[error("Invalid number '{token}' on line {line}")]
    InvalidNumber { line: usize, token: String },
}

/// Errors raised by the simplex engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Tolerance must be a finite number, got {0}")]
    InvalidTolerance(f64),
    #[error("Iteration limit of {limit} pivots exceeded; the tableau may be cycling")]
    IterationLimitExceeded { limit: usize },
}

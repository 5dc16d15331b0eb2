use tracing::{debug, info, trace, warn};

use crate::error::SolveError;
use crate::solution::{Pivot, Snapshot, SolveOutcome, Verdict};
use crate::tableau::Tableau;

/// Primal simplex solver for standard-form maximization tableaus
#[derive(Debug, Clone)]
pub struct Solver {
    /// Maximum pivots before giving up, `None` to run until a verdict
    max_iterations: Option<usize>,
    /// Tolerance for the sign tests on pivot candidates
    tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: Some(10_000),
            tolerance: 0.0,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Pivot until a verdict is reached. A cycling tableau never returns.
    pub fn without_iteration_limit(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    /// Entries must be below `-tol` to enter and above `tol` to leave.
    /// The default of `0.0` compares against exact zero.
    pub fn with_tolerance(mut self, tol: f64) -> Result<Self, SolveError> {
        if !tol.is_finite() {
            return Err(SolveError::InvalidTolerance(tol));
        }
        self.tolerance = tol.abs();
        Ok(self)
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Solve the tableau in place, recording a snapshot after every pivot.
    ///
    /// On return the tableau holds its final state: optimal, or the state
    /// in which unboundedness was detected.
    pub fn solve(&self, tableau: &mut Tableau) -> Result<SolveOutcome, SolveError> {
        let mut snapshots = Vec::new();

        loop {
            let Some(pivot_col) = self.find_pivot_column(tableau) else {
                info!(pivots = snapshots.len(), objective = tableau.objective_value(), "optimal");
                return Ok(SolveOutcome {
                    snapshots,
                    verdict: Verdict::Optimal,
                });
            };

            let Some(pivot_row) = self.find_pivot_row(tableau, pivot_col) else {
                info!(pivots = snapshots.len(), col = pivot_col, "unbounded");
                return Ok(SolveOutcome {
                    snapshots,
                    verdict: Verdict::Unbounded { col: pivot_col },
                });
            };

            if let Some(limit) = self.max_iterations {
                if snapshots.len() >= limit {
                    warn!(limit, "iteration limit reached before a verdict");
                    return Err(SolveError::IterationLimitExceeded { limit });
                }
            }

            let iteration = snapshots.len() + 1;
            debug!(
                iteration,
                row = pivot_row,
                col = pivot_col,
                value = tableau.get(pivot_row, pivot_col),
                "pivot"
            );
            self.pivot(tableau, pivot_row, pivot_col);
            trace!(iteration, "\n{}", tableau);

            snapshots.push(Snapshot {
                iteration,
                pivot: Pivot {
                    row: pivot_row,
                    col: pivot_col,
                },
                tableau: tableau.clone(),
            });
        }
    }

    /// Most negative objective-row entry, leftmost on ties
    fn find_pivot_column(&self, tableau: &Tableau) -> Option<usize> {
        let obj_row = tableau.rows() - 1;
        let rhs_col = tableau.cols() - 1;

        let mut min_val = -self.tolerance;
        let mut min_col = None;

        for j in 0..rhs_col {
            if tableau.data[obj_row][j] < min_val {
                min_val = tableau.data[obj_row][j];
                min_col = Some(j);
            }
        }

        min_col
    }

    /// Minimum ratio test over rows with a positive entry, topmost on ties
    fn find_pivot_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let n_constraints = tableau.num_constraints();
        let rhs_col = tableau.cols() - 1;

        let mut min_ratio = f64::INFINITY;
        let mut min_row = None;

        for i in 0..n_constraints {
            let val = tableau.data[i][col];
            if val > self.tolerance {
                let ratio = tableau.data[i][rhs_col] / val;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    min_row = Some(i);
                }
            }
        }

        min_row
    }

    fn pivot(&self, tableau: &mut Tableau, row: usize, col: usize) {
        let n_rows = tableau.rows();
        let n_cols = tableau.cols();

        // Scale pivot row
        let pivot_val = tableau.data[row][col];
        for j in 0..n_cols {
            tableau.data[row][j] /= pivot_val;
        }

        // Eliminate column in other rows
        for i in 0..n_rows {
            if i != row {
                let factor = tableau.data[i][col];
                for j in 0..n_cols {
                    tableau.data[i][j] -= factor * tableau.data[row][j];
                }
            }
        }
    }
}

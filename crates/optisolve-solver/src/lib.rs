mod error;
mod report;
mod simplex;
mod solution;
mod tableau;

pub use error::{SolveError, TableauError};
pub use report::{CELL_WIDTH, render_report, render_tableau};
pub use simplex::Solver;
pub use solution::{Pivot, Snapshot, SolveOutcome, Verdict};
pub use tableau::Tableau;

use crate::tableau::Tableau;

/// Row and column of the entry a pivot was performed on
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pivot {
    pub row: usize,
    pub col: usize,
}

/// State of the tableau right after one pivot
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// 1-based pivot count
    pub iteration: usize,
    /// Pivot that produced this state
    pub pivot: Pivot,
    /// Copy of the tableau after row reduction
    pub tableau: Tableau,
}

/// How a solve terminated
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No negative entry is left in the objective row
    Optimal,
    /// The entering column has no positive entry in any constraint row
    Unbounded {
        /// Column that could be increased without limit
        col: usize,
    },
}

impl Verdict {
    /// The closing line of a rendered report
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Optimal => "Optimal solution found.",
            Verdict::Unbounded { .. } => "Unbounded solution.",
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, Verdict::Optimal)
    }
}

/// Everything a solve call produced: the pivot trace and the verdict
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub snapshots: Vec<Snapshot>,
    pub verdict: Verdict,
}

impl SolveOutcome {
    pub fn pivots(&self) -> usize {
        self.snapshots.len()
    }

    /// Objective value after the last pivot, `None` when no pivot happened
    pub fn objective_value(&self) -> Option<f64> {
        self.snapshots.last().map(|s| s.tableau.objective_value())
    }
}

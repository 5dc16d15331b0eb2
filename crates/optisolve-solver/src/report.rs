//! Plain-text rendering of tableaus and solve traces.

use std::fmt::Write;

use crate::solution::SolveOutcome;
use crate::tableau::Tableau;

/// Width of one rendered cell, including left padding
pub const CELL_WIDTH: usize = 8;

pub(crate) fn render_rows(rows: &[Vec<f64>]) -> String {
    let mut output = String::from("Tableau:\n");
    for row in rows {
        for value in row {
            let _ = write!(output, "{:>width$.2}", value, width = CELL_WIDTH);
        }
        output.push('\n');
    }
    output
}

/// Render a tableau as a `Tableau:` header followed by one line per row,
/// every cell fixed to two decimals and right-aligned.
pub fn render_tableau(tableau: &Tableau) -> String {
    render_rows(&tableau.data)
}

/// Render the full trace: one block per snapshot, then the verdict line,
/// separated by blank lines.
pub fn render_report(outcome: &SolveOutcome) -> String {
    let mut blocks: Vec<String> = outcome
        .snapshots
        .iter()
        .map(|s| render_tableau(&s.tableau))
        .collect();
    blocks.push(outcome.verdict.message().to_string());
    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::Solver;
    use crate::solution::Verdict;

    #[test]
    fn test_render_tableau() {
        let t = Tableau::from_rows(vec![vec![1.0, -0.5, 12.346], vec![-3.0, 0.0, 1234.5]]).unwrap();
        assert_eq!(
            render_tableau(&t),
            "Tableau:\n    1.00   -0.50   12.35\n   -3.00    0.00 1234.50\n"
        );
        assert_eq!(t.to_string(), render_tableau(&t));
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        let t = Tableau::from_rows(vec![vec![0.125, 0.375, -2.5], vec![1.005, 0.0, 0.0]]).unwrap();
        assert_eq!(
            render_tableau(&t),
            "Tableau:\n    0.12    0.38   -2.50\n    1.00    0.00    0.00\n"
        );
    }

    #[test]
    fn test_wide_values_are_not_truncated() {
        let t = Tableau::from_rows(vec![vec![123456.0, 1.0], vec![0.0, 0.0]]).unwrap();
        assert!(render_tableau(&t).starts_with("Tableau:\n123456.00    1.00\n"));
    }

    #[test]
    fn test_report_for_example() {
        let mut t = Tableau::from_rows(vec![
            vec![2.0, 3.0, 1.0, 0.0, 0.0, 100.0],
            vec![4.0, 1.0, 0.0, 1.0, 0.0, 80.0],
            vec![-3.0, -5.0, 0.0, 0.0, 1.0, 0.0],
        ])
        .unwrap();
        let outcome = Solver::new().solve(&mut t).unwrap();

        let expected = "\
Tableau:
    0.67    1.00    0.33    0.00    0.00   33.33
    3.33    0.00   -0.33    1.00    0.00   46.67
    0.33    0.00    1.67    0.00    1.00  166.67


Optimal solution found.";
        assert_eq!(render_report(&outcome), expected);
    }

    #[test]
    fn test_report_without_pivots() {
        let outcome = SolveOutcome {
            snapshots: Vec::new(),
            verdict: Verdict::Optimal,
        };
        assert_eq!(render_report(&outcome), "Optimal solution found.");
    }

    #[test]
    fn test_unbounded_report_has_no_optimal_line() {
        let mut t = Tableau::from_rows(vec![vec![1.0, -1.0, 1.0, 2.0], vec![-1.0, -1.0, 0.0, 0.0]]).unwrap();
        let outcome = Solver::new().solve(&mut t).unwrap();

        let report = render_report(&outcome);
        assert!(report.starts_with("Tableau:\n"));
        assert!(report.ends_with("\n\nUnbounded solution."));
        assert!(!report.contains("Optimal"));
    }
}

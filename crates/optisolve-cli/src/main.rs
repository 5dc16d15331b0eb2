use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use optisolve_solver::{Solver, SolveOutcome, Tableau, Verdict};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const ALGORITHM: &str = "Primal Simplex";

#[derive(Parser)]
#[command(name = "optisolve")]
#[command(about = "Solve standard-form maximization LPs with the tableau simplex method", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log filter used when RUST_LOG is unset (e.g. debug, trace)
    #[arg(long, global = true, env = "OPTISOLVE_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a tableau file and print the pivot trace
    Solve {
        /// The tableau file: one row per line, objective row last
        file: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Solve the built-in two-constraint example
    Demo {
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Check a tableau file for errors
    Check {
        /// The file to check
        file: PathBuf,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Export the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct SolverArgs {
    /// Maximum number of pivots before giving up
    #[arg(long, env = "OPTISOLVE_MAX_ITERATIONS", default_value_t = 10_000)]
    max_iterations: usize,
    /// Pivot until a verdict is reached, however long it takes (overrides --max-iterations)
    #[arg(long)]
    no_iteration_limit: bool,
    /// Treat objective and column entries within this distance of zero as zero
    #[arg(long, env = "OPTISOLVE_TOLERANCE", default_value_t = 0.0)]
    tolerance: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl SolverArgs {
    fn build(&self) -> Result<Solver> {
        let solver = Solver::new()
            .with_tolerance(self.tolerance)
            .context("Invalid --tolerance")?;
        Ok(if self.no_iteration_limit {
            solver.without_iteration_limit()
        } else {
            solver.with_max_iterations(self.max_iterations)
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&cli.log_level)
                .with_context(|| format!("Invalid log level '{}'", cli.log_level))?,
        })
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let verdict = match cli.command {
        Commands::Solve { file, output, solver } => run(load_tableau(&file)?, &output, &solver)?,
        Commands::Demo { output, solver } => run(demo_tableau()?, &output, &solver)?,
        Commands::Check { file } => {
            let tableau = load_tableau(&file)?;
            print!("{}", describe(&file, &tableau));
            return Ok(());
        }
    };

    if let Verdict::Unbounded { .. } = verdict {
        std::process::exit(1);
    }
    Ok(())
}

fn describe(file: &Path, tableau: &Tableau) -> String {
    let mut text = format!(
        "✓ {} is valid\n  {} x {} tableau\n  {} constraints\n  {} variables\n",
        file.display(),
        tableau.rows(),
        tableau.cols(),
        tableau.num_constraints(),
        tableau.num_variables()
    );
    if tableau.is_optimal() {
        text.push_str("  already optimal\n");
    }
    text
}

fn load_tableau(path: &Path) -> Result<Tableau> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading file: {}", path.display()))?;
    let tableau: Tableau = source
        .parse()
        .with_context(|| format!("Invalid tableau in {}", path.display()))?;
    info!(rows = tableau.rows(), cols = tableau.cols(), "loaded {}", path.display());
    Ok(tableau)
}

/// The hardcoded example: maximize 3x + 5y with 2x + 3y <= 100 and 4x + y <= 80
fn demo_tableau() -> Result<Tableau> {
    Ok(Tableau::from_rows(vec![
        vec![2.0, 3.0, 1.0, 0.0, 0.0, 100.0],
        vec![4.0, 1.0, 0.0, 1.0, 0.0, 80.0],
        vec![-3.0, -5.0, 0.0, 0.0, 1.0, 0.0],
    ])?)
}

fn run(mut tableau: Tableau, output: &OutputArgs, solver: &SolverArgs) -> Result<Verdict> {
    let outcome = solver.build()?.solve(&mut tableau)?;
    let rendered = render(&outcome, output.format)?;

    match &output.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Error writing file: {}", path.display()))?;
            info!("exported result to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(outcome.verdict)
}

fn render(outcome: &SolveOutcome, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => format!(
            "Algorithm: {}\n\n{}\n",
            ALGORITHM,
            optisolve_solver::render_report(outcome)
        ),
        Format::Json => serde_json::to_string_pretty(outcome)? + "\n",
    })
}

//! Saddle Point Solver - CLI
//!
//! Analyzes two-player zero-sum games for pure-strategy equilibria: reads a
//! payoff matrix, reduces it by dominance, and reports whether maximin and
//! minimax meet in a single deterministic outcome.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use saddle::{
    commands::{SweepConfig, analyze_matrix, run_sweep},
    games::{self, parse_matrix},
    output::{print_catalog, print_solve_report, print_sweep_result},
};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "saddle",
    about = "Saddle point solver for two-player zero-sum matrix games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a payoff matrix from a file or stdin
    Solve {
        /// Path to a matrix file (one row per line); reads stdin when omitted
        file: Option<PathBuf>,

        /// Show the analyzed matrix alongside the verdict
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run a built-in example game, or list the catalog
    Demo {
        /// Name of the built-in game; lists the catalog when omitted
        name: Option<String>,

        /// Show the analyzed matrix alongside the verdict
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure how often random games are strictly determined
    Sweep {
        /// Number of random games to analyze
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Rows per generated matrix
        #[arg(long, default_value = "3")]
        rows: usize,

        /// Columns per generated matrix
        #[arg(long, default_value = "3")]
        cols: usize,

        /// Smallest payoff generated (inclusive)
        #[arg(long, default_value = "-9", allow_hyphen_values = true)]
        lo: i32,

        /// Largest payoff generated (inclusive)
        #[arg(long, default_value = "9", allow_hyphen_values = true)]
        hi: i32,

        /// Seed for a reproducible sweep
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the catalog listing if no command given
    let command = cli.command.unwrap_or(Commands::Demo {
        name: None,
        verbose: false,
    });

    match command {
        Commands::Solve { file, verbose } => run_solve_command(file.as_deref(), verbose),
        Commands::Demo { name, verbose } => run_demo_command(name.as_deref(), verbose),
        Commands::Sweep {
            count,
            rows,
            cols,
            lo,
            hi,
            seed,
        } => run_sweep_command(count, rows, cols, lo, hi, seed),
    }
}

fn run_solve_command(file: Option<&Path>, verbose: bool) -> Result<()> {
    let matrix = match file {
        Some(path) => games::load_from_file(path)
            .with_context(|| format!("could not load matrix from {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("could not read stdin")?;
            parse_matrix(&text).context("stdin does not hold a payoff matrix")?
        }
    };

    let report = analyze_matrix(&matrix);
    print_solve_report(&report, verbose);
    Ok(())
}

fn run_demo_command(name: Option<&str>, verbose: bool) -> Result<()> {
    let Some(name) = name else {
        print_catalog(games::GAMES);
        return Ok(());
    };

    let game = games::find(name).with_context(|| {
        format!("no built-in game named '{name}' (run 'saddle demo' for the list)")
    })?;

    println!("\n{}: {}", game.name, game.description);
    let report = analyze_matrix(&game.matrix());
    print_solve_report(&report, verbose);
    Ok(())
}

fn run_sweep_command(
    count: usize,
    rows: usize,
    cols: usize,
    lo: i32,
    hi: i32,
    seed: Option<u64>,
) -> Result<()> {
    anyhow::ensure!(
        rows >= 1 && cols >= 1,
        "matrices need at least one row and one column"
    );
    anyhow::ensure!(lo <= hi, "--lo must not exceed --hi");

    println!("Sweeping {count} random {rows}x{cols} games with payoffs in {lo}..={hi}...");

    let config = SweepConfig {
        count,
        rows,
        cols,
        lo,
        hi,
        seed,
    };
    let result = run_sweep(&config);
    print_sweep_result(&result);
    Ok(())
}

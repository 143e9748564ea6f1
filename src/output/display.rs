//! Display functions for command results

use super::formatters::{indented_matrix, rate_bar};
use crate::commands::{SolveReport, SweepResult};
use crate::games::NamedGame;
use colored::Colorize;

/// Print the analysis of a single game
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Game: {} rows x {} columns",
        report.original_shape.0, report.original_shape.1
    );
    println!("{}", "─".repeat(60).cyan());

    if report.was_reduced() {
        println!(
            "\nDominance elimination: {}x{} → {}x{}",
            report.original_shape.0,
            report.original_shape.1,
            report.reduced.rows(),
            report.reduced.cols()
        );
    } else {
        println!("\nDominance elimination: nothing to remove");
    }

    if verbose {
        println!("\nAnalyzed matrix:");
        println!("{}", indented_matrix(&report.reduced, "   "));
    }

    let (max_row, max_value) = report.maximin;
    let (min_col, min_value) = report.minimax;
    println!(
        "\nPlayer 1 maximin:  row {} guarantees {}",
        max_row,
        format!("{max_value}").bright_yellow()
    );
    println!(
        "Player 2 minimax:  column {} concedes {}",
        min_col,
        format!("{min_value}").bright_yellow()
    );

    println!();
    if let Some(saddle) = &report.saddle {
        println!(
            "{}",
            format!(
                "✅ Saddle point at row {}, column {} - game value {}",
                saddle.row, saddle.col, saddle.value
            )
            .green()
            .bold()
        );
        println!("   Optimal play is deterministic; no randomization needed.");
    } else {
        println!("{}", "❌ No pure saddle point".red().bold());
        println!("   Optimal play requires a mixed strategy.");
    }
}

/// Print the summary of a random-game sweep
pub fn print_sweep_result(result: &SweepResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SWEEP RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let rate = result.determined_rate();
    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Games analyzed:   {}", result.total);
    println!(
        "   With saddle:      {} [{}] {}",
        result.determined,
        rate_bar(rate, 20).green(),
        format!("{:.1}%", rate * 100.0).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.0}", result.games_per_second);

    if !result.value_distribution.is_empty() {
        println!("\n📈 {}", "Game values:".bright_cyan().bold());
        let mut values: Vec<(&i64, &usize)> = result.value_distribution.iter().collect();
        values.sort_by_key(|&(value, _)| *value);

        for (value, &count) in values {
            let pct = (count as f64 / result.determined as f64) * 100.0;
            println!(
                "   {value:>4}: {} {count:4} ({pct:5.1}%)",
                rate_bar(pct / 100.0, 30).green()
            );
        }
    }
}

/// Print the catalog of built-in games
pub fn print_catalog(games: &[NamedGame]) {
    println!("\n{}", "Built-in games:".bright_cyan().bold());
    for game in games {
        println!(
            "   {:<22} {}",
            game.name.bright_yellow(),
            game.description
        );
    }
    println!("\nRun one with: saddle demo <name>");
}

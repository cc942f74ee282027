use crate::analysis::report::ReportRow;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct MatchupTableRow {
    rank: String,
    matchup: String,
    record: String,
    #[tabled(rename = "win rate")]
    win_rate: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Console summary of the most even matchups. The report is ordered most
/// lopsided first, so the closest matchups are read from the tail.
pub fn display_closest_matchups(rows: &[ReportRow], top_n: usize) {
    println!("\n{}", "⚔️  CLOSEST MATCHUPS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if rows.is_empty() {
        println!("{}\n", "No matchups found (no attributable games)".yellow());
        return;
    }

    let mut table_rows = vec![];
    for (idx, row) in rows.iter().rev().take(top_n).enumerate() {
        // the winner's rate, not the report's low-side percentage column
        let winner_rate = row.winner_wins as f64 / row.total_games as f64 * 100.0;
        table_rows.push(MatchupTableRow {
            rank: format!("#{}", idx + 1),
            matchup: format!("{} vs {}", row.winner, row.loser),
            record: format!("{}-{}", row.winner_wins, row.loser_wins),
            win_rate: format!("{:.2}%", winner_rate),
        });
    }

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

mod analysis;
mod config;
mod db;
mod display;
mod error;
mod export;

use analysis::matchups::MatchupTracker;
use analysis::report::build_report;
use clap::Parser;
use config::Config;
use db::store::SetStore;
use display::output::{display_closest_matchups, display_error, display_info, display_success};
use error::AppError;
use indicatif::ProgressBar;

#[derive(Parser, Debug)]
#[command(name = "Matchup Stats")]
#[command(about = "Compute character matchup statistics from recorded tournament sets", long_about = None)]
struct Args {
    /// Minimum tournament entrants; sets from smaller tournaments are ignored
    #[arg(long, default_value = "0")]
    entrants: i64,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env();

    display_info(&format!(
        "Loading sets from {} (min entrants: {})",
        config.database_path, args.entrants
    ));

    let store = SetStore::open(&config.database_path)?;
    let sets = store.fetch_sets(args.entrants)?;
    display_success(&format!("Found {} sets", sets.len()));

    let pb = ProgressBar::new(sets.len() as u64);
    pb.set_message("Aggregating matchups");
    let mut tracker = MatchupTracker::new();
    for set in &sets {
        tracker.record_set(set);
        pb.inc(1);
    }
    pb.finish_with_message("✓ Matchups aggregated");

    let rows = build_report(&tracker);
    display_success(&format!("Computed {} matchups", rows.len()));

    export::write_report(&rows, &config.output_path)?;
    display_success(&format!("Report written to {}", config.output_path));

    display_closest_matchups(&rows, 10);

    Ok(())
}

use std::fs;
use std::path::Path;

use crate::analysis::report::ReportRow;
use crate::error::AppError;

const HEADER: [&str; 7] = [
    "winner",
    "loser",
    "winner_wins",
    "loser_wins",
    "total_games",
    "win_percentage",
    "lose_percentage",
];

/// Write the report to `path`, replacing any existing file. The CSV is built
/// in memory and renamed into place, so a failed run never leaves a
/// truncated artifact behind.
pub fn write_report<P: AsRef<Path>>(rows: &[ReportRow], path: P) -> Result<(), AppError> {
    let path = path.as_ref();

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&HEADER)
        .map_err(|e| AppError::OutputError(e.to_string()))?;

    for row in rows {
        wtr.write_record(&[
            row.winner.clone(),
            row.loser.clone(),
            row.winner_wins.to_string(),
            row.loser_wins.to_string(),
            row.total_games.to_string(),
            format!("{:.2}", row.win_percent),
            format!("{:.2}", row.lose_percent),
        ])
        .map_err(|e| AppError::OutputError(e.to_string()))?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| AppError::OutputError(e.to_string()))?;

    let tmp = path.with_extension("csv.tmp");
    fs::write(&tmp, &data).map_err(|e| AppError::OutputError(e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| AppError::OutputError(e.to_string()))?;

    Ok(())
}

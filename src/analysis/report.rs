use super::matchups::{Matchup, MatchupTracker};

/// One row of the matchup report. The winner is the side with more recorded
/// wins, but `win_percent` is always `char_low`'s share of games for the
/// pair, whichever side is declared winner.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub winner: String,
    pub loser: String,
    pub winner_wins: usize,
    pub loser_wins: usize,
    pub total_games: usize,
    pub win_percent: f64,
    pub lose_percent: f64,
}

impl ReportRow {
    fn from_matchup(matchup: &Matchup) -> Self {
        // Ties go to the low side.
        let (winner, loser, winner_wins, loser_wins) = if matchup.wins_low >= matchup.wins_high {
            (
                matchup.char_low.clone(),
                matchup.char_high.clone(),
                matchup.wins_low,
                matchup.wins_high,
            )
        } else {
            (
                matchup.char_high.clone(),
                matchup.char_low.clone(),
                matchup.wins_high,
                matchup.wins_low,
            )
        };

        let total_games = winner_wins + loser_wins;
        let win_percent = matchup.percentage() * 100.0;
        let lose_percent = 100.0 - win_percent;

        ReportRow {
            winner,
            loser,
            winner_wins,
            loser_wins,
            total_games,
            win_percent,
            lose_percent,
        }
    }
}

/// Derive the ordered report: most lopsided matchups first, the closest to
/// 50/50 last. The sort is stable, so matchups at equal distance from even
/// keep their first-encounter order.
pub fn build_report(tracker: &MatchupTracker) -> Vec<ReportRow> {
    let mut matchups: Vec<&Matchup> = tracker.matchups().iter().collect();

    matchups.sort_by(|a, b| {
        let dist_a = (a.percentage() - 0.5).abs();
        let dist_b = (b.percentage() - 0.5).abs();
        dist_b
            .partial_cmp(&dist_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matchups.into_iter().map(ReportRow::from_matchup).collect()
}

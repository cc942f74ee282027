use std::collections::HashMap;

use crate::db::models::{GameResult, MatchSet};

const CHAR_PREFIX: &str = "ultimate/";

fn strip_char_prefix(id: &str) -> String {
    id.strip_prefix(CHAR_PREFIX).unwrap_or(id).to_string()
}

/// Canonical identifier for an unordered pair of characters: the two raw
/// ids in lexicographic order. A game where A beat B and a game where B
/// beat A key to the same matchup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchupKey {
    low: String,
    high: String,
}

impl MatchupKey {
    fn new(winner_char: &str, loser_char: &str) -> Self {
        let (low, high) = if winner_char <= loser_char {
            (winner_char, loser_char)
        } else {
            (loser_char, winner_char)
        };
        MatchupKey {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}

/// Accumulated head-to-head record for one character pair.
#[derive(Debug, Clone)]
pub struct Matchup {
    pub char_low: String,
    pub char_high: String,
    pub wins_low: usize,
    pub wins_high: usize,
}

impl Matchup {
    fn new(key: &MatchupKey) -> Self {
        Matchup {
            char_low: strip_char_prefix(&key.low),
            char_high: strip_char_prefix(&key.high),
            wins_low: 0,
            wins_high: 0,
        }
    }

    pub fn total_games(&self) -> usize {
        self.wins_low + self.wins_high
    }

    /// Share of games won by `char_low`. Every matchup gets a win recorded
    /// on creation, so the denominator is never zero.
    pub fn percentage(&self) -> f64 {
        self.wins_low as f64 / self.total_games() as f64
    }
}

/// Builds the matchup map for one run. Matchups are kept in first-encounter
/// order so downstream sorting has a stable, reproducible tie-break.
pub struct MatchupTracker {
    index: HashMap<MatchupKey, usize>,
    matchups: Vec<Matchup>,
}

impl MatchupTracker {
    pub fn new() -> Self {
        MatchupTracker {
            index: HashMap::new(),
            matchups: Vec::new(),
        }
    }

    /// Record one game. A game missing the character id on either side is
    /// skipped; it cannot be attributed to a pair.
    pub fn record_game(&mut self, game: &GameResult) {
        if game.winner_char.is_empty() || game.loser_char.is_empty() {
            return;
        }

        // `<=` also covers a self-matchup (same character on both sides):
        // it counts as a win for the low side, keeping the win share defined.
        let low_won = game.winner_char <= game.loser_char;

        let key = MatchupKey::new(&game.winner_char, &game.loser_char);
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.matchups.len();
                self.matchups.push(Matchup::new(&key));
                self.index.insert(key, idx);
                idx
            }
        };

        let matchup = &mut self.matchups[idx];
        if low_won {
            matchup.wins_low += 1;
        } else {
            matchup.wins_high += 1;
        }
    }

    /// Record every game in a set. An empty set contributes nothing.
    pub fn record_set(&mut self, set: &MatchSet) {
        for game in set {
            self.record_game(game);
        }
    }

    /// Matchups in first-encounter order.
    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }
}

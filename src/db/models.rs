use serde::Deserialize;

/// Game score as recorded in `game_data` — usually a number, but textual
/// for irregular results (e.g. "W" on a DQ).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Number(i64),
    Text(String),
}

/// One resolved game from a set's `game_data` array. Only `winner_char` and
/// `loser_char` feed the aggregation; the rest is carried through as-is.
/// Every field defaults when absent so one sparse record never aborts a run.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(dead_code)]
pub struct GameResult {
    #[serde(default)]
    pub winner_id: String,
    #[serde(default)]
    pub loser_id: String,
    #[serde(default)]
    pub winner_score: Option<Score>,
    #[serde(default)]
    pub loser_score: Option<Score>,
    #[serde(default)]
    pub winner_char: String,
    #[serde(default)]
    pub loser_char: String,
    #[serde(default)]
    pub stage: String,
}

/// The decoded `game_data` column: an ordered list of games. May be empty.
pub type MatchSet = Vec<GameResult>;

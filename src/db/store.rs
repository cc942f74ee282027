use crate::db::models::MatchSet;
use crate::error::AppError;
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

/// Read-only access to the player database's recorded sets.
pub struct SetStore {
    conn: Connection,
}

impl SetStore {
    /// Open an existing database. The store never writes, so a missing or
    /// unreadable file fails here instead of silently creating an empty db.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(SetStore { conn })
    }

    /// Fetch every set whose tournament had at least `min_entrants`
    /// entrants, decoding each `game_data` column into its game list.
    /// Rows storing a literal empty array are excluded at the query level.
    pub fn fetch_sets(&self, min_entrants: i64) -> Result<Vec<MatchSet>, AppError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT s.game_data
                 FROM sets s
                 JOIN tournament_info t ON s.tournament_key = t.key
                 WHERE s.game_data != '[]'
                 AND t.entrants >= ?1",
            )
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(params![min_entrants], |row| row.get::<_, String>(0))
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut sets = Vec::new();
        for row in rows {
            let game_data = row.map_err(|e| AppError::DatabaseError(e.to_string()))?;
            let value: serde_json::Value = serde_json::from_str(&game_data)
                .map_err(|e| AppError::JsonError(format!("Failed to parse game_data: {}", e)))?;

            // A null or empty-object row means no games were recorded for
            // the set; anything else that isn't a game array is fatal.
            let set: MatchSet = match value {
                serde_json::Value::Null => MatchSet::new(),
                serde_json::Value::Object(map) if map.is_empty() => MatchSet::new(),
                other => serde_json::from_value(other)
                    .map_err(|e| AppError::JsonError(format!("Failed to parse game_data: {}", e)))?,
            };
            sets.push(set);
        }

        Ok(sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Score;

    fn seeded_store(rows: &[(&str, i64, &str)]) -> SetStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE tournament_info (
                 key TEXT PRIMARY KEY,
                 entrants INTEGER NOT NULL
             );
             CREATE TABLE sets (
                 id INTEGER PRIMARY KEY,
                 tournament_key TEXT NOT NULL REFERENCES tournament_info(key),
                 game_data TEXT NOT NULL
             );",
        )
        .unwrap();

        for (tournament, entrants, game_data) in rows {
            conn.execute(
                "INSERT OR IGNORE INTO tournament_info (key, entrants) VALUES (?1, ?2)",
                params![tournament, entrants],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO sets (tournament_key, game_data) VALUES (?1, ?2)",
                params![tournament, game_data],
            )
            .unwrap();
        }

        SetStore { conn }
    }

    const ONE_GAME: &str = r#"[{"winner_id":"p1","loser_id":"p2","winner_score":3,"loser_score":"W","winner_char":"ultimate/fox","loser_char":"ultimate/falco","stage":"Battlefield"}]"#;

    #[test]
    fn fetches_and_decodes_game_data() {
        let store = seeded_store(&[("genesis", 2000, ONE_GAME)]);
        let sets = store.fetch_sets(0).unwrap();

        assert_eq!(sets.len(), 1);
        let game = &sets[0][0];
        assert_eq!(game.winner_char, "ultimate/fox");
        assert_eq!(game.loser_char, "ultimate/falco");
        assert_eq!(game.stage, "Battlefield");
        assert!(matches!(game.winner_score, Some(Score::Number(3))));
        assert!(matches!(game.loser_score, Some(Score::Text(_))));
    }

    #[test]
    fn filters_by_min_entrants() {
        let store = seeded_store(&[
            ("local", 12, ONE_GAME),
            ("major", 1500, ONE_GAME),
        ]);

        assert_eq!(store.fetch_sets(0).unwrap().len(), 2);
        assert_eq!(store.fetch_sets(100).unwrap().len(), 1);
        assert_eq!(store.fetch_sets(5000).unwrap().len(), 0);
    }

    #[test]
    fn excludes_empty_array_rows() {
        let store = seeded_store(&[("weekly", 64, "[]"), ("weekly", 64, ONE_GAME)]);
        let sets = store.fetch_sets(0).unwrap();

        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 1);
    }

    #[test]
    fn sparse_game_records_decode_with_defaults() {
        let store = seeded_store(&[("weekly", 64, r#"[{"winner_id":"p1"}]"#)]);
        let sets = store.fetch_sets(0).unwrap();

        let game = &sets[0][0];
        assert_eq!(game.winner_id, "p1");
        assert!(game.winner_char.is_empty());
        assert!(game.winner_score.is_none());
    }

    #[test]
    fn null_and_empty_object_rows_decode_as_no_games() {
        let store = seeded_store(&[
            ("weekly", 64, "null"),
            ("weekly", 64, "{}"),
            ("weekly", 64, ONE_GAME),
        ]);
        let sets = store.fetch_sets(0).unwrap();

        assert_eq!(sets.len(), 3);
        assert!(sets[0].is_empty());
        assert!(sets[1].is_empty());
        assert_eq!(sets[2].len(), 1);
    }

    #[test]
    fn unparseable_game_data_is_fatal() {
        let store = seeded_store(&[("weekly", 64, "not json")]);
        assert!(matches!(
            store.fetch_sets(0),
            Err(AppError::JsonError(_))
        ));
    }

    #[test]
    fn open_fails_on_missing_file() {
        assert!(SetStore::open("/nonexistent/path/to.db").is_err());
    }
}

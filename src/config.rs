use std::env;

const DEFAULT_DB_PATH: &str = "./ultimate_player_database.db";
const DEFAULT_OUTPUT_PATH: &str = "./output.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub output_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_path =
            env::var("MATCHUP_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        let output_path =
            env::var("MATCHUP_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT_PATH.to_string());

        Config {
            database_path,
            output_path,
        }
    }
}

use std::path::PathBuf;

use crate::core::history::DEFAULT_WINDOW;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON ledger file.
    pub data_file: PathBuf,
    /// Days covered by the history view, today included.
    pub history_window: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            data_file: PathBuf::from(env("PLANNER_DATA_FILE", "planner_data.json")),
            history_window: env("PLANNER_HISTORY_WINDOW", "5")
                .parse()
                .unwrap_or(DEFAULT_WINDOW),
            log_level: env("PLANNER_LOG_LEVEL", "INFO"),
        }
    }
}

use crate::solver::Strategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const CONFIG_PATH: &str = "ai_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AIConfig {
    pub version: String,
    pub search: SearchConfig,
    pub selfplay: SelfPlaySettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// 思考中表示のウェイト (ms)
    pub think_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    pub save_stats: bool,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(path = CONFIG_PATH, error = %e, "using default AI config");
            Self::default()
        })
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            search: SearchConfig::default(),
            selfplay: SelfPlaySettings::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::AlphaBeta,
            think_delay_ms: 400,
        }
    }
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings {
            num_games: 20,
            save_stats: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ai_config.json");

        let mut config = AIConfig::default();
        config.search.strategy = Strategy::Transposition;
        config.selfplay.num_games = 3;
        config.save_to(&path).unwrap();

        let loaded = AIConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "search": { "strategy": "minimax" } }"#).unwrap();

        let loaded = AIConfig::load_from(&path).unwrap();
        assert_eq!(loaded.search.strategy, Strategy::Minimax);
        assert_eq!(loaded.search.think_delay_ms, 400);
        assert_eq!(loaded.selfplay, SelfPlaySettings::default());
        assert_eq!(loaded.version, "1.0");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AIConfig::load_from(dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_bad_strategy_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "search": { "strategy": "mcts" } }"#).unwrap();
        assert!(AIConfig::load_from(&path).is_err());
    }
}

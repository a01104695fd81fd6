//! Driver configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use tekra_core::tuning::BattleTuning;
use tekra_sim::SimConfig;

/// Optional JSON config. Every field has a default, so `{}` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub seed: u64,
    pub time_scale: f64,
    /// Starting level when no saved progress is loaded.
    pub player_level: u32,
    /// Hero to fight with; the first catalog player when unset.
    pub player_id: Option<String>,
    pub tuning: BattleTuning,
}

impl Default for AppConfig {
    fn default() -> Self {
        let sim = SimConfig::default();
        Self {
            seed: sim.seed,
            time_scale: sim.time_scale,
            player_level: sim.player_level,
            player_id: None,
            tuning: sim.tuning,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            time_scale: self.time_scale,
            player_level: self.player_level.max(1),
            tuning: self.tuning.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tekra.json");
        std::fs::write(
            &path,
            r#"{ "seed": 7, "player_level": 4, "tuning": { "phase2_threshold": 0.7 } }"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.seed, 7);
        let sim = config.sim_config();
        assert_eq!(sim.player_level, 4);
        assert_eq!(sim.tuning.phase2_threshold, 0.7);
        assert_eq!(sim.tuning.player_windup_secs, 0.12);
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ nope").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
        assert!(AppConfig::load(dir.path().join("missing.json")).is_err());
    }
}

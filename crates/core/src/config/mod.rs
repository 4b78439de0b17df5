use serde::{Deserialize, Serialize};

use crate::game::GameConfig;
use crate::gesture::GestureConfig;
use crate::placement::PlacerConfig;
use crate::props::ScatterConfig;
use crate::Result;

/// Top-level configuration structure for the application. Every threshold in
/// the core is reachable from here, so a single JSON file can retune the
/// game without code changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gesture: GestureConfig,
    pub placement: PlacerConfig,
    pub scatter: ScatterConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Parses a configuration from JSON; absent sections keep their
    /// documented defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialises the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! AI configuration handling.
//!
//! Extracts the standard fields from a JSON config while preserving any
//! implementation-specific extras in `custom`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::state::AiDifficulty;

/// Standard configuration for AI players.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "difficulty": "hard"}
/// ```
///
/// Unknown keys land in `custom`:
///
/// ```json
/// {"seed": 12345, "difficulty": "easy", "note": "replay of bug report"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<AiDifficulty>,

    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an AiConfig from optional JSON value.
    ///
    /// Malformed input yields an empty config rather than an error.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Configured difficulty, easy when absent.
    pub fn difficulty(&self) -> AiDifficulty {
        self.difficulty.unwrap_or(AiDifficulty::Easy)
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            difficulty: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result};
use crate::grid::check_dimensions;

pub const DEFAULT_HEIGHT: u32 = 70;
pub const DEFAULT_WIDTH: u32 = 110;
pub const DEFAULT_RANDOM_FILL_PERCENT: u32 = 30;
pub const DEFAULT_SEED: u32 = 12345;

/// Board construction settings. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub height: u32,
    pub width: u32,
    /// Chance (0..=100) that a cell starts alive on a randomized reset.
    pub random_fill_percent: u32,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            random_fill_percent: DEFAULT_RANDOM_FILL_PERCENT,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.height, self.width)?;
        if self.random_fill_percent > 100 {
            return Err(EngineError::InvalidBundle(format!(
                "randomFillPercent must be 0..=100, got {}",
                self.random_fill_percent
            )));
        }
        Ok(())
    }
}

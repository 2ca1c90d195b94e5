//! Rotation KPI thresholds.

use serde::{Deserialize, Serialize};
use setlist_core::RotationThresholds;

use crate::error::ConfigError;

const fn default_overused_days() -> u32 {
    21
}

const fn default_underused_days() -> u32 {
    90
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RotationConfig {
    /// Titles returning more often than this (average days) are overused.
    #[serde(default = "default_overused_days")]
    pub overused_days: u32,

    /// Titles idle for longer than this many days are underused.
    #[serde(default = "default_underused_days")]
    pub underused_days: u32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            overused_days: default_overused_days(),
            underused_days: default_underused_days(),
        }
    }
}

impl RotationConfig {
    /// Convert to the thresholds the rotation report takes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `overused_days` is not below
    /// `underused_days`.
    pub fn thresholds(&self) -> Result<RotationThresholds, ConfigError> {
        RotationThresholds::new(self.overused_days, self.underused_days).map_err(|e| {
            ConfigError::InvalidValue {
                field: "rotation.overused_days".into(),
                reason: e.to_string(),
            }
        })
    }
}

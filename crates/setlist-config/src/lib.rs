//! # setlist-config
//!
//! Layered configuration loading for setlist using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SETLIST_*` prefix, `__` as separator)
//! 2. Project-level `.setlist/config.toml`
//! 3. User-level `~/.config/setlist/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SETLIST_REPORT__TOP_LIMIT` -> `report.top_limit`,
//! `SETLIST_SOURCE__PATH` -> `source.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use setlist_config::SetlistConfig;
//!
//! let config = SetlistConfig::load_with_dotenv().expect("config");
//! if config.source.is_configured() {
//!     println!("records: {}", config.source.path);
//! }
//! ```

mod error;
mod report;
mod rotation;
mod source;

pub use error::ConfigError;
pub use report::ReportConfig;
pub use rotation::RotationConfig;
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use setlist_core::MAX_SERIES_WEEKS;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SetlistConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
}

impl SetlistConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".setlist/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SETLIST_").split("__"))
    }

    /// Reject values the queries cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero `report.top_limit`, a
    /// `report.weekly_weeks` above [`MAX_SERIES_WEEKS`], or rotation thresholds
    /// that are not ordered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report.top_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.top_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.report.weekly_weeks > MAX_SERIES_WEEKS {
            return Err(ConfigError::InvalidValue {
                field: "report.weekly_weeks".into(),
                reason: format!("must be at most {MAX_SERIES_WEEKS}"),
            });
        }
        self.rotation.thresholds()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("setlist").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SetlistConfig::default();
        assert!(!config.source.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_top_limit_is_invalid() {
        let mut config = SetlistConfig::default();
        config.report.top_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "report.top_limit"
        ));
    }

    #[test]
    fn oversized_weekly_series_is_invalid() {
        let mut config = SetlistConfig::default();
        config.report.weekly_weeks = MAX_SERIES_WEEKS;
        assert!(config.validate().is_ok());

        config.report.weekly_weeks = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "report.weekly_weeks"
        ));
    }
}

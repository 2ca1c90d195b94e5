//! Defaults for ranking and series queries.

use serde::{Deserialize, Serialize};
use setlist_core::Window;

const fn default_top_limit() -> u32 {
    10
}

const fn default_window_weeks() -> u32 {
    52
}

const fn default_weekly_weeks() -> u32 {
    12
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// How many titles `top` returns.
    #[serde(default = "default_top_limit")]
    pub top_limit: u32,

    /// Trailing window for ranking and source tallies. Zero means all time.
    #[serde(default = "default_window_weeks")]
    pub window_weeks: u32,

    /// Number of weeks in the weekly series.
    #[serde(default = "default_weekly_weeks")]
    pub weekly_weeks: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_limit: default_top_limit(),
            window_weeks: default_window_weeks(),
            weekly_weeks: default_weekly_weeks(),
        }
    }
}

impl ReportConfig {
    /// The configured ranking window.
    #[must_use]
    pub const fn window(&self) -> Window {
        match self.window_weeks {
            0 => Window::AllTime,
            weeks => Window::TrailingWeeks(weeks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ReportConfig::default();
        assert_eq!(config.top_limit, 10);
        assert_eq!(config.weekly_weeks, 12);
        assert_eq!(config.window(), Window::TrailingWeeks(52));
    }

    #[test]
    fn zero_window_means_all_time() {
        let config = ReportConfig {
            window_weeks: 0,
            ..Default::default()
        };
        assert_eq!(config.window(), Window::AllTime);
    }
}

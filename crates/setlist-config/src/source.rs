//! Record file location.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Path to the decoded record file (JSON array or JSON Lines).
    #[serde(default)]
    pub path: String,

    /// Sheet to read when the file holds several named sheets. Empty means
    /// the first one.
    #[serde(default)]
    pub sheet: String,
}

impl SourceConfig {
    /// Check whether a record file has been configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// The configured sheet, if any.
    #[must_use]
    pub fn sheet(&self) -> Option<&str> {
        let sheet = self.sheet.trim();
        (!sheet.is_empty()).then_some(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = SourceConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.sheet(), None);
    }

    #[test]
    fn blank_sheet_means_first() {
        let config = SourceConfig {
            path: "setlist.json".into(),
            sheet: "  ".into(),
        };
        assert!(config.is_configured());
        assert_eq!(config.sheet(), None);
    }
}

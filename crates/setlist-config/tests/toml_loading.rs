//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files, working directory and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use setlist_config::{ConfigError, SetlistConfig};
use setlist_core::Window;

#[test]
fn loads_report_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[report]
top_limit = 25
window_weeks = 26
weekly_weeks = 8
"#,
        )?;

        let config: SetlistConfig = Figment::from(Serialized::defaults(SetlistConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.report.top_limit, 25);
        assert_eq!(config.report.window(), Window::TrailingWeeks(26));
        assert_eq!(config.report.weekly_weeks, 8);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[rotation]
overused_days = 14
"#,
        )?;

        let config: SetlistConfig = Figment::from(Serialized::defaults(SetlistConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.rotation.overused_days, 14);
        assert_eq!(config.rotation.underused_days, 90);
        assert_eq!(config.report.top_limit, 10);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".setlist")?;
        jail.create_file(
            ".setlist/config.toml",
            r#"
[source]
path = "data/setlist.json"
sheet = "2024"
"#,
        )?;

        let config = SetlistConfig::load().expect("config loads");
        assert_eq!(config.source.path, "data/setlist.json");
        assert_eq!(config.source.sheet(), Some("2024"));
        Ok(())
    });
}

#[test]
fn load_rejects_inverted_rotation_thresholds() {
    Jail::expect_with(|jail| {
        jail.create_dir(".setlist")?;
        jail.create_file(
            ".setlist/config.toml",
            r#"
[rotation]
overused_days = 100
underused_days = 30
"#,
        )?;

        let result = SetlistConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

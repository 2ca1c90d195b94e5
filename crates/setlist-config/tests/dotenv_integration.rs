//! `.env` values flow through figment's env provider.

use figment::Jail;
use setlist_config::SetlistConfig;

#[test]
fn dotenv_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "SETLIST_REPORT__TOP_LIMIT=7\nSETLIST_ROTATION__UNDERUSED_DAYS=120\n",
        )?;

        let config = SetlistConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.report.top_limit, 7);
        assert_eq!(config.rotation.underused_days, 120);
        Ok(())
    });
}

#[test]
fn missing_dotenv_is_not_an_error() {
    Jail::expect_with(|_jail| {
        let config = SetlistConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.report.weekly_weeks, 12);
        Ok(())
    });
}

use setlist_config::SetlistConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SetlistConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SetlistConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("SETLIST_") && key != "SETLIST_LOG")
        .collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.source.is_configured() && has_single_underscore(&env_keys, "SETLIST_SOURCE") {
        warnings.push(
            "Source config appears default while SETLIST_SOURCE* env vars exist. Use double underscores (example: SETLIST_SOURCE__PATH)."
                .to_string(),
        );
    }

    if has_single_underscore(&env_keys, "SETLIST_REPORT") {
        warnings.push(
            "SETLIST_REPORT_* env vars are ignored. Use double underscores (example: SETLIST_REPORT__TOP_LIMIT)."
                .to_string(),
        );
    }

    if has_single_underscore(&env_keys, "SETLIST_ROTATION") {
        warnings.push(
            "SETLIST_ROTATION_* env vars are ignored. Use double underscores (example: SETLIST_ROTATION__OVERUSED_DAYS)."
                .to_string(),
        );
    }

    warnings
}

/// `SETLIST_SOURCE_PATH` matches, `SETLIST_SOURCE__PATH` does not.
fn has_single_underscore(keys: &[String], section: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(section)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use setlist_config::SetlistConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = SetlistConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SETLIST_SOURCE_PATH".to_string(), "rows.json".to_string()),
                ("SETLIST_REPORT_TOP_LIMIT".to_string(), "5".to_string()),
                ("SETLIST_ROTATION_UNDERUSED_DAYS".to_string(), "60".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("SETLIST_SOURCE__PATH"));
    }

    #[test]
    fn double_underscore_keys_are_quiet() {
        let config = SetlistConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SETLIST_SOURCE__PATH".to_string(), "rows.json".to_string()),
                ("SETLIST_REPORT__TOP_LIMIT".to_string(), "5".to_string()),
                ("SETLIST_LOG".to_string(), "debug".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_source_suppresses_source_warning() {
        let mut config = SetlistConfig::default();
        config.source.path = "rows.json".into();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![("SETLIST_SOURCE_SHEET".to_string(), "2024".to_string())],
        );

        assert!(warnings.is_empty());
    }
}

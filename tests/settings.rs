#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use uplift::libs::settings::{UpdateSettings, DEFAULT_CHECK_INTERVAL, SETTINGS_FILE_NAME};

    /// Test context giving every test its own settings file in a
    /// temporary directory.
    struct SettingsTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SettingsTestContext {
        fn setup() -> Self {
            SettingsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl SettingsTestContext {
        fn settings_path(&self) -> PathBuf {
            self.temp_dir.path().join(SETTINGS_FILE_NAME)
        }
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_defaults_without_file(ctx: &mut SettingsTestContext) {
        let settings = UpdateSettings::with_file(ctx.settings_path());
        assert!(!settings.auto_check());
        assert!(!settings.beta_allowed());
        assert_eq!(settings.check_interval(), DEFAULT_CHECK_INTERVAL);
        assert!(settings.last_check().is_none());
        assert!(settings.skipped_versions().is_empty());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_round_trip_survives_reload(ctx: &mut SettingsTestContext) {
        let timestamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        {
            let settings = UpdateSettings::with_file(ctx.settings_path());
            settings.set_auto_check(true);
            settings.set_check_interval(3600.0);
            settings.set_beta_allowed(true);
            settings.record_check_time(timestamp);
        }

        // Simulated restart: a fresh instance reads the same file.
        let reloaded = UpdateSettings::with_file(ctx.settings_path());
        assert!(reloaded.auto_check());
        assert!(reloaded.beta_allowed());
        assert_eq!(reloaded.check_interval(), 3600.0);
        assert_eq!(reloaded.last_check(), Some(timestamp));
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_setter_flush_is_immediately_visible(ctx: &mut SettingsTestContext) {
        let settings = UpdateSettings::with_file(ctx.settings_path());
        settings.set_auto_check(true);

        // A second reader opened right after the setter already sees the
        // new value on disk.
        let observer = UpdateSettings::with_file(ctx.settings_path());
        assert!(observer.auto_check());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_interval_defaults_when_field_is_absent(ctx: &mut SettingsTestContext) {
        fs::write(ctx.settings_path(), r#"{ "auto_check": true }"#).unwrap();

        let settings = UpdateSettings::with_file(ctx.settings_path());
        assert!(settings.auto_check());
        assert_eq!(settings.check_interval(), DEFAULT_CHECK_INTERVAL);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_interval_defaults_when_field_is_unparsable(ctx: &mut SettingsTestContext) {
        fs::write(ctx.settings_path(), r#"{ "update_interval": "often", "allow_beta": true }"#).unwrap();

        let settings = UpdateSettings::with_file(ctx.settings_path());
        // The bad interval falls back without poisoning the rest of the load.
        assert_eq!(settings.check_interval(), DEFAULT_CHECK_INTERVAL);
        assert!(settings.beta_allowed());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_interval_accepts_numeric_strings(ctx: &mut SettingsTestContext) {
        fs::write(ctx.settings_path(), r#"{ "update_interval": "7200" }"#).unwrap();

        let settings = UpdateSettings::with_file(ctx.settings_path());
        assert_eq!(settings.check_interval(), 7200.0);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_corrupt_file_falls_back_to_defaults(ctx: &mut SettingsTestContext) {
        fs::write(ctx.settings_path(), "{ definitely not json").unwrap();

        let settings = UpdateSettings::with_file(ctx.settings_path());
        assert!(!settings.auto_check());
        assert_eq!(settings.check_interval(), DEFAULT_CHECK_INTERVAL);
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_unparsable_last_check_reads_as_never(ctx: &mut SettingsTestContext) {
        fs::write(ctx.settings_path(), r#"{ "last_check": "yesterdayish" }"#).unwrap();

        let settings = UpdateSettings::with_file(ctx.settings_path());
        assert!(settings.last_check().is_none());
    }

    #[test_context(SettingsTestContext)]
    #[test]
    fn test_skip_registry_persists_across_reload(ctx: &mut SettingsTestContext) {
        {
            let settings = UpdateSettings::with_file(ctx.settings_path());
            settings.mark_version_skipped("v1.2.3");
            assert!(settings.is_version_skipped("v1.2.3"));
            assert!(!settings.is_version_skipped("v1.2.4"));
        }

        let reloaded = UpdateSettings::with_file(ctx.settings_path());
        assert!(reloaded.is_version_skipped("v1.2.3"));
        assert!(!reloaded.is_version_skipped("v1.2.4"));
        assert_eq!(reloaded.skipped_versions(), vec!["v1.2.3".to_string()]);
    }
}

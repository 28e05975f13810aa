#[cfg(test)]
mod tests {
    use shiftrack::api::ShiftServerConfig;
    use shiftrack::libs::config::{Config, DisplayConfig, API_URL_ENV, CONFIG_FILE_NAME};
    use shiftrack::libs::data_storage::DataStorage;
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tests in this file share process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a temporary home for each test.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(API_URL_ENV);
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                api_url: "https://shifts.example.com".to_string(),
            }
        }

        fn teardown(self) {
            std::env::remove_var(API_URL_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults_without_config_file(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server_config().api_url, "http://localhost:5137");
        assert_eq!(config.display_config().currency, "£");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ShiftServerConfig {
                api_url: ctx.api_url.clone(),
            }),
            display: Some(DisplayConfig {
                currency: "€".to_string(),
            }),
        };
        config.save().unwrap();

        let read = Config::read().unwrap();
        assert_eq!(read, config);
        assert_eq!(read.server_config().api_url, ctx.api_url);
        assert_eq!(read.display_config().currency, "€");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_sections_are_not_written(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let raw = fs::read_to_string(path).unwrap();
        assert_eq!(raw.trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_overrides_api_url(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ShiftServerConfig {
                api_url: ctx.api_url.clone(),
            }),
            display: None,
        };
        std::env::set_var(API_URL_ENV, "http://10.0.0.2:5137");
        assert_eq!(config.server_config().api_url, "http://10.0.0.2:5137");

        std::env::set_var(API_URL_ENV, "  ");
        assert_eq!(config.server_config().api_url, ctx.api_url);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }
}

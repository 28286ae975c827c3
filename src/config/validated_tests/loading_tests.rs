//! Tests for configuration loading and the requested invocation.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use crate::config::write_default_config;
use crate::curl::Verb;

use super::*;

mod invocation {
    use super::*;

    #[test]
    fn get_invocation_has_no_body() {
        let config = ValidatedConfig::from_raw(&cli(&["get", "https://example.com/a b"]), None)
            .unwrap();

        assert_eq!(
            config.invocation,
            Invocation {
                verb: Verb::Get,
                header_spec: None,
                body: None,
                url: "https://example.com/a b".to_string(),
                retry: false,
            }
        );
    }

    #[test]
    fn put_invocation_keeps_caller_input() {
        let cli = cli(&[
            "put",
            "-H",
            "Content-Type: application/json;",
            "-d",
            "{}",
            "--retry",
            "https://example.com/items/1",
        ]);

        let config = ValidatedConfig::from_raw(&cli, None).unwrap();

        assert_eq!(config.invocation.verb, Verb::Put);
        assert_eq!(
            config.invocation.header_spec.as_deref(),
            Some("Content-Type: application/json;")
        );
        assert_eq!(config.invocation.body.as_deref(), Some("{}"));
        assert!(config.invocation.retry);
    }

    #[test]
    fn missing_body_is_left_to_the_library() {
        let config = ValidatedConfig::from_raw(&cli(&["post", "https://example.com"]), None)
            .unwrap();

        assert_eq!(config.invocation.verb, Verb::Post);
        assert!(config.invocation.body.is_none());
    }

    #[test]
    fn missing_command_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);
        assert!(matches!(result, Err(ConfigError::MissingCommand)));
    }

    #[test]
    fn init_is_not_an_invocation() {
        let result = ValidatedConfig::from_raw(&cli(&["init"]), None);
        assert!(matches!(result, Err(ConfigError::MissingCommand)));
    }

    #[test]
    fn verbose_flag_is_carried() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--verbose", "get", "https://example.com"]), None)
                .unwrap();
        assert!(config.verbose);
    }
}

mod config_load {
    use super::*;

    #[test]
    fn load_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r"
            [retry]
            max_attempts = 4
            delay_ms = 10

            [transport]
            timeout_secs = 5
        "
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let cli = cli(&["--config", path, "get", "https://example.com"]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.retry_policy.max_attempts, 4);
        assert_eq!(config.retry_policy.delay, Duration::from_millis(10));
        assert_eq!(config.settings.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn load_without_config_file_uses_defaults() {
        let config = ValidatedConfig::load(&cli(&["get", "https://example.com"])).unwrap();

        assert_eq!(config.retry_policy.max_attempts, 3);
        assert_eq!(config.retry_policy.delay, Duration::from_millis(50));
        assert!(config.settings.timeout.is_none());
    }

    #[test]
    fn missing_config_file_returns_error() {
        let cli = cli(&["--config", "/nonexistent/dbcurl.toml", "get", "u"]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[retry\nmax_attempts = 3").unwrap();

        let path = file.path().to_str().unwrap();
        let result = ValidatedConfig::load(&cli(&["--config", path, "get", "u"]));

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}

mod init {
    use super::*;

    #[test]
    fn write_default_config_creates_loadable_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dbcurl.toml");

        write_default_config(&path).unwrap();

        let loaded = TomlConfig::load(&path).unwrap();
        assert!(loaded.retry.max_attempts.is_none());
    }

    #[test]
    fn write_to_missing_directory_returns_error() {
        let result = write_default_config(Path::new("/nonexistent/dir/dbcurl.toml"));
        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_summarizes_request_and_policy() {
        let toml = toml("[transport]\ntimeout_secs = 7");
        let config = ValidatedConfig::from_raw(
            &cli(&["post", "-d", "x", "--retry", "https://example.com/"]),
            Some(&toml),
        )
        .unwrap();

        let text = config.to_string();

        assert!(text.contains("verb: POST"));
        assert!(text.contains("retry: true"));
        assert!(text.contains("policy: 3x/50ms"));
        assert!(text.contains("timeout: 7s"));
    }
}

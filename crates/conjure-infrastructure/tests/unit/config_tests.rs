//! Configuration loader tests

use conjure_domain::Error;
use conjure_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, validate_app_config,
};
use conjure_infrastructure::constants::DEFAULT_LOG_LEVEL;
use figment::Jail;
use tempfile::TempDir;

#[test]
fn test_config_loader_default() {
    Jail::expect_with(|_| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.resolution.max_depth, None);
        assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
        assert!(!config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_max_depth(32)
        .with_logging(LoggingConfig {
            level: "debug".to_string(),
            json_format: true,
        })
        .build();

    assert_eq!(config.resolution.max_depth, Some(32));
    assert_eq!(config.resolution.options().max_depth, Some(32));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("test_config.toml");

    let loader = ConfigLoader::new();
    let original_config = ConfigBuilder::new().with_max_depth(64).build();

    loader.save_to_file(&original_config, &config_path).unwrap();

    let loaded_config = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap();

    assert_eq!(loaded_config, original_config);
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new().with_config_path(temp_dir.path().join("absent.toml"));

    assert_eq!(loader.config_path(), Some(temp_dir.path().join("absent.toml").as_path()));
    assert_eq!(loader.load().unwrap(), AppConfig::default());
}

#[test]
fn test_default_config_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "conjure.toml",
            r#"
                [resolution]
                max_depth = 12

                [logging]
                level = "warn"
            "#,
        )?;

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.resolution.max_depth, Some(12));
        assert_eq!(config.logging.level, "warn");
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("conjure.toml", "[resolution]\nmax_depth = 12\n")?;
        jail.set_env("CONJURE_RESOLUTION__MAX_DEPTH", 48);
        jail.set_env("CONJURE_LOGGING__JSON_FORMAT", true);

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.resolution.max_depth, Some(48));
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("CONJURE_RESOLUTION__MAX_DEPTH", 5);
        jail.set_env("HOSTAPP_RESOLUTION__MAX_DEPTH", 7);

        let config = ConfigLoader::new()
            .with_env_prefix("HOSTAPP")
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(config.resolution.max_depth, Some(7));
        Ok(())
    });
}

#[test]
fn test_zero_depth_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("CONJURE_RESOLUTION__MAX_DEPTH", 0);

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let config = ConfigBuilder::new()
        .with_logging(LoggingConfig {
            level: "verbose".to_string(),
            json_format: false,
        })
        .build();

    let err = validate_app_config(&config).unwrap_err();
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("conjure.toml");
    std::fs::write(&config_path, "[resolution]\nmax_depth = \"deep\"\n").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(&config_path)
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}

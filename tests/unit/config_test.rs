//! Tests for registry configuration loading

use std::fs;
use std::time::Duration;

use serial_test::serial;
use tckimlik::config::{
    Config, ConfigError, DEFAULT_ACTION, DEFAULT_ENDPOINT, ENV_ACTION, ENV_ENDPOINT,
    ENV_TIMEOUT_SECS, RegistryConfig,
};
use tempfile::TempDir;

// =============================================================================
// FILE LOADING TESTS
// =============================================================================

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tckimlik.toml");
    fs::write(
        &path,
        r#"
[registry]
endpoint = "http://localhost:9000/KPSPublic.asmx"
action = "urn:test"
timeout_secs = 3
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.registry.endpoint, "http://localhost:9000/KPSPublic.asmx");
    assert_eq!(config.registry.action, "urn:test");
    assert_eq!(config.registry.timeout(), Duration::from_secs(3));
}

#[test]
fn test_load_file_without_registry_table() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tckimlik.toml");
    fs::write(&path, "# nothing configured\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.registry, RegistryConfig::default());
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_load_invalid_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tckimlik.toml");
    fs::write(&path, "[registry\nendpoint = ").unwrap();

    assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_roundtrips_through_toml() {
    let config = Config {
        registry: RegistryConfig::with_endpoint("http://127.0.0.1:1/kps"),
    };
    let text = toml::to_string(&config).unwrap();
    assert_eq!(Config::from_toml_str(&text).unwrap(), config);
}

// =============================================================================
// ENVIRONMENT OVERRIDE TESTS
// =============================================================================

fn clear_env() {
    // SAFETY: tests touching the environment are serialized
    unsafe {
        std::env::remove_var(ENV_ENDPOINT);
        std::env::remove_var(ENV_ACTION);
        std::env::remove_var(ENV_TIMEOUT_SECS);
    }
}

#[test]
#[serial]
fn test_env_defaults_when_unset() {
    clear_env();
    let config = RegistryConfig::from_env().unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.action, DEFAULT_ACTION);
}

#[test]
#[serial]
fn test_env_overrides_fields() {
    clear_env();
    // SAFETY: tests touching the environment are serialized
    unsafe {
        std::env::set_var(ENV_ENDPOINT, "http://127.0.0.1:8080/kps");
        std::env::set_var(ENV_TIMEOUT_SECS, " 7 ");
    }

    let config = RegistryConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.endpoint, "http://127.0.0.1:8080/kps");
    assert_eq!(config.action, DEFAULT_ACTION);
    assert_eq!(config.timeout_secs, 7);
}

#[test]
#[serial]
fn test_env_rejects_bad_timeout() {
    clear_env();
    // SAFETY: tests touching the environment are serialized
    unsafe {
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");
    }

    let err = RegistryConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::InvalidTimeout(ref raw) if raw == "soon"));
}

#[test]
#[serial]
fn test_env_rejects_zero_timeout() {
    clear_env();
    // SAFETY: tests touching the environment are serialized
    unsafe {
        std::env::set_var(ENV_TIMEOUT_SECS, "0");
    }

    let result = RegistryConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));
}

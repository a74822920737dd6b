use std::fs;
use std::path::{Path, PathBuf};
use stride_infrastructure::AppConfig;
use tempfile::TempDir;

#[test]
fn test_missing_config_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_empty_config_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "   \n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_config_fields_are_read() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "catalog_path = \"/srv/stride/stride.json\"\nlog_level = \"debug\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();

    assert_eq!(
        config.catalog_path.as_deref(),
        Some(Path::new("/srv/stride/stride.json"))
    );
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_invalid_config_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "catalog_path = [").unwrap();

    let err = AppConfig::load_from(&path).unwrap_err();

    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_catalog_path_precedence() {
    let configured = AppConfig {
        catalog_path: Some(PathBuf::from("from-config.json")),
        log_level: None,
    };

    assert_eq!(
        configured.resolve_catalog_path(Some(Path::new("from-cli.json"))),
        PathBuf::from("from-cli.json")
    );
    assert_eq!(
        configured.resolve_catalog_path(None),
        PathBuf::from("from-config.json")
    );
    assert_eq!(
        AppConfig::default().resolve_catalog_path(None),
        PathBuf::from("stride.json")
    );
}

//! config.toml 로드/저장 테스트.
use std::path::PathBuf;

use piping_toolbox::config::{self, Config};

#[test]
fn missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_from(&dir.path().join("config.toml")).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.thickness_decimals, 4);
}

#[test]
fn config_saves_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config {
        reference_data: Some(PathBuf::from("data/piping_data.json")),
        thickness_decimals: 3,
        dark_mode: false,
    };
    cfg.save_to(&path).unwrap();
    assert_eq!(config::load_from(&path).unwrap(), cfg);
    assert_eq!(cfg.reference_path(), PathBuf::from("data/piping_data.json"));
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "thickness_decimals = 2\n").unwrap();
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.thickness_decimals, 2);
    assert!(cfg.dark_mode);
    assert!(cfg.reference_data.is_none());
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "thickness_decimals = \"many\"\n").unwrap();
    assert!(matches!(
        config::load_from(&path),
        Err(config::ConfigError::Serde(_))
    ));
}

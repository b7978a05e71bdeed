use finly_config::{Config, ConfigError, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_has_non_empty_fields() {
    let cfg = Config::default();

    assert!(!cfg.currency.is_empty());
    assert!(!cfg.locale.is_empty());
    assert!(cfg.theme.is_none());
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(!manager.config_path().exists());
}

#[test]
fn config_manager_persists_theme_choice() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested"));

    let mut cfg = Config::default();
    cfg.theme = Some(Theme::Dark);
    cfg.locale = "en-US".to_string();

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.theme, Some(Theme::Dark));
    assert_eq!(loaded.locale, "en-US");
    assert!(!dir.path().join("nested").join("config.json.tmp").exists());
}

#[test]
fn saving_again_replaces_previous_theme() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    let mut cfg = Config::default();
    cfg.theme = Some(Theme::Dark);
    manager.save(&cfg).expect("first save");
    cfg.theme = Some(Theme::Light);
    manager.save(&cfg).expect("second save");

    assert_eq!(manager.load().expect("load").theme, Some(Theme::Light));
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    std::fs::write(manager.config_path(), "{ not json").expect("write");

    let err = manager.load().unwrap_err();
    assert!(matches!(err, ConfigError::Serde(_)));
}

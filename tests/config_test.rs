use learnhub::catalog::filter::SortKey;
use learnhub::commands::config::set_in_file;
use learnhub::config::{Config, load_from_path, save_to_path};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_valid() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let config_content = r#"
        [api]
        base_url = "https://learnhub.example.com/api"
        token = "secret-token"
        timeout_secs = 10

        [catalog]
        default_sort = "price-low"

        [cart.promo_codes]
        SAVE20 = 20
        SPRING = 35

        [player]
        completion_threshold_percent = 80
    "#;
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.api.base_url, "https://learnhub.example.com/api");
    assert_eq!(config.api.token.as_deref(), Some("secret-token"));
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.catalog.default_sort, Some(SortKey::PriceLow));
    assert_eq!(config.cart.promo_codes.percent_for("spring"), Some(35));
    assert_eq!(config.player.completion_threshold_percent, 80);
}

#[test]
fn test_load_config_defaults() {
    let temp_file = NamedTempFile::new().unwrap();

    let config = load_from_path(temp_file.path()).expect("Empty config should use defaults");

    assert_eq!(config.api.base_url, "http://localhost:5000/api");
    assert!(config.api.token.is_none());
    assert_eq!(config.cart.promo_codes.percent_for("SAVE20"), Some(20));
    assert_eq!(config.logging.level, "learnhub=info");
}

#[test]
fn test_load_config_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_from_path(dir.path().join("nope.toml")).is_err());
}

#[test]
fn test_load_config_rejects_invalid_threshold() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[player]\ncompletion_threshold_percent = 0\n")
        .unwrap();

    let err = load_from_path(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("completion_threshold_percent"));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".learnhub").join("config.toml");

    let mut config = Config::default();
    config.api.token = Some("abc".to_string());
    config.catalog.default_sort = Some(SortKey::Rating);
    save_to_path(&config, &path).unwrap();

    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded.api.token.as_deref(), Some("abc"));
    assert_eq!(loaded.catalog.default_sort, Some(SortKey::Rating));
    assert_eq!(loaded.cart.promo_codes.percent_for("SAVE20"), Some(20));
}

#[test]
fn test_set_in_file_creates_and_updates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    set_in_file(&path, "api.token", "tok-1").unwrap();
    set_in_file(&path, "player.completion_threshold_percent", "75").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.token.as_deref(), Some("tok-1"));
    assert_eq!(config.player.completion_threshold_percent, 75);
}

#[test]
fn test_set_in_file_rejects_invalid_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    set_in_file(&path, "api.base_url", "https://ok.example.com").unwrap();

    assert!(set_in_file(&path, "api.base_url", "not-a-url").is_err());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.api.base_url, "https://ok.example.com");
}

//! 設定ファイルテスト

use fortune_common::Locale;
use fortune_teller::config::{Config, API_KEY_ENV_VARS};
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("none.json")).unwrap();

    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.timeout_seconds, 120);
    assert!((config.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.default_locale, Locale::Ko);
    assert!(config.api_key.is_none());
}

/// 保存した設定を読み戻せる
#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        api_key: Some("abc".into()),
        timeout_seconds: 30,
        default_locale: Locale::Zh,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.api_key.as_deref(), Some("abc"));
    assert_eq!(loaded.timeout_seconds, 30);
    assert_eq!(loaded.default_locale, Locale::Zh);
}

/// 一部の項目だけの設定ファイルは残りを既定値で補う
#[test]
fn test_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "default_locale": "en" }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.default_locale, Locale::En);
    assert_eq!(config.model, "gemini-2.5-flash");
}

/// 環境変数 → 設定ファイルの順でAPIキーを探す
#[test]
fn test_api_key_precedence() {
    let saved: Vec<Option<String>> = API_KEY_ENV_VARS.iter().map(|n| std::env::var(n).ok()).collect();
    for name in API_KEY_ENV_VARS {
        std::env::remove_var(name);
    }

    let config = Config {
        api_key: Some("from-file".into()),
        ..Default::default()
    };
    assert_eq!(config.get_api_key().as_deref(), Some("from-file"));

    std::env::set_var("API_KEY", "from-api-key");
    assert_eq!(config.get_api_key().as_deref(), Some("from-api-key"));

    std::env::set_var("GEMINI_API_KEY", "from-gemini");
    assert_eq!(config.get_api_key().as_deref(), Some("from-gemini"));

    std::env::set_var("GEMINI_API_KEY", "  ");
    assert_eq!(config.get_api_key().as_deref(), Some("from-api-key"));

    for name in API_KEY_ENV_VARS {
        std::env::remove_var(name);
    }
    let empty = Config::default();
    assert!(empty.get_api_key().is_none());

    for (name, value) in API_KEY_ENV_VARS.iter().zip(saved) {
        if let Some(value) = value {
            std::env::set_var(name, value);
        }
    }
}

//! エラーケーステスト
//!
//! 入力・設定・保存済み結果の読み込みでのエラーハンドリングを検証

use fortune_common::{AnalysisError, CategoryKey, Error};
use fortune_teller::config::Config;
use fortune_teller::error::FortuneError;
use fortune_teller::input::{collect_input, validate_dob, InputArgs};
use fortune_teller::report::Report;
use std::path::Path;
use tempfile::tempdir;

/// 生年月日がない場合
#[test]
fn test_missing_dob() {
    let args = InputArgs {
        name: Some("Ana".into()),
        ..Default::default()
    };
    let result = collect_input(fortune_common::Locale::En, args);
    match result {
        Err(FortuneError::MissingInput(field)) => assert_eq!(field, "--dob"),
        other => panic!("Expected MissingInput, got {:?}", other.map(|i| i.name)),
    }
}

/// 生年月日の形式が不正な場合
#[test]
fn test_malformed_dob() {
    let err = validate_dob("15/07/1990").unwrap_err();
    assert!(err.to_string().starts_with("Invalid input:"));
}

/// 存在しない結果ファイルを読み込んだ場合
#[test]
fn test_load_nonexistent_report() {
    let result = Report::load(Path::new("/nonexistent/path/12345/fortune.json"));
    assert!(matches!(result, Err(FortuneError::Io(_))));
}

/// 壊れたJSONの結果ファイル
#[test]
fn test_load_broken_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Report::load(&path);
    assert!(matches!(result, Err(FortuneError::JsonParse(_))));
}

/// 壊れた設定ファイル
#[test]
fn test_load_broken_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2").unwrap();

    assert!(Config::load_from(&path).is_err());
}

/// 共通ライブラリのエラーはそのまま表示される
#[test]
fn test_common_error_is_transparent() {
    let err: FortuneError = Error::Timeout(120).into();
    assert_eq!(err.to_string(), "Request timed out after 120 seconds");
}

/// カテゴリ失敗のメッセージは原因をそのまま含む
#[test]
fn test_analysis_error_wrap() {
    let err = AnalysisError::wrap(CategoryKey::Wealth, "Wealth", Error::Transport("boom".into()));
    assert!(err.message.starts_with("Error during 'Wealth' analysis: "));
    assert!(err.message.contains("boom"));
}

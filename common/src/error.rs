//! エラー型定義

use crate::types::{AnalysisStatus, CategoryKey};
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Photo error: {0}")]
    Photo(String),

    #[error("Invalid transition for {category}: {from} -> {to}")]
    InvalidTransition {
        category: CategoryKey,
        from: AnalysisStatus,
        to: AnalysisStatus,
    },

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// カテゴリ単位の解析失敗
///
/// `Display` はメッセージをそのまま返す（進捗表示にそのまま流す）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AnalysisError {
    pub category: CategoryKey,
    pub message: String,
}

impl AnalysisError {
    pub fn new(category: CategoryKey, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    /// 下位エラーをカテゴリ名付きの一文にまとめる
    pub fn wrap(category: CategoryKey, category_name: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(
            category,
            format!("Error during '{}' analysis: {}", category_name, cause),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_timeout() {
        let error = Error::Timeout(120);
        assert_eq!(format!("{}", error), "Request timed out after 120 seconds");
    }

    #[test]
    fn test_error_display_invalid_transition() {
        let error = Error::InvalidTransition {
            category: CategoryKey::Wealth,
            from: AnalysisStatus::Completed,
            to: AnalysisStatus::Failed,
        };
        assert_eq!(
            format!("{}", error),
            "Invalid transition for wealth: COMPLETED -> FAILED"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_analysis_error_displays_message_verbatim() {
        let error = AnalysisError::new(CategoryKey::Love, "network timeout");
        assert_eq!(error.to_string(), "network timeout");
    }

    #[test]
    fn test_analysis_error_wrap_names_category() {
        let error = AnalysisError::wrap(CategoryKey::Health, "Health", "API error: 503");
        assert_eq!(error.category, CategoryKey::Health);
        assert_eq!(error.to_string(), "Error during 'Health' analysis: API error: 503");
    }
}

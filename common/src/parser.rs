//! APIレスポンスパーサー
//!
//! 構造化出力のレスポンス本文からJSONオブジェクトを抽出し、
//! FortuneResult としてパースする

use crate::error::{Error, Result};
use crate::types::FortuneResult;

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Examples
/// ```
/// use fortune_common::extract_json;
///
/// let response = "result: {\"summary\": \"ok\"}";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"summary\": \"ok\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7;
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("No JSON object found in response".into()))
}

/// カテゴリ解析レスポンスをパース
///
/// `category` / `summary` / `details` はすべて文字列で必須。
/// 欠落・型違いはスキーマ違反としてエラーにする。
pub fn parse_fortune_response(response: &str) -> Result<FortuneResult> {
    let json_str = extract_json(response.trim())?;
    let result: FortuneResult = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("Response does not match schema: {}", e)))?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_raw_object() {
        let response = r#"{"category": "Love", "summary": "s", "details": "d"}"#;
        assert_eq!(extract_json(response).unwrap(), response);
    }

    #[test]
    fn test_extract_json_with_block() {
        let response = "Here you go:\n```json\n{\"summary\": \"ok\"}\n```\nThanks.";
        assert_eq!(extract_json(response).unwrap(), "{\"summary\": \"ok\"}");
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("No JSON here, just plain text.");
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_extract_json_empty_response() {
        assert!(extract_json("").is_err());
    }

    #[test]
    fn test_parse_fortune_response() {
        let response = r####"
  {"category": "재물운", "summary": "재물이 들어옵니다.", "details": "### 상세 분석\n좋습니다."}
"####;
        let result = parse_fortune_response(response).unwrap();
        assert_eq!(result.category, "재물운");
        assert_eq!(result.summary, "재물이 들어옵니다.");
        assert!(result.details.starts_with("### 상세 분석"));
    }

    #[test]
    fn test_parse_fortune_response_missing_field() {
        let response = r#"{"category": "Love", "summary": "s"}"#;
        let err = parse_fortune_response(response).unwrap_err();
        assert!(err.to_string().contains("details"));
    }

    #[test]
    fn test_parse_fortune_response_wrong_type() {
        let response = r#"{"category": "Love", "summary": ["s"], "details": "d"}"#;
        assert!(parse_fortune_response(response).is_err());
    }

    #[test]
    fn test_parse_fortune_response_not_json() {
        assert!(parse_fortune_response("I cannot answer that.").is_err());
    }

    #[test]
    fn test_parse_fortune_response_nested_braces_in_text() {
        let response = r####"{"category": "Career", "summary": "Use {braces} wisely.", "details": "### Advice\nok"}"####;
        let result = parse_fortune_response(response).unwrap();
        assert_eq!(result.summary, "Use {braces} wisely.");
    }
}

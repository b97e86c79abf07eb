//! Gemini API のワイヤ型（CLI/WASM共通）
//!
//! `generateContent` のリクエストボディ生成とレスポンス本文の取り出しのみ。
//! HTTP送信はそれぞれのトランスポート（reqwest / fetch）が担当する。

use crate::client::GenerateRequest;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// `{base}/{model}:generateContent`
pub fn endpoint_url(model: &str) -> String {
    format!("{}/{}:generateContent", GEMINI_API_BASE, model)
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

impl GeminiRequest {
    /// 共通リクエストからワイヤ形式へ変換
    pub fn from_generate(request: &GenerateRequest) -> Self {
        let mut parts = vec![Part::Text {
            text: request.prompt.clone(),
        }];
        if let Some(image) = &request.image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            });
        }

        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part::Text {
                    text: request.system_instruction.clone(),
                }],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: request.response_schema.clone(),
            },
        }
    }
}

impl GeminiResponse {
    /// 最初の候補のテキストを連結して返す
    pub fn into_text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::Parse("Empty response".into()));
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EncodedImage;
    use serde_json::json;

    fn request(image: Option<EncodedImage>) -> GenerateRequest {
        GenerateRequest {
            system_instruction: "system".to_string(),
            prompt: "テストプロンプト".to_string(),
            image,
            response_schema: json!({"type": "OBJECT"}),
            temperature: 0.7,
        }
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_serialize_text_only() {
        let body = GeminiRequest::from_generate(&request(None));
        let value = serde_json::to_value(&body).expect("シリアライズ失敗");

        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "system");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"].as_array().map(|a| a.len()), Some(1));
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_request_serialize_with_image() {
        let image = EncodedImage {
            data: "base64data".to_string(),
            mime_type: "image/png".to_string(),
        };
        let body = GeminiRequest::from_generate(&request(Some(image)));
        let value = serde_json::to_value(&body).expect("シリアライズ失敗");

        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "テストプロンプト");
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[1]["inlineData"]["data"], "base64data");
    }

    #[test]
    fn test_response_into_text() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "{\"category\": "}, {"text": "\"재물운\"}"}]
                }
            }]
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(response.into_text().unwrap(), r#"{"category": "재물운"}"#);
    }

    #[test]
    fn test_response_without_candidates_is_error() {
        let response: GeminiResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert!(matches!(response.into_text(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_response_candidate_without_content_is_error() {
        let response: GeminiResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn test_request_temperature() {
        let body = GeminiRequest::from_generate(&request(None));
        let value = serde_json::to_value(&body).unwrap();
        let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
    }
}

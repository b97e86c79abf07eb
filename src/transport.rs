//! Gemini API トランスポート（reqwest）
//!
//! リクエストごとにクライアント側のタイムアウトを設定する。
//! タイムアウトは該当カテゴリの失敗として扱われ、バッチは次へ進む。

use async_trait::async_trait;
use fortune_common::gemini::{endpoint_url, GeminiRequest, GeminiResponse};
use fortune_common::{Error, GenerateRequest, GenerativeTransport};
use std::time::Duration;

use crate::config::Config;
use crate::error::{FortuneError, Result};

pub struct GeminiTransport {
    client: reqwest::Client,
    api_key: String,
    model: String,
    timeout_seconds: u64,
}

impl GeminiTransport {
    pub fn new(api_key: Option<String>, model: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| FortuneError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.unwrap_or_default(),
            model: model.to_string(),
            timeout_seconds,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key();
        if api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; requests will fail until a key is configured");
        }
        Self::new(api_key, &config.model, config.timeout_seconds)
    }

    fn url(&self) -> String {
        format!("{}?key={}", endpoint_url(&self.model), self.api_key)
    }
}

#[async_trait(?Send)]
impl GenerativeTransport for GeminiTransport {
    async fn generate(&self, request: &GenerateRequest) -> fortune_common::Result<String> {
        let body = GeminiRequest::from_generate(request);
        tracing::debug!(model = %self.model, has_image = request.image.is_some(), "sending generateContent");

        let response = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(self.timeout_seconds)
                } else {
                    Error::Transport(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Transport(format!("API error: {} {}", status, text.trim())));
        }

        let payload: GeminiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.timeout_seconds)
            } else {
                Error::Parse(e.without_url().to_string())
            }
        })?;
        payload.into_text()
    }
}

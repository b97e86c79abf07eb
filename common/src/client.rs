//! カテゴリ解析クライアント
//!
//! - GenerativeTransport: 外部の生成モデル呼び出し（reqwest / fetch で実装）
//! - CategoryAnalyzer: バッチ処理から見た「1カテゴリを解析する」境界
//! - AnalysisClient: プロンプト構築 → 送信 → パース → エラーの包み直し
//!
//! リトライ・キャッシュは行わない。

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AnalysisError, Result};
use crate::i18n::category_name;
use crate::parser::parse_fortune_response;
use crate::prompts::{build_prompt, build_system_instruction, response_schema};
use crate::types::{CategoryKey, EncodedImage, FortuneResult, Locale, UserInput};

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// 生成モデルへのリクエスト（トランスポート非依存）
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub image: Option<EncodedImage>,
    pub response_schema: Value,
    pub temperature: f32,
}

/// 生成モデルの呼び出し口
///
/// 成功時はモデルが返したテキスト（JSON文字列）を返す。
/// ブラウザ実装の Future は `Send` にならないため `?Send` で定義する。
#[async_trait(?Send)]
pub trait GenerativeTransport {
    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}

/// 1カテゴリ分の解析
#[async_trait(?Send)]
pub trait CategoryAnalyzer {
    async fn analyze(
        &self,
        key: CategoryKey,
        input: &UserInput,
        locale: Locale,
        image: Option<&EncodedImage>,
    ) -> std::result::Result<FortuneResult, AnalysisError>;
}

/// 生成モデルを使うカテゴリ解析クライアント
pub struct AnalysisClient<T> {
    transport: T,
    temperature: f32,
}

impl<T: GenerativeTransport> AnalysisClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// カテゴリ用のリクエストを組み立てる
    pub fn build_request(
        &self,
        key: CategoryKey,
        input: &UserInput,
        locale: Locale,
        image: Option<&EncodedImage>,
    ) -> GenerateRequest {
        GenerateRequest {
            system_instruction: build_system_instruction(locale),
            prompt: build_prompt(locale, key, input, image.is_some()),
            image: image.cloned(),
            response_schema: response_schema(),
            temperature: self.temperature,
        }
    }
}

#[async_trait(?Send)]
impl<T: GenerativeTransport> CategoryAnalyzer for AnalysisClient<T> {
    async fn analyze(
        &self,
        key: CategoryKey,
        input: &UserInput,
        locale: Locale,
        image: Option<&EncodedImage>,
    ) -> std::result::Result<FortuneResult, AnalysisError> {
        let name = category_name(locale, key);
        let request = self.build_request(key, input, locale, image);

        self.transport
            .generate(&request)
            .await
            .and_then(|text| parse_fortune_response(&text))
            .map_err(|e| {
                tracing::error!(category = %key, error = %e, "category analysis failed");
                AnalysisError::wrap(key, name, e)
            })
    }
}

//! Gemini API連携（fetch）
//!
//! APIキーはビルド時の環境変数 `GEMINI_API_KEY` から埋め込む。
//! 1リクエストごとにタイマーと競争させ、時間切れはそのカテゴリの失敗になる。

use async_trait::async_trait;
use fortune_common::gemini::{endpoint_url, GeminiRequest, GeminiResponse, DEFAULT_MODEL};
use fortune_common::{Error, GenerateRequest, GenerativeTransport, Result};
use futures::future::{select, Either};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 1カテゴリあたりのタイムアウト（秒）
pub const REQUEST_TIMEOUT_SECS: u32 = 120;

pub struct FetchTransport {
    api_key: String,
    model: String,
    timeout_secs: u32,
}

impl FetchTransport {
    /// ビルド時に埋め込まれたAPIキーを使う
    pub fn from_build_env() -> Self {
        let api_key = option_env!("GEMINI_API_KEY").unwrap_or_default().to_string();
        if api_key.trim().is_empty() {
            gloo::console::warn!("GEMINI_API_KEY was not set at build time; analysis requests will fail");
        }
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

#[async_trait(?Send)]
impl GenerativeTransport for FetchTransport {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let url = format!("{}?key={}", endpoint_url(&self.model), self.api_key);
        let body = GeminiRequest::from_generate(request);

        let fetch = Box::pin(call_gemini_api(&url, &body));
        let timer = Box::pin(TimeoutFuture::new(self.timeout_secs * 1000));

        let outcome = match select(fetch, timer).await {
            Either::Left((result, _)) => result?.into_text(),
            Either::Right(_) => Err(Error::Timeout(u64::from(self.timeout_secs))),
        };
        outcome
    }
}

/// Gemini API呼び出し（fetch）
async fn call_gemini_api(url: &str, body: &GeminiRequest) -> Result<GeminiResponse> {
    let body = serde_json::to_string(body)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        let text = match resp.text() {
            Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
            Err(_) => None,
        };
        return Err(Error::Transport(format!(
            "API error: {} {}",
            resp.status(),
            text.unwrap_or_default().trim()
        )));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))
}

fn js_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

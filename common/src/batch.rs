//! バッチ解析
//!
//! 固定順のカテゴリを1つずつ解析し、開始・完了をコールバックで通知する。
//! - 並列実行はしない（1カテゴリずつ await）
//! - 失敗したカテゴリがあっても残りは続行する
//! - 完了通知は専用に出さない（呼び出し側が完了件数で判定する）

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::client::CategoryAnalyzer;
use crate::error::{AnalysisError, Error, Result};
use crate::types::{CategoryKey, EncodedImage, FacePhoto, FortuneResult, Locale, PhotoSource, UserInput};

/// 顔写真をAPI送信用のBase64に変換
///
/// Data URL の場合は `data:<mime>;base64,` 以降をそのまま使う
pub fn encode_photo(photo: &FacePhoto) -> Result<EncodedImage> {
    if !photo.mime_type.starts_with("image/") {
        return Err(Error::Photo(format!(
            "Unsupported MIME type for {}: {}",
            photo.file_name, photo.mime_type
        )));
    }

    let data = match &photo.source {
        PhotoSource::Bytes(bytes) => {
            if bytes.is_empty() {
                return Err(Error::Photo(format!("{} is empty", photo.file_name)));
            }
            STANDARD.encode(bytes)
        }
        PhotoSource::DataUrl(data_url) => extract_base64_from_data_url(data_url)
            .filter(|data| !data.is_empty())
            .map(str::to_string)
            .ok_or_else(|| Error::Photo(format!("Invalid data URL for {}", photo.file_name)))?,
    };

    Ok(EncodedImage {
        data,
        mime_type: photo.mime_type.clone(),
    })
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let (meta, data) = rest.split_once(',')?;
    meta.ends_with(";base64").then_some(data)
}

/// 1回分のバッチ解析を実行
///
/// 写真の変換はループ前に1度だけ行い、失敗したら写真なしで続行する。
/// 各カテゴリについて `on_start` → 解析 → `on_complete` の順で呼び出す。
pub async fn run_batch<A, S, C>(
    analyzer: &A,
    input: &UserInput,
    locale: Locale,
    mut on_start: S,
    mut on_complete: C,
) where
    A: CategoryAnalyzer + ?Sized,
    S: FnMut(CategoryKey),
    C: FnMut(CategoryKey, std::result::Result<FortuneResult, AnalysisError>),
{
    let image = input.face_photo.as_ref().and_then(|photo| match encode_photo(photo) {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!(error = %e, "photo conversion failed; continuing without image");
            None
        }
    });

    for key in CategoryKey::ALL {
        tracing::info!(category = %key, "category analysis started");
        on_start(key);

        let outcome = analyzer.analyze(key, input, locale, image.as_ref()).await;
        if outcome.is_ok() {
            tracing::info!(category = %key, "category analysis completed");
        }
        on_complete(key, outcome);
    }
}

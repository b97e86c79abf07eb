//! CLI入力の収集
//!
//! 引数で足りない項目は `--interactive` のときだけ対話入力する。
//! 顔写真が読めない場合は警告を出して写真なしで続行する。

use chrono::NaiveDate;
use dialoguer::{Input, Select};
use fortune_common::{combine_birth_time, t, FacePhoto, Locale, Meridiem, PhotoSource, UserInput};
use std::path::{Path, PathBuf};

use crate::error::{FortuneError, Result};

/// `analyze` の入力引数
#[derive(Debug, Clone, Default)]
pub struct InputArgs {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub meridiem: Meridiem,
    pub photo: Option<PathBuf>,
    pub interactive: bool,
}

/// 引数（と対話入力）から解析入力を組み立てる
pub fn collect_input(locale: Locale, args: InputArgs) -> Result<UserInput> {
    let name = match non_empty(args.name) {
        Some(name) => name,
        None if args.interactive => prompt_text(&t(locale, "cliNamePrompt", &[]), false)?,
        None => return Err(FortuneError::MissingInput("--name".into())),
    };

    let dob = match non_empty(args.dob) {
        Some(dob) => dob,
        None if args.interactive => prompt_text(&t(locale, "cliDobPrompt", &[]), false)?,
        None => return Err(FortuneError::MissingInput("--dob".into())),
    };
    let dob = validate_dob(&dob)?;

    if !UserInput::is_submittable(&name, &dob) {
        return Err(FortuneError::MissingInput("name and date of birth are required".into()));
    }

    let (hour, minute, meridiem) = match non_empty(args.hour) {
        Some(hour) => (hour, args.minute.unwrap_or_default(), args.meridiem),
        None if args.interactive => prompt_birth_time(locale)?,
        None => (String::new(), String::new(), args.meridiem),
    };
    let tob = resolve_birth_time(&hour, &minute, meridiem)?;

    let photo_path = match args.photo {
        Some(path) => Some(path),
        None if args.interactive => {
            non_empty(Some(prompt_text(&t(locale, "cliPhotoPrompt", &[]), true)?)).map(PathBuf::from)
        }
        None => None,
    };
    let face_photo = photo_path.as_deref().and_then(load_photo);

    Ok(UserInput {
        name: name.trim().to_string(),
        dob,
        tob,
        face_photo,
    })
}

/// 生年月日を YYYY-MM-DD として検証
pub fn validate_dob(dob: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(dob.trim(), "%Y-%m-%d")
        .map_err(|_| FortuneError::InvalidInput(format!("date of birth must be YYYY-MM-DD: {}", dob)))?;
    Ok(date.format("%Y-%m-%d").to_string())
}

/// 時・分・午前午後から出生時刻を決める
///
/// 時が空なら時刻不明として `None`。時が入力されているのに組み立てられない場合はエラー。
pub fn resolve_birth_time(hour: &str, minute: &str, meridiem: Meridiem) -> Result<Option<String>> {
    if hour.trim().is_empty() {
        return Ok(None);
    }
    let minute = if minute.trim().is_empty() { "00" } else { minute };
    combine_birth_time(hour, minute, meridiem)
        .map(Some)
        .ok_or_else(|| {
            FortuneError::InvalidInput(format!(
                "time of birth must be hour 1-12 and minute 0-59: {}:{} {}",
                hour, minute, meridiem
            ))
        })
}

/// 顔写真を読み込む（失敗時は警告して `None`）
pub fn load_photo(path: &Path) -> Option<FacePhoto> {
    let mime_type = match image::ImageFormat::from_path(path) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unsupported photo format; continuing without photo");
            return None;
        }
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read photo; continuing without photo");
            return None;
        }
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Some(FacePhoto {
        file_name,
        mime_type,
        source: PhotoSource::Bytes(bytes),
    })
}

fn prompt_birth_time(locale: Locale) -> Result<(String, String, Meridiem)> {
    let hour = prompt_text(&t(locale, "cliHourPrompt", &[]), true)?;
    if hour.trim().is_empty() {
        return Ok((String::new(), String::new(), Meridiem::Am));
    }
    let minute = prompt_text(&t(locale, "cliMinutePrompt", &[]), true)?;

    let choices = [Meridiem::Am, Meridiem::Pm];
    let selected = Select::new()
        .with_prompt(t(locale, "cliMeridiemPrompt", &[]))
        .items(&choices)
        .default(0)
        .interact()
        .map_err(|e| FortuneError::Prompt(e.to_string()))?;

    Ok((hour, minute, choices[selected]))
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| FortuneError::Prompt(e.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

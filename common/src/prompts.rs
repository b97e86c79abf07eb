//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト生成ロジック:
//! - build_system_instruction: ロケール別のシステム指示
//! - build_user_context: 氏名・生年月日・出生時刻（＋写真の扱い）
//! - build_prompt: カテゴリごとのリクエスト本文
//! - response_schema: 構造化出力のスキーマ

use crate::i18n::{category_name, t};
use crate::types::{CategoryKey, Locale, UserInput};
use serde_json::{json, Value};

/// 詳細本文のセクション区切り
pub const SECTION_MARKER: &str = "### ";

pub fn build_system_instruction(locale: Locale) -> String {
    t(locale, "systemInstruction", &[])
}

/// ユーザー情報ブロック
///
/// 出生時刻がない場合は「不明」を明示する
pub fn build_user_context(locale: Locale, input: &UserInput, has_image: bool) -> String {
    let tob = input
        .tob
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| t(locale, "unknownTime", &[]));

    let mut lines = vec![
        format!("- {}: {}", t(locale, "promptName", &[]), input.name),
        format!("- {}: {}", t(locale, "promptDob", &[]), input.dob),
        format!("- {}: {}", t(locale, "promptTob", &[]), tob),
    ];
    if has_image {
        lines.push(format!("- {}", t(locale, "photoHint", &[])));
    }
    lines.join("\n")
}

/// カテゴリ解析用のプロンプト全体
pub fn build_prompt(locale: Locale, key: CategoryKey, input: &UserInput, has_image: bool) -> String {
    format!(
        "{}\n{}\n\n{}",
        t(locale, "userInfoHeading", &[]),
        build_user_context(locale, input, has_image),
        t(locale, "mainPrompt", &[("categoryName", category_name(locale, key))]),
    )
}

/// 構造化出力スキーマ（category / summary / details すべて必須）
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "category": {
                "type": "STRING",
                "description": "The name of the analyzed fortune category"
            },
            "summary": {
                "type": "STRING",
                "description": "A 2-3 sentence summary of the fortune analysis results"
            },
            "details": {
                "type": "STRING",
                "description": "A detailed explanation of the fortune analysis, including \"### Detailed Analysis\", \"### Advice\", and \"### Limitations of Interpretation\" sections."
            }
        },
        "required": ["category", "summary", "details"]
    })
}

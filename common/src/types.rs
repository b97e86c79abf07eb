//! 運勢解析の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - UserInput: 解析1回分の入力（氏名・生年月日・出生時刻・顔写真）
//! - CategoryKey: 8つの固定カテゴリ（順序に意味がある）
//! - FortuneResult: カテゴリごとの解析結果
//! - AnalysisStatus: カテゴリごとの進行状態

use serde::{Deserialize, Serialize};
use std::fmt;

/// 表示言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Ko, Locale::En, Locale::Zh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// 言語選択メニューの表示名
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Ko => "한국어",
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            _ => Err(format!("Unknown locale: {}. Use ko, en, or zh", s)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 解析カテゴリ
///
/// 宣言順が解析順・詳細画面のナビゲーション順になる（`Ord` もこの順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    FourPillars,
    Personality,
    Overall,
    LifeStages,
    Wealth,
    Career,
    Love,
    Health,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 8] = [
        CategoryKey::FourPillars,
        CategoryKey::Personality,
        CategoryKey::Overall,
        CategoryKey::LifeStages,
        CategoryKey::Wealth,
        CategoryKey::Career,
        CategoryKey::Love,
        CategoryKey::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::FourPillars => "four_pillars",
            CategoryKey::Personality => "personality",
            CategoryKey::Overall => "overall",
            CategoryKey::LifeStages => "life_stages",
            CategoryKey::Wealth => "wealth",
            CategoryKey::Career => "career",
            CategoryKey::Love => "love",
            CategoryKey::Health => "health",
        }
    }

    /// 固定順序でのインデックス
    pub fn index(&self) -> usize {
        CategoryKey::ALL
            .iter()
            .position(|k| k == self)
            .unwrap_or_default()
    }
}

impl std::str::FromStr for CategoryKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カテゴリの表示メタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub key: CategoryKey,
    pub name: &'static str,
    pub icon: &'static str,
}

/// 顔写真の中身
///
/// CLIはファイルのバイト列、ブラウザはFileReaderのData URLを渡す
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Bytes(Vec<u8>),
    DataUrl(String),
}

/// 顔写真（任意入力）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacePhoto {
    pub file_name: String,
    pub mime_type: String,
    pub source: PhotoSource,
}

/// APIに送れる形に変換済みの画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Base64データ（Data URLのプレフィックスなし）
    pub data: String,
    pub mime_type: String,
}

/// 解析1回分の入力（構築後は不変）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    /// 生年月日 (YYYY-MM-DD)
    pub dob: String,
    /// 出生時刻 (24時間制 HH:MM)
    pub tob: Option<String>,
    pub face_photo: Option<FacePhoto>,
}

impl UserInput {
    /// 送信可能か（氏名と生年月日が必須）
    pub fn is_submittable(name: &str, dob: &str) -> bool {
        !name.trim().is_empty() && !dob.trim().is_empty()
    }
}

/// カテゴリごとの解析結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneResult {
    pub category: String,
    /// 2〜3文の要約
    pub summary: String,
    /// `### 見出し` で区切られた詳細本文
    pub details: String,
}

/// カテゴリの進行状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnalysisStatus {
    #[default]
    Pending,
    Analyzing,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "PENDING",
            AnalysisStatus::Analyzing => "ANALYZING",
            AnalysisStatus::Completed => "COMPLETED",
            AnalysisStatus::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisStatus::Completed | AnalysisStatus::Failed)
    }

    /// PENDING → ANALYZING → (COMPLETED | FAILED) のみ許可
    pub fn can_transition_to(&self, next: AnalysisStatus) -> bool {
        matches!(
            (self, next),
            (AnalysisStatus::Pending, AnalysisStatus::Analyzing)
                | (AnalysisStatus::Analyzing, AnalysisStatus::Completed)
                | (AnalysisStatus::Analyzing, AnalysisStatus::Failed)
        )
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

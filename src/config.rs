use crate::error::{FortuneError, Result};
use fortune_common::gemini::DEFAULT_MODEL;
use fortune_common::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーを読む環境変数（先頭ほど優先）
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    /// 1カテゴリあたりのリクエストタイムアウト
    pub timeout_seconds: u64,
    pub default_locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            temperature: 0.7,
            timeout_seconds: 120,
            default_locale: Locale::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FortuneError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("fortune-teller").join("config.json"))
    }

    /// APIキー（環境変数を優先）
    ///
    /// 見つからなくてもエラーにはしない。リクエスト時の失敗として表面化する。
    pub fn get_api_key(&self) -> Option<String> {
        let from_env = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|key| !key.trim().is_empty());

        from_env.or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

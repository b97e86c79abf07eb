//! 解析結果の保存形式
//!
//! `analyze --output` で書き出し、`show` で読み込む。

use fortune_common::{CategoryKey, FortuneResult, Locale};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub name: String,
    pub dob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tob: Option<String>,
    pub locale: Locale,
    /// 成功したカテゴリのみ
    pub results: BTreeMap<CategoryKey, FortuneResult>,
}

impl Report {
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("fortune.json");

        let mut results = BTreeMap::new();
        results.insert(
            CategoryKey::Love,
            FortuneResult {
                category: "love".into(),
                summary: "좋은 인연".into(),
                details: "### 흐름\n천천히".into(),
            },
        );
        let report = Report {
            name: "민준".into(),
            dob: "1995-03-02".into(),
            tob: None,
            locale: Locale::Ko,
            results,
        };

        report.save(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"love\""));
        assert!(!raw.contains("tob"));
        assert_eq!(Report::load(&path).unwrap(), report);
    }
}

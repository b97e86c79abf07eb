//! 進捗集計
//!
//! バッチ解析のコールバックを受けてカテゴリごとの状態・完了件数・結果を保持する。
//! 状態遷移は PENDING → ANALYZING → (COMPLETED | FAILED) のみ。

use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{AnalysisError, Error, Result};
use crate::i18n::{category_name, t};
use crate::types::{AnalysisStatus, CategoryKey, FortuneResult, Locale};

/// 全カテゴリ完了から結果画面に切り替えるまでの待ち時間
pub const RESULTS_TRANSITION_DELAY: Duration = Duration::from_secs(1);

/// カテゴリ1件分の進捗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    pub status: AnalysisStatus,
    pub message: String,
}

/// 解析1回分の結末
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// まだ終わっていない
    InProgress,
    AllSucceeded,
    PartialFailure { failed: usize },
    AllFailed,
}

/// 進捗の集計器
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    locale: Locale,
    completed_count: usize,
    status: BTreeMap<CategoryKey, CategoryProgress>,
    results: BTreeMap<CategoryKey, FortuneResult>,
}

impl ProgressTracker {
    /// 全カテゴリを PENDING で初期化
    pub fn new(locale: Locale) -> Self {
        let status = CategoryKey::ALL
            .iter()
            .map(|&key| {
                (
                    key,
                    CategoryProgress {
                        status: AnalysisStatus::Pending,
                        message: message(locale, "pendingMessage", key),
                    },
                )
            })
            .collect();

        Self {
            locale,
            completed_count: 0,
            status,
            results: BTreeMap::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn total(&self) -> usize {
        self.status.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    pub fn status(&self, key: CategoryKey) -> Option<&CategoryProgress> {
        self.status.get(&key)
    }

    /// 固定順で全カテゴリの進捗を返す
    pub fn statuses(&self) -> impl Iterator<Item = (CategoryKey, &CategoryProgress)> {
        self.status.iter().map(|(&key, progress)| (key, progress))
    }

    /// 成功したカテゴリの結果（失敗分は含まない）
    pub fn results(&self) -> &BTreeMap<CategoryKey, FortuneResult> {
        &self.results
    }

    pub fn into_results(self) -> BTreeMap<CategoryKey, FortuneResult> {
        self.results
    }

    /// `on_start` コールバック
    pub fn on_start(&mut self, key: CategoryKey) -> Result<()> {
        self.transition(key, AnalysisStatus::Analyzing)?;
        self.set(key, AnalysisStatus::Analyzing, message(self.locale, "analyzingMessage", key));
        Ok(())
    }

    /// `on_complete` コールバック
    ///
    /// 失敗時はエラー文言をそのまま表示する（再翻訳しない）
    pub fn on_complete(
        &mut self,
        key: CategoryKey,
        outcome: std::result::Result<FortuneResult, AnalysisError>,
    ) -> Result<()> {
        match outcome {
            Ok(result) => {
                self.transition(key, AnalysisStatus::Completed)?;
                self.set(key, AnalysisStatus::Completed, message(self.locale, "completedMessage", key));
                self.results.insert(key, result);
            }
            Err(error) => {
                self.transition(key, AnalysisStatus::Failed)?;
                self.set(key, AnalysisStatus::Failed, error.to_string());
            }
        }
        self.completed_count += 1;
        Ok(())
    }

    /// 全カテゴリが終端状態になったか
    pub fn is_finished(&self) -> bool {
        self.completed_count == self.total()
    }

    pub fn failed_count(&self) -> usize {
        self.status
            .values()
            .filter(|p| p.status == AnalysisStatus::Failed)
            .count()
    }

    /// 進捗率 (0.0〜1.0)
    pub fn fraction(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        self.completed_count as f32 / self.total() as f32
    }

    pub fn outcome(&self) -> RunOutcome {
        if !self.is_finished() {
            return RunOutcome::InProgress;
        }
        match self.failed_count() {
            0 => RunOutcome::AllSucceeded,
            n if n == self.total() => RunOutcome::AllFailed,
            n => RunOutcome::PartialFailure { failed: n },
        }
    }

    /// 進捗画面の説明文
    ///
    /// 失敗がある場合は「進行中」「完了」で文言を切り替える
    pub fn description(&self) -> String {
        let failed = self.failed_count();
        if failed == 0 {
            return t(self.locale, "progressDescription", &[]);
        }
        let key = if self.is_finished() {
            "progressDescriptionErrorComplete"
        } else {
            "progressDescriptionErrorInProgress"
        };
        t(self.locale, key, &[("count", &failed.to_string())])
    }

    fn transition(&self, key: CategoryKey, to: AnalysisStatus) -> Result<()> {
        let from = self
            .status
            .get(&key)
            .map(|p| p.status)
            .unwrap_or_default();
        if from.can_transition_to(to) {
            Ok(())
        } else {
            tracing::warn!(category = %key, %from, %to, "rejected status transition");
            Err(Error::InvalidTransition { category: key, from, to })
        }
    }

    fn set(&mut self, key: CategoryKey, status: AnalysisStatus, message: String) {
        self.status.insert(key, CategoryProgress { status, message });
    }
}

/// ステータス短縮表示の翻訳キー
pub fn status_short_key(status: AnalysisStatus) -> &'static str {
    match status {
        AnalysisStatus::Pending => "pendingStatusShort",
        AnalysisStatus::Analyzing => "analyzingStatusShort",
        AnalysisStatus::Completed => "completedStatusShort",
        AnalysisStatus::Failed => "failedStatusShort",
    }
}

fn message(locale: Locale, key: &str, category: CategoryKey) -> String {
    t(locale, key, &[("categoryName", category_name(locale, category))])
}

//! 画面全体のセッション状態
//!
//! 表示言語・現在のページ・入力・進捗・結果を1か所で保持する。
//! 所有者はトップレベルのUI（ブラウザの App / CLI の main）。

use crate::error::{AnalysisError, Result};
use crate::progress::ProgressTracker;
use crate::results::ResultsBrowser;
use crate::types::{CategoryKey, FortuneResult, Locale, UserInput};

/// 表示中のページ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Input,
    Generating,
    Results,
}

/// 解析の実行単位を識別する番号
///
/// リセット後に古いバッチから届いたコールバックを無視するために使う
pub type RunId = u64;

#[derive(Debug, Clone)]
pub struct Session {
    locale: Locale,
    page: Page,
    input: Option<UserInput>,
    progress: ProgressTracker,
    browser: ResultsBrowser,
    run_id: RunId,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            page: Page::Input,
            input: None,
            progress: ProgressTracker::new(locale),
            browser: ResultsBrowser::default(),
            run_id: 0,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn input(&self) -> Option<&UserInput> {
        self.input.as_ref()
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn browser(&self) -> &ResultsBrowser {
        &self.browser
    }

    pub fn browser_mut(&mut self) -> &mut ResultsBrowser {
        &mut self.browser
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// 言語切替は入力ページでのみ可能
    pub fn can_change_locale(&self) -> bool {
        self.page == Page::Input
    }

    pub fn set_locale(&mut self, locale: Locale) -> bool {
        if !self.can_change_locale() {
            return false;
        }
        self.locale = locale;
        self.progress = ProgressTracker::new(locale);
        true
    }

    /// 解析開始（入力ページからのみ）
    pub fn start(&mut self, input: UserInput) -> Option<RunId> {
        if self.page != Page::Input {
            return None;
        }
        self.run_id += 1;
        self.input = Some(input);
        self.page = Page::Generating;
        self.progress = ProgressTracker::new(self.locale);
        self.browser = ResultsBrowser::default();
        Some(self.run_id)
    }

    pub fn on_start(&mut self, run_id: RunId, key: CategoryKey) -> Result<()> {
        if !self.is_current(run_id) {
            return Ok(());
        }
        self.progress.on_start(key)
    }

    /// 完了を記録し、全カテゴリが終わったら `true` を返す
    pub fn on_complete(
        &mut self,
        run_id: RunId,
        key: CategoryKey,
        outcome: std::result::Result<FortuneResult, AnalysisError>,
    ) -> Result<bool> {
        if !self.is_current(run_id) {
            return Ok(false);
        }
        self.progress.on_complete(key, outcome)?;
        Ok(self.progress.is_finished())
    }

    /// 結果ページへ移る（全カテゴリが終端状態のときのみ）
    ///
    /// 全件失敗でも空の結果で遷移する
    pub fn show_results(&mut self, run_id: RunId) -> bool {
        if !self.is_current(run_id) || !self.progress.is_finished() {
            return false;
        }
        self.browser = ResultsBrowser::new(self.progress.results().clone());
        self.page = Page::Results;
        true
    }

    /// 入力ページに戻す
    pub fn reset(&mut self) {
        self.run_id += 1;
        self.page = Page::Input;
        self.input = None;
        self.progress = ProgressTracker::new(self.locale);
        self.browser = ResultsBrowser::default();
    }

    fn is_current(&self, run_id: RunId) -> bool {
        if run_id != self.run_id || self.page != Page::Generating {
            tracing::debug!(run_id, current = self.run_id, "ignoring callback from stale run");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::RunOutcome;
    use crate::types::AnalysisStatus;

    fn input() -> UserInput {
        UserInput {
            name: "민준".to_string(),
            dob: "1995-03-02".to_string(),
            tob: None,
            face_photo: None,
        }
    }

    fn ok(key: CategoryKey) -> std::result::Result<FortuneResult, AnalysisError> {
        Ok(FortuneResult {
            category: key.as_str().to_string(),
            summary: String::new(),
            details: String::new(),
        })
    }

    #[test]
    fn test_locale_switch_only_on_input_page() {
        let mut session = Session::new(Locale::Ko);
        assert!(session.set_locale(Locale::En));
        assert_eq!(session.locale(), Locale::En);

        session.start(input()).unwrap();
        assert!(!session.can_change_locale());
        assert!(!session.set_locale(Locale::Zh));
        assert_eq!(session.locale(), Locale::En);
    }

    #[test]
    fn test_full_run_moves_to_results() {
        let mut session = Session::new(Locale::En);
        let run = session.start(input()).unwrap();
        assert_eq!(session.page(), Page::Generating);
        assert!(session.start(input()).is_none());

        for key in CategoryKey::ALL {
            session.on_start(run, key).unwrap();
            let finished = session.on_complete(run, key, ok(key)).unwrap();
            assert_eq!(finished, key == CategoryKey::Health);
        }
        assert!(session.show_results(run));
        assert_eq!(session.page(), Page::Results);
        assert_eq!(session.browser().len(), 8);
    }

    #[test]
    fn test_all_failed_still_reaches_results_with_empty_map() {
        let mut session = Session::new(Locale::En);
        let run = session.start(input()).unwrap();
        for key in CategoryKey::ALL {
            session.on_start(run, key).unwrap();
            session
                .on_complete(run, key, Err(AnalysisError::new(key, "down")))
                .unwrap();
        }
        assert_eq!(session.progress().outcome(), RunOutcome::AllFailed);
        assert!(session.show_results(run));
        assert!(session.browser().is_empty());
    }

    #[test]
    fn test_results_not_shown_before_finish() {
        let mut session = Session::new(Locale::En);
        let run = session.start(input()).unwrap();
        session.on_start(run, CategoryKey::FourPillars).unwrap();
        assert!(!session.show_results(run));
        assert_eq!(session.page(), Page::Generating);
    }

    #[test]
    fn test_reset_ignores_stale_callbacks() {
        let mut session = Session::new(Locale::En);
        let old = session.start(input()).unwrap();
        session.on_start(old, CategoryKey::FourPillars).unwrap();
        session.reset();

        assert_eq!(session.page(), Page::Input);
        assert!(session.input().is_none());

        let new = session.start(input()).unwrap();
        assert_ne!(old, new);
        session
            .on_complete(old, CategoryKey::FourPillars, ok(CategoryKey::FourPillars))
            .unwrap();
        assert_eq!(session.progress().completed_count(), 0);
        assert_eq!(
            session.progress().status(CategoryKey::FourPillars).map(|p| p.status),
            Some(AnalysisStatus::Pending)
        );
    }
}

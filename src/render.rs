//! 端末表示
//!
//! 進捗バー、結果カード一覧、詳細（セクション分割）、循環ナビゲーション。

use dialoguer::Select;
use fortune_common::i18n::category_icon;
use fortune_common::{
    category_name, parse_details, status_short_key, t, AnalysisStatus, CategoryKey, FortuneResult,
    Locale, ProgressTracker, ResultsBrowser,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{FortuneError, Result};
use crate::runner::ProgressSink;

/// 解析中の進捗表示
pub struct ProgressView {
    bar: ProgressBar,
}

impl ProgressView {
    pub fn new(locale: Locale, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:30.cyan/blue} {pos}/{len} {msg}") {
            bar.set_style(style.progress_chars("█▓░"));
        }
        bar.println(t(locale, "progressTitle", &[]));
        Self { bar }
    }
}

impl ProgressSink for ProgressView {
    fn update(&self, tracker: &ProgressTracker, key: CategoryKey) {
        self.bar.set_position(tracker.completed_count() as u64);
        if let Some(progress) = tracker.status(key) {
            let label = t(tracker.locale(), status_short_key(progress.status), &[]);
            match progress.status {
                AnalysisStatus::Completed | AnalysisStatus::Failed => {
                    self.bar.println(format!(
                        "{} {} [{}] {}",
                        category_icon(key),
                        category_name(tracker.locale(), key),
                        label,
                        progress.message
                    ));
                }
                _ => self.bar.set_message(progress.message.clone()),
            }
        }
    }

    fn finish(&self, tracker: &ProgressTracker) {
        self.bar.set_position(tracker.completed_count() as u64);
        self.bar.finish_with_message(tracker.description());
    }
}

/// 結果一覧（要約のみ）
pub fn print_results(locale: Locale, name: &str, browser: &ResultsBrowser) {
    println!("\n{}", t(locale, "resultsTitle", &[("name", name)]));

    if browser.is_empty() {
        println!("{}", t(locale, "resultsEmptyTitle", &[]));
        println!("{}", t(locale, "resultsEmptyDescription", &[]));
        return;
    }

    println!("{}\n", t(locale, "resultsDescription", &[]));
    for (key, result) in browser.cards() {
        println!("{} {}", category_icon(key), category_name(locale, key));
        println!("   {}\n", result.summary);
    }
}

/// 詳細表示
pub fn print_detail(locale: Locale, key: CategoryKey, result: &FortuneResult) {
    println!("\n{} {}", category_icon(key), category_name(locale, key));
    println!("[{}] {}\n", t(locale, "summary", &[]), result.summary);
    print!("{}", format_details(&result.details));
}

/// 詳細本文を見出しごとに整形
pub fn format_details(details: &str) -> String {
    parse_details(details)
        .map(|section| match section.title {
            Some(title) => format!("■ {}\n{}\n\n", title, section.body),
            None => format!("{}\n\n", section.body),
        })
        .collect()
}

enum BrowseAction {
    Previous,
    Next,
    Share,
    Close,
}

/// 詳細を前後に循環しながら閲覧
pub fn browse(locale: Locale, browser: &mut ResultsBrowser, start: CategoryKey) -> Result<()> {
    if !browser.open(start) {
        return Ok(());
    }

    loop {
        if let Some((key, result)) = browser.current() {
            print_detail(locale, key, result);
        }
        let items = [
            t(locale, "previous", &[]),
            t(locale, "next", &[]),
            t(locale, "share", &[]),
            t(locale, "close", &[]),
        ];
        let selected = Select::new()
            .with_prompt(t(locale, "cliBrowsePrompt", &[]))
            .items(&items)
            .default(1)
            .interact()
            .map_err(|e| FortuneError::Prompt(e.to_string()))?;

        let action = match selected {
            0 => BrowseAction::Previous,
            1 => BrowseAction::Next,
            2 => BrowseAction::Share,
            _ => BrowseAction::Close,
        };
        match action {
            BrowseAction::Previous => browser.prev(),
            BrowseAction::Next => browser.next(),
            // 端末にはクリップボードがないので共有文をそのまま出力
            BrowseAction::Share => {
                if let Some(text) = browser.share_text(locale) {
                    println!("\n{}", text);
                }
            }
            BrowseAction::Close => {
                browser.close();
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_details_with_titles() {
        let text = format_details("### Flow\nSteady growth.\n### Advice\nSave early.");
        assert_eq!(text, "■ Flow\nSteady growth.\n\n■ Advice\nSave early.\n\n");
    }

    #[test]
    fn test_format_details_plain_paragraph() {
        assert_eq!(format_details("Just one line"), "Just one line\n\n");
        assert_eq!(format_details(""), "");
    }
}

//! 結果画面の状態
//!
//! - カードは成功したカテゴリのみ（固定順）
//! - 一度開いたカードは裏返ったまま
//! - 詳細表示の前後移動は循環する

use std::collections::{BTreeMap, HashSet};

use crate::i18n::{category_name, t};
use crate::types::{CategoryKey, FortuneResult, Locale};

/// 結果一覧と詳細表示のナビゲーション
#[derive(Debug, Clone, Default)]
pub struct ResultsBrowser {
    results: BTreeMap<CategoryKey, FortuneResult>,
    order: Vec<CategoryKey>,
    viewed: HashSet<CategoryKey>,
    active: Option<usize>,
}

impl ResultsBrowser {
    pub fn new(results: BTreeMap<CategoryKey, FortuneResult>) -> Self {
        let order = CategoryKey::ALL
            .iter()
            .copied()
            .filter(|key| results.contains_key(key))
            .collect();
        Self {
            results,
            order,
            viewed: HashSet::new(),
            active: None,
        }
    }

    /// カードとして表示するカテゴリ（固定順）
    pub fn cards(&self) -> impl Iterator<Item = (CategoryKey, &FortuneResult)> {
        self.order
            .iter()
            .filter_map(|key| self.results.get(key).map(|r| (*key, r)))
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_viewed(&self, key: CategoryKey) -> bool {
        self.viewed.contains(&key)
    }

    /// カードを開く（結果がないカテゴリは開けない）
    pub fn open(&mut self, key: CategoryKey) -> bool {
        match self.order.iter().position(|k| *k == key) {
            Some(index) => {
                self.select(index);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn next(&mut self) {
        if let Some(index) = self.active {
            self.select((index + 1) % self.order.len());
        }
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.active {
            let len = self.order.len();
            self.select((index + len - 1) % len);
        }
    }

    /// 表示中の詳細
    pub fn current(&self) -> Option<(CategoryKey, &FortuneResult)> {
        let key = *self.order.get(self.active?)?;
        self.results.get(&key).map(|r| (key, r))
    }

    /// クリップボード共有用の文言
    pub fn share_text(&self, locale: Locale) -> Option<String> {
        let (key, result) = self.current()?;
        Some(t(
            locale,
            "shareText",
            &[
                ("categoryName", category_name(locale, key)),
                ("summary", &result.summary),
            ],
        ))
    }

    pub fn results(&self) -> &BTreeMap<CategoryKey, FortuneResult> {
        &self.results
    }

    fn select(&mut self, index: usize) {
        self.viewed.insert(self.order[index]);
        self.active = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(keys: &[CategoryKey]) -> BTreeMap<CategoryKey, FortuneResult> {
        keys.iter()
            .map(|&key| {
                (
                    key,
                    FortuneResult {
                        category: key.as_str().to_string(),
                        summary: format!("{} summary", key),
                        details: String::new(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_cards_skip_failed_categories() {
        let browser = ResultsBrowser::new(results(&[CategoryKey::Health, CategoryKey::FourPillars]));
        let keys: Vec<CategoryKey> = browser.cards().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![CategoryKey::FourPillars, CategoryKey::Health]);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut browser = ResultsBrowser::new(results(&CategoryKey::ALL));
        assert!(browser.open(CategoryKey::Health));
        browser.next();
        assert_eq!(browser.current().map(|(k, _)| k), Some(CategoryKey::FourPillars));
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut browser = ResultsBrowser::new(results(&CategoryKey::ALL));
        browser.open(CategoryKey::FourPillars);
        browser.prev();
        assert_eq!(browser.current().map(|(k, _)| k), Some(CategoryKey::Health));
    }

    #[test]
    fn test_navigation_skips_missing_results() {
        let mut browser =
            ResultsBrowser::new(results(&[CategoryKey::Personality, CategoryKey::Wealth]));
        browser.open(CategoryKey::Personality);
        browser.next();
        assert_eq!(browser.current().map(|(k, _)| k), Some(CategoryKey::Wealth));
        browser.next();
        assert_eq!(browser.current().map(|(k, _)| k), Some(CategoryKey::Personality));
    }

    #[test]
    fn test_open_missing_category_is_refused() {
        let mut browser = ResultsBrowser::new(results(&[CategoryKey::Love]));
        assert!(!browser.open(CategoryKey::Career));
        assert!(browser.current().is_none());
    }

    #[test]
    fn test_viewed_cards_stay_flipped() {
        let mut browser = ResultsBrowser::new(results(&[CategoryKey::Love, CategoryKey::Health]));
        browser.open(CategoryKey::Love);
        browser.next();
        browser.close();
        assert!(browser.is_viewed(CategoryKey::Love));
        assert!(browser.is_viewed(CategoryKey::Health));
        assert!(browser.current().is_none());
    }

    #[test]
    fn test_navigation_without_open_modal_is_noop() {
        let mut browser = ResultsBrowser::new(results(&[CategoryKey::Love]));
        browser.next();
        browser.prev();
        assert!(browser.current().is_none());
    }

    #[test]
    fn test_empty_results() {
        let browser = ResultsBrowser::new(BTreeMap::new());
        assert!(browser.is_empty());
        assert_eq!(browser.cards().count(), 0);
    }

    #[test]
    fn test_share_text() {
        let mut browser = ResultsBrowser::new(results(&[CategoryKey::Wealth]));
        assert!(browser.share_text(Locale::En).is_none());
        browser.open(CategoryKey::Wealth);
        assert_eq!(
            browser.share_text(Locale::En).as_deref(),
            Some("[Wealth] wealth summary")
        );
    }
}

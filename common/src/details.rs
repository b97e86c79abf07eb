//! 詳細本文のセクション分割
//!
//! `details` を `### ` で区切り、見出しと本文の組に分ける。
//! 改行を含まない断片は見出しなしの段落として扱う。

use crate::prompts::SECTION_MARKER;

/// 詳細本文の1セクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSection<'a> {
    pub title: Option<&'a str>,
    pub body: &'a str,
}

/// セクション列を返す
///
/// 遅延評価で元の文字列は変更しない。`Clone` すれば何度でも走査できる。
///
/// # Examples
/// ```
/// use fortune_common::{parse_details, DetailSection};
///
/// let sections: Vec<_> = parse_details("### A\nbody1### B\nbody2").collect();
/// assert_eq!(sections[0], DetailSection { title: Some("A"), body: "body1" });
/// assert_eq!(sections[1], DetailSection { title: Some("B"), body: "body2" });
/// ```
pub fn parse_details(details: &str) -> impl Iterator<Item = DetailSection<'_>> + Clone {
    details
        .split(SECTION_MARKER)
        .filter(|fragment| !fragment.trim().is_empty())
        .map(parse_fragment)
}

fn parse_fragment(fragment: &str) -> DetailSection<'_> {
    match fragment.split_once('\n') {
        None => DetailSection {
            title: None,
            body: fragment.trim(),
        },
        Some((title, body)) => {
            let title = title.trim();
            DetailSection {
                title: (!title.is_empty()).then_some(title),
                body: body.trim(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_details("").count(), 0);
        assert_eq!(parse_details("   \n  ").count(), 0);
    }

    #[test]
    fn test_no_marker_single_line() {
        let sections: Vec<_> = parse_details("  just a paragraph  ").collect();
        assert_eq!(
            sections,
            vec![DetailSection {
                title: None,
                body: "just a paragraph"
            }]
        );
    }

    #[test]
    fn test_two_titled_sections() {
        let sections: Vec<_> = parse_details("### A\nbody1### B\nbody2").collect();
        assert_eq!(
            sections,
            vec![
                DetailSection { title: Some("A"), body: "body1" },
                DetailSection { title: Some("B"), body: "body2" },
            ]
        );
    }

    #[test]
    fn test_leading_untitled_fragment() {
        let details = "서문입니다.### 상세 분석\n내용\n\n### 조언\n꾸준히 하세요.\n";
        let sections: Vec<_> = parse_details(details).collect();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0], DetailSection { title: None, body: "서문입니다." });
        assert_eq!(sections[1], DetailSection { title: Some("상세 분석"), body: "내용" });
        assert_eq!(sections[2], DetailSection { title: Some("조언"), body: "꾸준히 하세요." });
    }

    #[test]
    fn test_multiline_body_is_kept() {
        let details = "### Advice\nline one\nline two\n\n";
        let sections: Vec<_> = parse_details(details).collect();
        assert_eq!(sections[0].body, "line one\nline two");
    }

    #[test]
    fn test_title_only_section() {
        let sections: Vec<_> = parse_details("### Limitations\n").collect();
        assert_eq!(
            sections,
            vec![DetailSection {
                title: Some("Limitations"),
                body: ""
            }]
        );
    }

    #[test]
    fn test_restartable_and_idempotent() {
        let details = "### A\nx### B\ny";
        let iter = parse_details(details);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first, parse_details(details).collect::<Vec<_>>());
    }
}

//! 多言語テキスト
//!
//! - categories: ロケールごとのカテゴリ名・アイコン（キー集合と順序は全ロケール共通）
//! - t: 記号キー + `{placeholder}` 置換による文言解決
//!
//! 解決順: 指定ロケール → 英語 → キー文字列そのもの

use crate::types::{CategoryInfo, CategoryKey, Locale};

/// フォールバック先のロケール
pub const FALLBACK_LOCALE: Locale = Locale::En;

/// カテゴリ一覧（固定順）
pub fn categories(locale: Locale) -> Vec<CategoryInfo> {
    CategoryKey::ALL
        .iter()
        .map(|&key| CategoryInfo {
            key,
            name: category_name(locale, key),
            icon: category_icon(key),
        })
        .collect()
}

pub fn category_name(locale: Locale, key: CategoryKey) -> &'static str {
    use CategoryKey::*;
    match locale {
        Locale::Ko => match key {
            FourPillars => "사주팔자",
            Personality => "성격 분석",
            Overall => "총운",
            LifeStages => "인생 시기별 운세",
            Wealth => "재물운",
            Career => "직업운",
            Love => "애정운",
            Health => "건강운",
        },
        Locale::En => match key {
            FourPillars => "Four Pillars of Destiny",
            Personality => "Personality",
            Overall => "Overall Fortune",
            LifeStages => "Life Stages",
            Wealth => "Wealth",
            Career => "Career",
            Love => "Love",
            Health => "Health",
        },
        Locale::Zh => match key {
            FourPillars => "四柱八字",
            Personality => "性格分析",
            Overall => "总运",
            LifeStages => "人生阶段运势",
            Wealth => "财运",
            Career => "事业运",
            Love => "爱情运",
            Health => "健康运",
        },
    }
}

pub fn category_icon(key: CategoryKey) -> &'static str {
    match key {
        CategoryKey::FourPillars => "☯",
        CategoryKey::Personality => "🧭",
        CategoryKey::Overall => "🌟",
        CategoryKey::LifeStages => "⏳",
        CategoryKey::Wealth => "💰",
        CategoryKey::Career => "💼",
        CategoryKey::Love => "💖",
        CategoryKey::Health => "🌿",
    }
}

/// 文言を解決し、`{name}` 形式のプレースホルダを置換する
///
/// # Examples
/// ```
/// use fortune_common::{t, Locale};
///
/// let text = t(Locale::En, "analyzingMessage", &[("categoryName", "Wealth")]);
/// assert!(text.contains("Wealth"));
/// ```
pub fn t(locale: Locale, key: &str, vars: &[(&str, &str)]) -> String {
    let template = lookup(locale, key)
        .or_else(|| lookup(FALLBACK_LOCALE, key))
        .unwrap_or(key);

    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    match locale {
        Locale::Ko => ko(key),
        Locale::En => en(key),
        Locale::Zh => zh(key),
    }
}

fn ko(key: &str) -> Option<&'static str> {
    Some(match key {
        "appTitle" => "AI 운세 분석",
        "startNewAnalysis" => "새로운 분석 시작",
        "inputTitle" => "당신의 운세를 알아보세요",
        "inputDescription" => "이름과 생년월일을 입력하면 AI가 8가지 분야의 운세를 분석합니다.\n태어난 시간과 얼굴 사진은 선택 사항입니다.",
        "nameLabel" => "이름",
        "namePlaceholder" => "이름을 입력하세요",
        "dobLabel" => "생년월일",
        "tobLabel" => "태어난 시간 (선택)",
        "photoLabel" => "얼굴 사진 (선택)",
        "photoPlaceholder" => "클릭하여 사진을 선택하세요",
        "analyzing" => "분석 중...",
        "startAnalysis" => "운세 분석 시작",
        "progressTitle" => "운세를 분석하고 있습니다",
        "progressDescription" => "각 분야를 순서대로 분석합니다. 잠시만 기다려 주세요.",
        "progressDescriptionErrorInProgress" => "{count}개 분야의 분석에 실패했습니다. 나머지 분야는 계속 분석합니다.",
        "progressDescriptionErrorComplete" => "분석이 끝났지만 {count}개 분야는 실패했습니다. 성공한 결과만 표시합니다.",
        "pendingMessage" => "{categoryName} 분석 대기 중",
        "analyzingMessage" => "{categoryName} 분석 중...",
        "completedMessage" => "{categoryName} 분석 완료",
        "pendingStatusShort" => "대기",
        "analyzingStatusShort" => "분석 중",
        "completedStatusShort" => "완료",
        "failedStatusShort" => "실패",
        "resultsTitle" => "{name}님의 운세 분석 결과",
        "resultsDescription" => "카드를 눌러 자세한 내용을 확인하세요.",
        "resultsEmptyTitle" => "분석 결과를 받지 못했습니다",
        "resultsEmptyDescription" => "모든 분야의 분석에 실패했습니다. 잠시 후 새로운 분석을 시작해 주세요.",
        "viewDetails" => "자세히 보기",
        "summary" => "요약",
        "share" => "공유",
        "close" => "닫기",
        "previous" => "이전",
        "next" => "다음",
        "shareText" => "[{categoryName}] {summary}",
        "shareSuccess" => "클립보드에 복사되었습니다.",
        "shareError" => "복사에 실패했습니다.",
        "systemInstruction" => "당신은 사주명리학, 관상학, 동양 철학에 정통한 운세 전문가입니다. 사용자의 정보를 바탕으로 따뜻하고 균형 잡힌 시각으로 운세를 해석하며, 항상 한국어로 답변합니다. 응답은 반드시 요청된 JSON 형식을 따릅니다.",
        "userInfoHeading" => "사용자 정보:",
        "promptName" => "이름",
        "promptDob" => "생년월일",
        "promptTob" => "태어난 시간",
        "unknownTime" => "알 수 없음",
        "photoHint" => "제공된 얼굴 사진의 인상을 바탕으로 관상학적 특징을 보조적으로만 참고해주세요.",
        "mainPrompt" => "요청:\n'{categoryName}' 분야의 운세를 분석해주세요.\n\n결과는 다음 필드를 포함한 JSON이어야 합니다:\n1. 'summary': 2-3 문장의 핵심 요약.\n2. 'details': 아래 세부 섹션을 포함한 상세 설명. 각 섹션은 '### 제목' 형식으로 시작해야 합니다.\n\n### 상세 분석\n- 사용자 정보에 근거한 구체적인 해석을 제공해주세요.\n\n### 조언\n- 분석 결과를 바탕으로 긍정적이고 실천 가능한 조언을 해주세요.\n\n### 해석의 한계\n- 이 분석은 전통과 통계에 기반한 해석일 뿐 미래를 보장하지 않는다는 한계를 분명히 밝혀주세요.",
        "cliNamePrompt" => "이름",
        "cliDobPrompt" => "생년월일 (YYYY-MM-DD)",
        "cliHourPrompt" => "태어난 시 (1-12, 모르면 비워두세요)",
        "cliMinutePrompt" => "태어난 분 (0-59)",
        "cliMeridiemPrompt" => "오전/오후",
        "cliPhotoPrompt" => "얼굴 사진 경로 (선택, 비워두면 생략)",
        "cliResultsSaved" => "결과를 저장했습니다: {path}",
        "cliBrowsePrompt" => "이동할 방향을 선택하세요",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    Some(match key {
        "appTitle" => "AI Fortune Teller",
        "startNewAnalysis" => "Start New Analysis",
        "inputTitle" => "Discover Your Fortune",
        "inputDescription" => "Enter your name and date of birth, and the AI will analyze your fortune across eight areas.\nTime of birth and a face photo are optional.",
        "nameLabel" => "Name",
        "namePlaceholder" => "Enter your name",
        "dobLabel" => "Date of Birth",
        "tobLabel" => "Time of Birth (optional)",
        "photoLabel" => "Face Photo (optional)",
        "photoPlaceholder" => "Click to choose a photo",
        "analyzing" => "Analyzing...",
        "startAnalysis" => "Start Fortune Analysis",
        "progressTitle" => "Reading Your Fortune",
        "progressDescription" => "Each area is analyzed in turn. Please wait a moment.",
        "progressDescriptionErrorInProgress" => "{count} area(s) failed. The remaining areas are still being analyzed.",
        "progressDescriptionErrorComplete" => "Analysis finished, but {count} area(s) failed. Only successful results will be shown.",
        "pendingMessage" => "Waiting to analyze {categoryName}",
        "analyzingMessage" => "Analyzing {categoryName}...",
        "completedMessage" => "{categoryName} analysis complete",
        "pendingStatusShort" => "Pending",
        "analyzingStatusShort" => "Analyzing",
        "completedStatusShort" => "Done",
        "failedStatusShort" => "Failed",
        "resultsTitle" => "{name}'s Fortune Analysis",
        "resultsDescription" => "Tap a card to see the full reading.",
        "resultsEmptyTitle" => "No Results Received",
        "resultsEmptyDescription" => "Every area failed to analyze. Please start a new analysis in a little while.",
        "viewDetails" => "View details",
        "summary" => "Summary",
        "share" => "Share",
        "close" => "Close",
        "previous" => "Previous",
        "next" => "Next",
        "shareText" => "[{categoryName}] {summary}",
        "shareSuccess" => "Copied to clipboard.",
        "shareError" => "Failed to copy.",
        "systemInstruction" => "You are a fortune-telling expert well versed in the Four Pillars of Destiny (Saju), physiognomy and Eastern philosophy. Interpret the user's fortune from their information with a warm and balanced perspective, and always answer in English. Your response must follow the requested JSON format.",
        "userInfoHeading" => "User Information:",
        "promptName" => "Name",
        "promptDob" => "Date of Birth",
        "promptTob" => "Time of Birth",
        "unknownTime" => "Unknown",
        "photoHint" => "As a secondary reference only, consider the physiognomic features suggested by the provided face photo.",
        "mainPrompt" => "Request:\nPlease perform a fortune analysis for the '{categoryName}' category.\n\nThe result must be JSON with the following fields:\n1. 'summary': A 2-3 sentence core summary.\n2. 'details': A detailed explanation containing the subsections below. Each section must start with the '### Title' format.\n\n### Detailed Analysis\n- Give a specific interpretation grounded in the user's information.\n\n### Advice\n- Offer positive, practical advice based on the analysis.\n\n### Limitations of Interpretation\n- Clearly state that this reading is based on tradition and statistics and does not guarantee the future.",
        "cliNamePrompt" => "Name",
        "cliDobPrompt" => "Date of birth (YYYY-MM-DD)",
        "cliHourPrompt" => "Hour of birth (1-12, leave empty if unknown)",
        "cliMinutePrompt" => "Minute of birth (0-59)",
        "cliMeridiemPrompt" => "AM/PM",
        "cliPhotoPrompt" => "Face photo path (optional, leave empty to skip)",
        "cliResultsSaved" => "Results saved: {path}",
        "cliBrowsePrompt" => "Where to next?",
        _ => return None,
    })
}

fn zh(key: &str) -> Option<&'static str> {
    Some(match key {
        "appTitle" => "AI 运势分析",
        "startNewAnalysis" => "开始新的分析",
        "inputTitle" => "探索你的运势",
        "inputDescription" => "输入姓名和出生日期，AI 将从八个方面分析你的运势。\n出生时间和面部照片为可选项。",
        "nameLabel" => "姓名",
        "namePlaceholder" => "请输入姓名",
        "dobLabel" => "出生日期",
        "tobLabel" => "出生时间（可选）",
        "photoLabel" => "面部照片（可选）",
        "photoPlaceholder" => "点击选择照片",
        "analyzing" => "分析中...",
        "startAnalysis" => "开始运势分析",
        "progressTitle" => "正在分析你的运势",
        "progressDescription" => "将依次分析各个方面，请稍候。",
        "progressDescriptionErrorInProgress" => "{count} 个方面分析失败，其余方面仍在分析中。",
        "progressDescriptionErrorComplete" => "分析已结束，但有 {count} 个方面失败。仅显示成功的结果。",
        "pendingMessage" => "等待分析{categoryName}",
        "analyzingMessage" => "正在分析{categoryName}...",
        "completedMessage" => "{categoryName}分析完成",
        "pendingStatusShort" => "等待",
        "analyzingStatusShort" => "分析中",
        "completedStatusShort" => "完成",
        "failedStatusShort" => "失败",
        "resultsTitle" => "{name}的运势分析结果",
        "resultsDescription" => "点击卡片查看详细内容。",
        "resultsEmptyTitle" => "未获得分析结果",
        "resultsEmptyDescription" => "所有方面的分析均失败了，请稍后重新开始分析。",
        "viewDetails" => "查看详情",
        "summary" => "摘要",
        "share" => "分享",
        "close" => "关闭",
        "previous" => "上一个",
        "next" => "下一个",
        "shareText" => "[{categoryName}] {summary}",
        "shareSuccess" => "已复制到剪贴板。",
        "shareError" => "复制失败。",
        "systemInstruction" => "你是精通四柱八字、面相学和东方哲学的运势专家。请根据用户的信息，以温暖而平衡的视角解读运势，并始终使用中文回答。回答必须遵循所要求的 JSON 格式。",
        "userInfoHeading" => "用户信息:",
        "promptName" => "姓名",
        "promptDob" => "出生日期",
        "promptTob" => "出生时间",
        "unknownTime" => "未知",
        "photoHint" => "请仅将所提供面部照片的面相特征作为辅助参考。",
        "mainPrompt" => "请求:\n请对'{categoryName}'类别进行运势分析。\n\n结果必须是包含以下字段的 JSON:\n1. 'summary': 2-3 句话的核心摘要。\n2. 'details': 包含以下分节的详细说明。每个分节必须以'### 标题'格式开始。\n\n### 详细分析\n- 根据用户信息给出具体的解读。\n\n### 建议\n- 基于分析结果，提供积极且可行的建议。\n\n### 解读的局限性\n- 明确说明此分析仅基于传统和统计，并不能保证未来。",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_same_keys_and_order_in_all_locales() {
        let expected: Vec<CategoryKey> = CategoryKey::ALL.to_vec();
        for locale in Locale::ALL {
            let keys: Vec<CategoryKey> = categories(locale).iter().map(|c| c.key).collect();
            assert_eq!(keys, expected, "locale {}", locale);
        }
    }

    #[test]
    fn test_category_names_are_localized() {
        assert_eq!(category_name(Locale::Ko, CategoryKey::Wealth), "재물운");
        assert_eq!(category_name(Locale::En, CategoryKey::Wealth), "Wealth");
        assert_eq!(category_name(Locale::Zh, CategoryKey::Wealth), "财运");
    }

    #[test]
    fn test_t_replaces_placeholders() {
        let text = t(Locale::En, "completedMessage", &[("categoryName", "Love")]);
        assert_eq!(text, "Love analysis complete");
    }

    #[test]
    fn test_t_replaces_every_occurrence() {
        let text = t(Locale::En, "{a} and {a}", &[("a", "x")]);
        assert_eq!(text, "x and x");
    }

    #[test]
    fn test_t_falls_back_to_english() {
        // CLI専用の文言は中国語テーブルにない
        let text = t(Locale::Zh, "cliNamePrompt", &[]);
        assert_eq!(text, "Name");
    }

    #[test]
    fn test_t_falls_back_to_raw_key() {
        assert_eq!(t(Locale::Ko, "noSuchKey", &[]), "noSuchKey");
    }

    #[test]
    fn test_t_ignores_unused_vars() {
        let text = t(Locale::Ko, "summary", &[("count", "3")]);
        assert_eq!(text, "요약");
    }

    #[test]
    fn test_ui_keys_exist_in_every_locale() {
        let keys = [
            "appTitle",
            "progressDescriptionErrorInProgress",
            "progressDescriptionErrorComplete",
            "failedStatusShort",
            "resultsEmptyTitle",
            "systemInstruction",
            "mainPrompt",
        ];
        for locale in Locale::ALL {
            for key in keys {
                assert!(lookup(locale, key).is_some(), "{} missing in {}", key, locale);
            }
        }
    }
}

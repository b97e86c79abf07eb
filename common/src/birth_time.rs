//! 出生時刻の入力処理
//!
//! 時(1-12)・分(0-59)・午前/午後の3入力を 24時間制 "HH:MM" にまとめる。
//! - 入力中: 数字以外を除去し2桁まで
//! - フォーカスアウト時: 範囲外はクリア、分はゼロ埋め

use std::fmt;

/// 午前/午後
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Meridiem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "am" | "a" => Ok(Meridiem::Am),
            "pm" | "p" => Ok(Meridiem::Pm),
            _ => Err(format!("Unknown meridiem: {}. Use am or pm", s)),
        }
    }
}

/// 入力中の値を整形（数字のみ・2桁超は前の値を維持）
pub fn sanitize_input(previous: &str, typed: &str) -> String {
    let digits: String = typed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.chars().count() <= 2 {
        digits
    } else {
        previous.to_string()
    }
}

/// 時のフォーカスアウト処理（1〜12以外は空にする）
pub fn validate_hour(hour: &str) -> String {
    match parse_hour(hour) {
        Some(_) => hour.to_string(),
        None => String::new(),
    }
}

/// 分のフォーカスアウト処理（0〜59はゼロ埋め、それ以外は空にする）
pub fn validate_minute(minute: &str) -> String {
    match parse_minute(minute) {
        Some(m) => format!("{:02}", m),
        None => String::new(),
    }
}

/// 24時間制 "HH:MM" に変換
///
/// 時・分のどちらかが空、または範囲外なら `None`
///
/// # Examples
/// ```
/// use fortune_common::{combine_birth_time, Meridiem};
///
/// assert_eq!(combine_birth_time("12", "30", Meridiem::Am).as_deref(), Some("00:30"));
/// assert_eq!(combine_birth_time("07", "05", Meridiem::Pm).as_deref(), Some("19:05"));
/// assert_eq!(combine_birth_time("13", "00", Meridiem::Am), None);
/// ```
pub fn combine_birth_time(hour: &str, minute: &str, meridiem: Meridiem) -> Option<String> {
    let h = parse_hour(hour)?;
    let m = parse_minute(minute)?;

    let h24 = match (meridiem, h) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Pm, h) if h < 12 => h + 12,
        (_, h) => h,
    };
    Some(format!("{:02}:{:02}", h24, m))
}

fn parse_hour(hour: &str) -> Option<u32> {
    hour.trim().parse::<u32>().ok().filter(|h| (1..=12).contains(h))
}

fn parse_minute(minute: &str) -> Option<u32> {
    minute.trim().parse::<u32>().ok().filter(|m| *m <= 59)
}

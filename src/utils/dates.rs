use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// 卡片上的截止时间可能带有 "Due: " 前缀
static DUE_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*due\s*:\s*").expect("Invalid due prefix regex"));

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// 解析截止时间
///
/// 支持 RFC 3339、RFC 2822 (Flask `jsonify` 的默认日期格式)、
/// 常见的无时区格式以及纯日期。带时区的时间按其本地表示处理。
pub fn parse_due_date(raw: &str) -> Option<NaiveDateTime> {
    let text = DUE_PREFIX_RE.replace(raw, "");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// 格式化为 "Month D, YYYY, HH:MM"，无法解析时原样返回
pub fn format_due_date(raw: &str) -> String {
    match parse_due_date(raw) {
        Some(dt) => dt.format("%B %-d, %Y, %H:%M").to_string(),
        None => raw.trim().to_string(),
    }
}

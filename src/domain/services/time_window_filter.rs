// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::models::time_window::TimeWindow;

type PostingTimeParser = fn(&Captures, DateTime<Utc>) -> Option<DateTime<Utc>>;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

// Tried in order, first match wins.
static POSTING_TIME_GRAMMARS: Lazy<Vec<(&'static str, Regex, PostingTimeParser)>> =
    Lazy::new(|| {
        vec![
            // Relative: 22 hours ago, 3 hrs ago, 15 min ago, 1 month ago
            (
                "relative",
                Regex::new(
                    r"(?i)\b(\d+)\s*(minutes?|mins?|hours?|hrs?|days?|weeks?|wks?|months?|mos?|years?|yrs?)\s*ago\b",
                )
                .unwrap(),
                parse_relative as PostingTimeParser,
            ),
            // Yesterday
            (
                "yesterday",
                Regex::new(r"(?i)\byesterday\b").unwrap(),
                parse_yesterday as PostingTimeParser,
            ),
            // Short date: 28 Jun
            (
                "short_date",
                Regex::new(r"^\s*(\d{1,2})\s+([A-Za-z]{3})\s*$").unwrap(),
                parse_short_date as PostingTimeParser,
            ),
            // Epoch seconds: 1719561600
            (
                "epoch",
                Regex::new(r"^\s*(\d+)\s*$").unwrap(),
                parse_epoch as PostingTimeParser,
            ),
        ]
    });

fn parse_relative(caps: &Captures, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let amount: u32 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str().to_ascii_lowercase();

    match unit.as_str() {
        "min" | "mins" | "minute" | "minutes" => {
            now.checked_sub_signed(Duration::minutes(i64::from(amount)))
        }
        "hr" | "hrs" | "hour" | "hours" => now.checked_sub_signed(Duration::hours(i64::from(amount))),
        "day" | "days" => now.checked_sub_signed(Duration::days(i64::from(amount))),
        "wk" | "wks" | "week" | "weeks" => now.checked_sub_signed(Duration::weeks(i64::from(amount))),
        // Calendar subtraction: "1 month ago" lands on the same day of the previous month
        "mo" | "mos" | "month" | "months" => now.checked_sub_months(Months::new(amount)),
        "yr" | "yrs" | "year" | "years" => {
            now.checked_sub_months(Months::new(amount.checked_mul(12)?))
        }
        _ => None,
    }
}

fn parse_yesterday(_: &Captures, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    now.checked_sub_signed(Duration::hours(24))
}

fn parse_epoch(caps: &Captures, _: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let secs: i64 = caps.get(1)?.as_str().parse().ok()?;
    DateTime::from_timestamp(secs, 0)
}

fn parse_short_date(caps: &Captures, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = month_from_abbreviation(caps.get(2)?.as_str())?;
    let year = short_date_year(month, now);

    NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
}

fn month_from_abbreviation(abbreviation: &str) -> Option<u32> {
    let lower = abbreviation.to_ascii_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == lower)
        .map(|index| index as u32 + 1)
}

/// 推断短日期（如 "28 Jun"）的年份
///
/// 月份晚于当前月份时视为去年发布，否则为今年。
pub fn short_date_year(month: u32, now: DateTime<Utc>) -> i32 {
    if month > now.month() {
        now.year() - 1
    } else {
        now.year()
    }
}

/// 将站点原始的发布时间文本解析为绝对时间
///
/// 依次尝试相对时间、"yesterday"、短日期和 Unix 秒四种语法，
/// 都不匹配时返回 `None`。
pub fn parse_posting_time(raw: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if raw.trim().is_empty() {
        return None;
    }

    POSTING_TIME_GRAMMARS
        .iter()
        .find_map(|(_, regex, parser)| regex.captures(raw).and_then(|caps| parser(&caps, now)))
}

/// 单条记录的过滤结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterVerdict {
    pub keep: bool,
    pub posted_at: Option<DateTime<Utc>>,
}

/// 对一条记录做出过滤结论，同时给出解析出的发布时间
///
/// 无法解析时间的记录只在 `TimeWindow::Any` 下保留。
pub fn evaluate(raw: &str, window: TimeWindow, now: DateTime<Utc>) -> FilterVerdict {
    let posted_at = parse_posting_time(raw, now);

    let keep = match (window.span(), posted_at) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(span), Some(instant)) => now.signed_duration_since(instant) <= span,
    };

    FilterVerdict { keep, posted_at }
}

/// 判断发布时间是否落在窗口内（以给定时刻为"现在"）
pub fn is_within_window_at(raw: &str, window: TimeWindow, now: DateTime<Utc>) -> bool {
    if window == TimeWindow::Any {
        return true;
    }
    evaluate(raw, window, now).keep
}

/// 判断发布时间是否落在窗口内
///
/// 以过滤执行时的时刻为准，而不是页面加载时刻。
pub fn is_within_window(raw: &str, window: TimeWindow) -> bool {
    is_within_window_at(raw, window, Utc::now())
}

#[cfg(test)]
#[path = "time_window_filter_test.rs"]
mod tests;

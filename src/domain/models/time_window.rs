// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 时间窗口解析错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid time window: {0:?} (expected \"\", \"24h\" or \"7d\")")]
pub struct WindowParseError(pub String);

/// 调用方请求的时效过滤窗口
///
/// 线上格式为 `""`（不限）、`"24h"`、`"7d"`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    /// 不限时间
    #[default]
    Any,
    /// 最近 24 小时
    Last24h,
    /// 最近 7 天
    Last7d,
}

impl TimeWindow {
    /// 窗口跨度，`Any` 没有上限
    pub fn span(&self) -> Option<Duration> {
        match self {
            TimeWindow::Any => None,
            TimeWindow::Last24h => Some(Duration::hours(24)),
            TimeWindow::Last7d => Some(Duration::days(7)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Any => "",
            TimeWindow::Last24h => "24h",
            TimeWindow::Last7d => "7d",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeWindow::Any => write!(f, "any"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = WindowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(TimeWindow::Any),
            "24h" => Ok(TimeWindow::Last24h),
            "7d" => Ok(TimeWindow::Last7d),
            _ => Err(WindowParseError(s.to_string())),
        }
    }
}

impl Serialize for TimeWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimeWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        raw.parse().map_err(serde::de::Error::custom)
    }
}

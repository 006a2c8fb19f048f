// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No scraper found for this website")]
pub struct SourceParseError(pub String);

/// 支持的招聘站点
///
/// 这是一个封闭的枚举，每个成员在编译期对应一个固定的提取实现。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Expatriates,
    Mourjan,
    Bayt,
    NaukriGulf,
    GulfTalent,
}

impl SourceId {
    pub const ALL: [SourceId; 5] = [
        SourceId::Expatriates,
        SourceId::Mourjan,
        SourceId::Bayt,
        SourceId::NaukriGulf,
        SourceId::GulfTalent,
    ];

    /// 短标识，如 `bayt`
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Expatriates => "expatriates",
            SourceId::Mourjan => "mourjan",
            SourceId::Bayt => "bayt",
            SourceId::NaukriGulf => "naukrigulf",
            SourceId::GulfTalent => "gulftalent",
        }
    }

    /// 站点域名，用于从调用方传入的 URL 识别站点
    pub fn domain(&self) -> &'static str {
        match self {
            SourceId::Expatriates => "expatriates.com",
            SourceId::Mourjan => "mourjan.com",
            SourceId::Bayt => "bayt.com",
            SourceId::NaukriGulf => "naukrigulf.com",
            SourceId::GulfTalent => "gulftalent.com",
        }
    }

    /// 站点根地址，相对链接以此为基准补全
    pub fn base_url(&self) -> &'static str {
        match self {
            SourceId::Expatriates => "https://www.expatriates.com",
            SourceId::Mourjan => "https://www.mourjan.com",
            SourceId::Bayt => "https://www.bayt.com",
            SourceId::NaukriGulf => "https://www.naukrigulf.com",
            SourceId::GulfTalent => "https://www.gulftalent.com",
        }
    }

    /// 根据调用方的标识解析站点
    ///
    /// 接受短标识（`bayt`）或任何包含站点域名的字符串（`https://www.bayt.com/`），
    /// 不区分大小写。
    pub fn resolve(identifier: &str) -> Option<SourceId> {
        let needle = identifier.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|source| needle == source.as_str() || needle.contains(source.domain()))
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = SourceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceId::resolve(s).ok_or_else(|| SourceParseError(s.to_string()))
    }
}

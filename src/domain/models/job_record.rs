// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一条抓取到的招聘信息
///
/// 由提取适配器在抓取时创建，之后不再修改。`link` 要么是绝对地址，
/// 要么为 `None`（无法解析的链接）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub link: Option<String>,
    /// 站点原始的发布时间文本
    #[serde(rename = "postingTime")]
    pub posting_time_raw: String,
    /// 仅按分类分页的站点填写
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// 过滤时解析出的发布时间
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

impl JobRecord {
    pub fn new(title: impl Into<String>, posting_time_raw: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            posting_time_raw: posting_time_raw.into(),
            ..Default::default()
        }
    }
}

/// 去掉首尾空白，空字符串视为缺失
pub fn non_empty(value: impl AsRef<str>) -> Option<String> {
    let trimmed = value.as_ref().trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

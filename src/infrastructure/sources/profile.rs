// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;
use url::Url;

use crate::domain::models::job_record::JobRecord;
use crate::domain::models::source::SourceId;

/// 一个待抓取的列表页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUnit {
    /// 页码（从 1 开始）
    pub page: u32,
    /// 按分类翻页的站点才有
    pub category: Option<&'static str>,
}

impl PageUnit {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            category: None,
        }
    }

    pub fn category(category: &'static str) -> Self {
        Self {
            page: 1,
            category: Some(category),
        }
    }

    /// 日志中使用的标签
    pub fn label(&self) -> String {
        match self.category {
            Some(category) => format!("category {} page {}", category, self.page),
            None => format!("page {}", self.page),
        }
    }
}

/// 站点的翻页方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagePlan {
    /// 编号页 1..=pages
    Numbered { pages: u32 },
    /// 每个分类抓取第一页
    Categories(&'static [&'static str]),
}

impl PagePlan {
    pub fn units(&self) -> Vec<PageUnit> {
        match self {
            PagePlan::Numbered { pages } => (1..=*pages).map(PageUnit::page).collect(),
            PagePlan::Categories(categories) => {
                categories.iter().copied().map(PageUnit::category).collect()
            }
        }
    }
}

/// 站点描述
///
/// 描述某个站点的地址规则、就绪标记和字段映射，由通用的
/// [`ListingPipeline`](super::pipeline::ListingPipeline) 驱动。
pub trait SourceProfile: Send + Sync + 'static {
    fn source(&self) -> SourceId;

    fn page_plan(&self) -> PagePlan;

    fn url_for(&self, unit: &PageUnit) -> String;

    /// 列表渲染完成的标记选择器
    fn ready_selector(&self) -> &'static str;

    /// 是否需要注入反检测脚本
    fn stealth(&self) -> bool {
        false
    }

    /// 从渲染后的页面提取记录（未过滤）
    fn extract(&self, document: &Html, unit: &PageUnit, base: &Url) -> Vec<JobRecord>;
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use super::html::{resolve_link, text_of};
use super::profile::{PagePlan, PageUnit, SourceProfile};
use crate::domain::models::job_record::JobRecord;
use crate::domain::models::source::SourceId;

const NO_TITLE: &str = "No Title";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".search-item").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("span a").unwrap());
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| Selector::parse("a.user-content div").unwrap());

/// expatriates.com 沙特招聘分类
///
/// 发布时间取自条目上的 `epoch` 属性（Unix 秒）。
#[derive(Debug, Clone)]
pub struct Expatriates {
    pages: u32,
}

impl Expatriates {
    pub fn new(pages: u32) -> Self {
        Self { pages }
    }
}

impl Default for Expatriates {
    fn default() -> Self {
        Self::new(5)
    }
}

impl SourceProfile for Expatriates {
    fn source(&self) -> SourceId {
        SourceId::Expatriates
    }

    fn page_plan(&self) -> PagePlan {
        PagePlan::Numbered { pages: self.pages }
    }

    fn url_for(&self, unit: &PageUnit) -> String {
        format!(
            "https://www.expatriates.com/scripts/search/search.epl?page={}&q=&category_id=50&region_name=Saudi+Arabia&region_id=49&ads=1",
            unit.page
        )
    }

    fn ready_selector(&self) -> &'static str {
        ".search-item"
    }

    fn extract(&self, document: &Html, _unit: &PageUnit, base: &Url) -> Vec<JobRecord> {
        document
            .select(&ITEM)
            .map(|item| {
                let anchor = item.select(&TITLE).next();
                let title = text_of(item, &TITLE).unwrap_or_else(|| NO_TITLE.to_string());
                let epoch = item.value().attr("epoch").unwrap_or_default();

                let mut record = JobRecord::new(title, epoch.trim());
                record.link = resolve_link(base, anchor.and_then(|a| a.value().attr("href")));
                record.description = text_of(item, &DESCRIPTION);
                record
            })
            .collect()
    }
}

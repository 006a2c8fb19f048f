// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use super::html::{attr_of, resolve_link, text_of};
use super::profile::{PagePlan, PageUnit, SourceProfile};
use crate::domain::models::job_record::JobRecord;
use crate::domain::models::source::SourceId;

static TUPLE: Lazy<Selector> = Lazy::new(|| Selector::parse(".ng-box.srp-tuple").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse(".designation-title").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.info-position").unwrap());
static COMPANY: Lazy<Selector> = Lazy::new(|| Selector::parse("a.info-org").unwrap());
static LOCATION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".info-loc span:last-child").unwrap());
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| Selector::parse(".description").unwrap());
static TIME: Lazy<Selector> = Lazy::new(|| Selector::parse(".time-star-cont .time").unwrap());

/// naukrigulf.com 沙特职位列表
///
/// 站点有自动化检测，页面加载前需要注入反检测脚本。
#[derive(Debug, Clone, Default)]
pub struct NaukriGulf;

impl SourceProfile for NaukriGulf {
    fn source(&self) -> SourceId {
        SourceId::NaukriGulf
    }

    fn page_plan(&self) -> PagePlan {
        PagePlan::Numbered { pages: 1 }
    }

    fn url_for(&self, unit: &PageUnit) -> String {
        if unit.page <= 1 {
            "https://www.naukrigulf.com/jobs-in-saudi-arabia".to_string()
        } else {
            format!("https://www.naukrigulf.com/jobs-in-saudi-arabia-{}", unit.page)
        }
    }

    fn ready_selector(&self) -> &'static str {
        ".ng-box.srp-tuple"
    }

    fn stealth(&self) -> bool {
        true
    }

    fn extract(&self, document: &Html, _unit: &PageUnit, base: &Url) -> Vec<JobRecord> {
        document
            .select(&TUPLE)
            .map(|item| {
                let title = text_of(item, &TITLE).unwrap_or_default();
                let posting_time = text_of(item, &TIME).unwrap_or_default();

                let mut record = JobRecord::new(title, posting_time);
                record.link = resolve_link(base, attr_of(item, &LINK, "href").as_deref());
                record.company = text_of(item, &COMPANY);
                record.location = text_of(item, &LOCATION);
                record.description = text_of(item, &DESCRIPTION);
                record
            })
            .collect()
    }
}

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

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr.content-visibility-auto").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h2.title a").unwrap());
static COMPANY: Lazy<Selector> = Lazy::new(|| Selector::parse("a.text-base.text-muted").unwrap());
static LOCATION: Lazy<Selector> = Lazy::new(|| Selector::parse("td.col-sm-6 span[title]").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse("td.col-sm-4").unwrap());

/// gulftalent.com 沙特职位列表
///
/// 列表页没有描述；发布时间是 "28 Jun" 形式的短日期。
#[derive(Debug, Clone, Default)]
pub struct GulfTalent;

impl SourceProfile for GulfTalent {
    fn source(&self) -> SourceId {
        SourceId::GulfTalent
    }

    fn page_plan(&self) -> PagePlan {
        PagePlan::Numbered { pages: 1 }
    }

    fn url_for(&self, unit: &PageUnit) -> String {
        format!("https://www.gulftalent.com/saudi-arabia/jobs/{}", unit.page)
    }

    fn ready_selector(&self) -> &'static str {
        "tr.content-visibility-auto"
    }

    fn extract(&self, document: &Html, _unit: &PageUnit, base: &Url) -> Vec<JobRecord> {
        document
            .select(&ROW)
            .map(|row| {
                let title = text_of(row, &TITLE).unwrap_or_default();
                let posting_time = text_of(row, &DATE).unwrap_or_default();

                let mut record = JobRecord::new(title, posting_time);
                record.link = resolve_link(base, attr_of(row, &TITLE, "href").as_deref());
                record.company = text_of(row, &COMPANY);
                record.location = text_of(row, &LOCATION);
                record
            })
            .collect()
    }
}

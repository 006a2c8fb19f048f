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

static JOB: Lazy<Selector> = Lazy::new(|| Selector::parse("li[data-js-job]").unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h2 a").unwrap());
static COMPANY: Lazy<Selector> = Lazy::new(|| Selector::parse(".t-nowrap .t-default").unwrap());
static LOCATION: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".t-nowrap .t-mute.t-small").unwrap());
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| Selector::parse(".jb-descr").unwrap());
static SALARY: Lazy<Selector> = Lazy::new(|| Selector::parse(".jb-label-salary").unwrap());
static DATE: Lazy<Selector> = Lazy::new(|| Selector::parse(".jb-date span").unwrap());

/// bayt.com 沙特职位列表
#[derive(Debug, Clone, Default)]
pub struct Bayt;

impl SourceProfile for Bayt {
    fn source(&self) -> SourceId {
        SourceId::Bayt
    }

    fn page_plan(&self) -> PagePlan {
        PagePlan::Numbered { pages: 1 }
    }

    fn url_for(&self, unit: &PageUnit) -> String {
        format!("https://www.bayt.com/en/saudi-arabia/jobs/?page={}", unit.page)
    }

    fn ready_selector(&self) -> &'static str {
        "li[data-js-job]"
    }

    fn extract(&self, document: &Html, _unit: &PageUnit, base: &Url) -> Vec<JobRecord> {
        document
            .select(&JOB)
            .map(|item| {
                let title = text_of(item, &TITLE).unwrap_or_default();
                let posting_time = text_of(item, &DATE).unwrap_or_default();

                let mut record = JobRecord::new(title, posting_time);
                record.link = resolve_link(base, attr_of(item, &TITLE, "href").as_deref());
                record.company = text_of(item, &COMPANY);
                record.location = text_of(item, &LOCATION);
                record.description = text_of(item, &DESCRIPTION);
                record.salary = text_of(item, &SALARY);
                record
            })
            .collect()
    }
}

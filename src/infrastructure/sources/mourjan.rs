// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use super::html::{clean_text, resolve_link, text_of};
use super::profile::{PagePlan, PageUnit, SourceProfile};
use crate::domain::models::job_record::{non_empty, JobRecord};
use crate::domain::models::source::SourceId;

/// mourjan.com 沙特招聘分类
pub const CATEGORIES: [&str; 41] = [
    "secreterial",
    "accounting",
    "sales-and-marketing",
    "tourist-and-restaurants",
    "designer",
    "teaching",
    "differ-jobs",
    "engineering",
    "programming",
    "fine-arts",
    "beauty-care",
    "drivers",
    "labors",
    "technicians",
    "medicine-and-nursing",
    "law",
    "human-resources",
    "partnership",
    "web-designers",
    "information-technology",
    "customer-service",
    "translators",
    "fitness",
    "landscaping",
    "fashion",
    "editorial",
    "administration",
    "public-relations",
    "ticketing",
    "guards",
    "housemaids",
    "cleaning-workers",
    "child-care",
    "delivery",
    "audio-visual",
    "ac-technicians",
    "tailors",
    "construction",
    "employee",
    "data-entry",
    "craftsmen",
];

const TITLE_FALLBACK_CHARS: usize = 50;

static AD: Lazy<Selector> = Lazy::new(|| Selector::parse(".ad").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a.link").unwrap());
static CONTENT: Lazy<Selector> = Lazy::new(|| Selector::parse(".content").unwrap());
static HINT_BOX: Lazy<Selector> = Lazy::new(|| Selector::parse(".box.hint").unwrap());
static DIV: Lazy<Selector> = Lazy::new(|| Selector::parse("div").unwrap());

/// mourjan.com 分类广告
///
/// 广告没有独立标题，标题取描述的第一句。
#[derive(Debug, Clone, Default)]
pub struct Mourjan;

/// 描述的第一句（到第一个 `.`、`!` 或换行为止，含标点）；
/// 没有句末标记时取前 50 个字符
pub fn title_from_description(description: &str) -> Option<String> {
    let description = description.trim();
    let title = match description.find(['.', '!', '\n']) {
        Some(end) => &description[..=end],
        None => {
            let cut = description
                .char_indices()
                .nth(TITLE_FALLBACK_CHARS)
                .map_or(description.len(), |(index, _)| index);
            &description[..cut]
        }
    };
    non_empty(title)
}

impl SourceProfile for Mourjan {
    fn source(&self) -> SourceId {
        SourceId::Mourjan
    }

    fn page_plan(&self) -> PagePlan {
        PagePlan::Categories(&CATEGORIES)
    }

    fn url_for(&self, unit: &PageUnit) -> String {
        format!(
            "https://www.mourjan.com/sa/{}/vacancies/en/{}/",
            unit.category.unwrap_or_default(),
            unit.page
        )
    }

    fn ready_selector(&self) -> &'static str {
        ".ad"
    }

    fn extract(&self, document: &Html, unit: &PageUnit, base: &Url) -> Vec<JobRecord> {
        document
            .select(&AD)
            .map(|ad| {
                let description = text_of(ad, &CONTENT);
                let title = description
                    .as_deref()
                    .and_then(title_from_description)
                    .unwrap_or_default();

                // Only the trailing div of a multi-div hint box carries the age
                let posting_time = ad
                    .select(&HINT_BOX)
                    .next()
                    .map(|hint| hint.select(&DIV).collect::<Vec<_>>())
                    .filter(|divs| divs.len() > 1)
                    .and_then(|divs| divs.last().map(|div| clean_text(*div)))
                    .unwrap_or_default();

                let mut record = JobRecord::new(title, posting_time);
                record.link = resolve_link(
                    base,
                    ad.select(&LINK).next().and_then(|a| a.value().attr("href")),
                );
                record.description = description;
                record.category = unit.category.map(str::to_string);
                record
            })
            .collect()
    }
}

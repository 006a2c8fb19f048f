// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Utc;
use scraper::Html;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::profile::{PageUnit, SourceProfile};
use crate::config::settings::Settings;
use crate::domain::extraction::adapter::{AdapterError, ExtractionAdapter};
use crate::domain::models::job_record::JobRecord;
use crate::domain::models::source::SourceId;
use crate::domain::models::time_window::TimeWindow;
use crate::domain::services::time_window_filter::evaluate;
use crate::engines::traits::{BrowserEngine, BrowserError, BrowserSession, PageRequest};
use crate::infrastructure::metrics;
use crate::utils::identity::random_user_agent;
use crate::utils::pacing::HumanPacer;

/// 页面加载参数
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub navigation_timeout: Duration,
    pub ready_timeout: Duration,
    pub pacer: HumanPacer,
}

impl PipelineOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            navigation_timeout: settings.browser.navigation_timeout(),
            ready_timeout: settings.browser.ready_timeout(),
            pacer: HumanPacer::from_settings(&settings.pacing),
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            navigation_timeout: Duration::from_secs(45),
            ready_timeout: Duration::from_secs(10),
            pacer: HumanPacer::default(),
        }
    }
}

/// 通用列表页抓取流程
///
/// 对站点的每个页面依次执行：打开页面、随机等待、等待就绪标记、
/// 提取字段、按时间窗口过滤、关闭页面、再随机等待。单页失败只记录并跳过；
/// 浏览器本身失效时整个站点失败。
pub struct ListingPipeline<P: SourceProfile> {
    profile: P,
    engine: Arc<dyn BrowserEngine>,
    options: PipelineOptions,
}

impl<P: SourceProfile> ListingPipeline<P> {
    pub fn new(profile: P, engine: Arc<dyn BrowserEngine>, options: PipelineOptions) -> Self {
        Self {
            profile,
            engine,
            options,
        }
    }

    async fn scrape_unit(
        &self,
        session: &dyn BrowserSession,
        unit: &PageUnit,
        base: &Url,
        window: TimeWindow,
    ) -> Result<Vec<JobRecord>, BrowserError> {
        let mut request = PageRequest::new(self.profile.url_for(unit), random_user_agent());
        request.navigation_timeout = self.options.navigation_timeout;
        request.stealth = self.profile.stealth();

        debug!("Loading {} ({})", request.url, unit.label());
        let page = session.open_page(&request).await?;

        self.options.pacer.pause().await;

        let html = match page
            .wait_for_selector(self.profile.ready_selector(), self.options.ready_timeout)
            .await
        {
            Ok(()) => page.content().await,
            Err(e) => Err(e),
        };
        page.close().await;
        let html = html?;

        let document = Html::parse_document(&html);
        let extracted = self.profile.extract(&document, unit, base);
        let found = extracted.len();

        let now = Utc::now();
        let kept: Vec<JobRecord> = extracted
            .into_iter()
            .filter_map(|mut record| {
                let verdict = evaluate(&record.posting_time_raw, window, now);
                verdict.keep.then(|| {
                    record.posted_at = verdict.posted_at;
                    record
                })
            })
            .collect();

        debug!("{}: {} of {} records inside window", unit.label(), kept.len(), found);
        Ok(kept)
    }
}

#[async_trait]
impl<P: SourceProfile> ExtractionAdapter for ListingPipeline<P> {
    async fn run(&self, window: TimeWindow) -> Result<Vec<JobRecord>, AdapterError> {
        let source = self.profile.source();
        let base = Url::parse(source.base_url())
            .map_err(|e| AdapterError::Configuration(format!("{}: {}", source, e)))?;

        let session = self.engine.launch().await?;
        let mut records = Vec::new();

        for unit in self.profile.page_plan().units() {
            match self.scrape_unit(session.as_ref(), &unit, &base, window).await {
                Ok(kept) => {
                    info!("{}: collected {} jobs after filtering", unit.label(), kept.len());
                    records.extend(kept);
                }
                Err(e) if e.is_page_scoped() => {
                    warn!("Failed to load or parse {}: {}", unit.label(), e);
                    metrics::record_unit_skipped(source.as_str());
                }
                Err(e) => {
                    warn!("Browser lost at {}, abandoning {}: {}", unit.label(), source, e);
                    session.close().await;
                    return Err(e.into());
                }
            }

            self.options.pacer.pause().await;
        }

        session.close().await;
        metrics::record_records_collected(source.as_str(), records.len());
        Ok(records)
    }

    fn source(&self) -> SourceId {
        self.profile.source()
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::Router;
use jobharvest::domain::models::scrape_job::{JobId, ScrapeJob};
use jobharvest::engines::traits::{
    BrowserEngine, BrowserError, BrowserSession, ListingPage, PageRequest,
};
use jobharvest::infrastructure::registry::JobRegistry;
use jobharvest::infrastructure::sources::{AdapterSet, PipelineOptions};
use jobharvest::presentation::routes;
use jobharvest::utils::pacing::HumanPacer;
use jobharvest::workers::ScrapeOrchestrator;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const BAYT_URL: &str = "https://www.bayt.com/en/saudi-arabia/jobs/?page=1";
pub const GULFTALENT_URL: &str = "https://www.gulftalent.com/saudi-arabia/jobs/1";
pub const MOURJAN_DRIVERS_URL: &str = "https://www.mourjan.com/sa/drivers/vacancies/en/1/";
pub const MOURJAN_LABORS_URL: &str = "https://www.mourjan.com/sa/labors/vacancies/en/1/";

pub const BAYT_HTML: &str = r#"
<ul>
  <li data-js-job="">
    <h2><a href="/en/saudi-arabia/jobs/staff-nurse-1/">Staff Nurse</a></h2>
    <div class="t-nowrap"><span class="t-default">Dallah Hospital</span></div>
    <div class="t-nowrap"><span class="t-mute t-small">Riyadh</span></div>
    <div class="jb-date"><span>2 hours ago</span></div>
  </li>
  <li data-js-job="">
    <h2><a href="/en/saudi-arabia/jobs/site-engineer-2/">Site Engineer</a></h2>
    <div class="jb-date"><span>10 days ago</span></div>
  </li>
  <li data-js-job="">
    <h2><a href="/en/saudi-arabia/jobs/cashier-3/">Cashier</a></h2>
    <div class="jb-date"><span>Featured</span></div>
  </li>
</ul>
"#;

pub const GULFTALENT_HTML: &str = r#"
<table><tbody>
  <tr class="content-visibility-auto">
    <td class="col-sm-6"><h2 class="title"><a href="/saudi-arabia/jobs/pm-1">Project Manager</a></h2></td>
    <td class="col-sm-4">3 Jan</td>
  </tr>
</tbody></table>
"#;

pub const MOURJAN_DRIVERS_HTML: &str = r#"
<div class="ad">
  <a class="link" href="/sa/drivers/vacancies/en/1/">view</a>
  <div class="content">Family driver needed. Riyadh</div>
  <div class="box hint"><div>Riyadh</div><div>5 hours ago</div></div>
</div>
"#;

pub const MOURJAN_LABORS_HTML: &str = r#"
<div class="ad">
  <div class="content">Masons wanted! Daily pay</div>
  <div class="box hint"><div>Jeddah</div><div>1 day ago</div></div>
</div>
"#;

/// 按 URL 返回固定 HTML 的浏览器；未登记的 URL 导航失败
#[derive(Clone, Default)]
pub struct FixtureEngine {
    pages: Arc<HashMap<String, String>>,
    pub visited: Arc<Mutex<Vec<String>>>,
    launch_error: Option<String>,
}

impl FixtureEngine {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: Arc::new(
                pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
            ),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            launch_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn standard() -> Self {
        Self::new(&[
            (BAYT_URL, BAYT_HTML),
            (GULFTALENT_URL, GULFTALENT_HTML),
            (MOURJAN_DRIVERS_URL, MOURJAN_DRIVERS_HTML),
            (MOURJAN_LABORS_URL, MOURJAN_LABORS_HTML),
        ])
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrowserEngine for FixtureEngine {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        match &self.launch_error {
            Some(message) => Err(BrowserError::Launch(message.clone())),
            None => Ok(Box::new(self.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

#[async_trait]
impl BrowserSession for FixtureEngine {
    async fn open_page(&self, request: &PageRequest) -> Result<Box<dyn ListingPage>, BrowserError> {
        self.visited.lock().unwrap().push(request.url.clone());
        match self.pages.get(&request.url) {
            Some(html) => Ok(Box::new(FixturePage(html.clone()))),
            None => Err(BrowserError::Navigation {
                url: request.url.clone(),
                message: "net::ERR_NAME_NOT_RESOLVED".into(),
            }),
        }
    }

    async fn close(&self) {}
}

pub struct FixturePage(String);

#[async_trait]
impl ListingPage for FixturePage {
    async fn wait_for_selector(&self, _selector: &str, _timeout: Duration) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn content(&self) -> Result<String, BrowserError> {
        Ok(self.0.clone())
    }

    async fn close(&self) {}
}

pub fn fast_options() -> PipelineOptions {
    PipelineOptions {
        navigation_timeout: Duration::from_secs(1),
        ready_timeout: Duration::from_secs(1),
        pacer: HumanPacer::disabled(),
    }
}

pub fn orchestrator(engine: FixtureEngine) -> ScrapeOrchestrator {
    let adapters = AdapterSet::with_all_sources(Arc::new(engine), fast_options(), 2);
    ScrapeOrchestrator::new(JobRegistry::new(), Arc::new(adapters))
}

pub fn app(engine: FixtureEngine) -> (Router, ScrapeOrchestrator) {
    let orchestrator = orchestrator(engine);
    (routes::routes(orchestrator.clone()), orchestrator)
}

/// 轮询登记表直到作业完成
pub async fn wait_until_done(registry: &JobRegistry, id: JobId) -> ScrapeJob {
    tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            let job = registry.get(id).unwrap();
            if job.is_done() {
                return job;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("job did not finish in time")
}

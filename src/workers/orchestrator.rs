// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::any::Any;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, info_span, warn, Instrument};

use crate::domain::models::scrape_job::{JobId, SourceOutcome};
use crate::domain::models::source::{SourceId, SourceParseError};
use crate::domain::models::time_window::TimeWindow;
use crate::infrastructure::metrics;
use crate::infrastructure::registry::JobRegistry;
use crate::infrastructure::sources::AdapterSet;

/// 抓取编排器
///
/// 为每个请求登记作业，然后在后台任务中按请求顺序逐个运行站点适配器，
/// 每完成一个站点就把结果写回登记表。任何站点失败都只会变成该站点的
/// 错误结果，作业最终总会进入 Done。
#[derive(Clone)]
pub struct ScrapeOrchestrator {
    registry: JobRegistry,
    adapters: Arc<AdapterSet>,
}

impl ScrapeOrchestrator {
    pub fn new(registry: JobRegistry, adapters: Arc<AdapterSet>) -> Self {
        Self { registry, adapters }
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// 登记作业并立即返回作业ID，抓取在后台进行
    pub fn start_job(&self, sources: Vec<String>, window: TimeWindow) -> JobId {
        self.spawn_job(sources, window).0
    }

    /// 同 [`start_job`](Self::start_job)，额外返回后台任务句柄
    pub fn spawn_job(&self, sources: Vec<String>, window: TimeWindow) -> (JobId, JoinHandle<()>) {
        let id = self.registry.create(sources.len());
        metrics::record_job_started();

        let orchestrator = self.clone();
        let span = info_span!("scrape_job", job_id = %id);
        let handle = tokio::spawn(
            async move {
                orchestrator.run_job(id, sources, window).await;
            }
            .instrument(span),
        );

        (id, handle)
    }

    /// 依次运行每个站点并在最后标记完成
    pub async fn run_job(&self, id: JobId, sources: Vec<String>, window: TimeWindow) {
        info!(
            "Scrape job started: {} sources, window {:?}",
            sources.len(),
            window.as_str()
        );

        for identifier in sources {
            let outcome = self.run_source(&identifier, window).await;
            match self.registry.record_outcome(id, outcome) {
                Ok(progress) => info!("Progress {} for job {}", progress, id),
                Err(e) => error!("Failed to record outcome for {}: {}", identifier, e),
            }
        }

        if let Err(e) = self.registry.finish(id) {
            error!("Failed to finish job {}: {}", id, e);
            return;
        }

        match self.registry.get(id) {
            Ok(job) => info!(
                "Scrape job done: {} records from {} sources",
                job.record_count(),
                job.total
            ),
            Err(e) => warn!("Job {} vanished after finishing: {}", id, e),
        }
    }

    async fn run_source(&self, identifier: &str, window: TimeWindow) -> SourceOutcome {
        let Some(adapter) = SourceId::resolve(identifier).and_then(|s| self.adapters.get(s)) else {
            let err = SourceParseError(identifier.to_string());
            warn!(source = %err.0, "{}", err);
            metrics::record_source_outcome("unknown", false);
            return SourceOutcome::error(identifier, err.to_string());
        };

        let source = adapter.source();
        let span = info_span!("source", source = %source);
        let task = tokio::spawn(async move { adapter.run(window).await }.instrument(span));

        match task.await {
            Ok(Ok(records)) => {
                info!("{} returned {} records", source, records.len());
                metrics::record_source_outcome(source.as_str(), true);
                SourceOutcome::data(identifier, records)
            }
            Ok(Err(e)) => {
                error!("{} failed: {}", source, e);
                metrics::record_source_outcome(source.as_str(), false);
                SourceOutcome::error(identifier, e.to_string())
            }
            Err(e) => {
                let message = join_failure_message(e);
                error!("{} {}", source, message);
                metrics::record_source_outcome(source.as_str(), false);
                SourceOutcome::error(identifier, message)
            }
        }
    }
}

fn join_failure_message(error: JoinError) -> String {
    if error.is_panic() {
        format!("adapter panicked: {}", panic_payload(error.into_panic()))
    } else {
        "adapter task was cancelled".to_string()
    }
}

fn panic_payload(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;

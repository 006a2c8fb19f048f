// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::JobRecord;
use crate::domain::models::source::SourceId;
use crate::domain::models::time_window::TimeWindow;
use crate::engines::traits::BrowserError;
use async_trait::async_trait;
use thiserror::Error;

/// 站点级致命错误
///
/// 单个页面或分类的失败在适配器内部跳过，不会以此类型返回。
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Browser unavailable: {0}")]
    Browser(#[from] BrowserError),
    #[error("Invalid source configuration: {0}")]
    Configuration(String),
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait ExtractionAdapter: Send + Sync {
    /// Scrape every page of the source and return the records inside `window`
    async fn run(&self, window: TimeWindow) -> Result<Vec<JobRecord>, AdapterError>;

    /// The source this adapter serves
    fn source(&self) -> SourceId;
}

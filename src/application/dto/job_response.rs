// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

use crate::domain::models::scrape_job::{JobId, JobStatus, ScrapeJob, SourceOutcome};

/// 创建作业的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreatedDto {
    #[serde(rename = "jobId")]
    pub job_id: JobId,
}

/// 作业结果查询的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResultsDto {
    pub status: JobStatus,
    pub outcomes: Vec<SourceOutcome>,
    pub progress: usize,
    pub total: usize,
}

impl From<ScrapeJob> for JobResultsDto {
    fn from(job: ScrapeJob) -> Self {
        Self {
            status: job.status,
            outcomes: job.outcomes,
            progress: job.progress,
            total: job.total,
        }
    }
}

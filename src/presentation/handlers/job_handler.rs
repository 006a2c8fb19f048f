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

use axum::extract::{rejection::JsonRejection, Extension, Json, Path};
use tracing::info;
use validator::Validate;

use crate::{
    application::dto::{
        job_request::ScrapeJobRequestDto,
        job_response::{JobCreatedDto, JobResultsDto},
    },
    domain::models::scrape_job::JobId,
    presentation::errors::{AppError, RequestError},
    workers::orchestrator::ScrapeOrchestrator,
};

/// 创建抓取作业
///
/// 立即返回作业ID，不等待抓取完成。
pub async fn create_job(
    Extension(orchestrator): Extension<ScrapeOrchestrator>,
    payload: Result<Json<ScrapeJobRequestDto>, JsonRejection>,
) -> Result<Json<JobCreatedDto>, AppError> {
    let Json(request) = payload.map_err(|e| RequestError::Validation(e.body_text()))?;

    if let Err(errors) = request.validate() {
        return Err(RequestError::Validation(errors.to_string()).into());
    }

    let job_id = orchestrator.start_job(request.sources, request.window);
    info!("Accepted scrape job {}", job_id);

    Ok(Json(JobCreatedDto { job_id }))
}

/// 查询作业进度与结果
pub async fn get_results(
    Extension(orchestrator): Extension<ScrapeOrchestrator>,
    Path(id): Path<String>,
) -> Result<Json<JobResultsDto>, AppError> {
    let job_id: JobId = id.parse().map_err(|_| RequestError::UnknownJob)?;
    let job = orchestrator.registry().get(job_id)?;

    Ok(Json(JobResultsDto::from(job)))
}

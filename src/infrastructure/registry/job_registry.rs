// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::models::scrape_job::{JobId, JobStatus, ScrapeJob, SourceOutcome};

/// 作业登记表错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// 作业不存在
    #[error("Job not found")]
    NotFound(JobId),
    /// 作业已完成，结果不可再追加
    #[error("Job {0} is already done")]
    Finished(JobId),
    /// 结果数已达到站点总数
    #[error("Job {0} already has all {1} outcomes")]
    Overflow(JobId, usize),
}

/// 进程内作业登记表
///
/// 编排器写入、查询端读取。每次修改都在对应条目的写锁内完成，
/// 读取方拿到的是克隆出的快照，不会看到写了一半的状态。
#[derive(Clone, Default)]
pub struct JobRegistry {
    jobs: Arc<DashMap<JobId, ScrapeJob>>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记新作业，状态为 Pending
    pub fn create(&self, total: usize) -> JobId {
        let job = ScrapeJob::new(total);
        let id = job.id;
        self.jobs.insert(id, job);
        id
    }

    /// 追加一个站点结果并推进进度
    pub fn record_outcome(&self, id: JobId, outcome: SourceOutcome) -> Result<usize, RegistryError> {
        let mut job = self.jobs.get_mut(&id).ok_or(RegistryError::NotFound(id))?;

        if job.is_done() {
            return Err(RegistryError::Finished(id));
        }
        if job.progress >= job.total {
            return Err(RegistryError::Overflow(id, job.total));
        }

        job.outcomes.push(outcome);
        job.progress = job.outcomes.len();
        Ok(job.progress)
    }

    /// 标记作业完成；重复调用不改变首次完成时间
    pub fn finish(&self, id: JobId) -> Result<(), RegistryError> {
        let mut job = self.jobs.get_mut(&id).ok_or(RegistryError::NotFound(id))?;

        if !job.is_done() {
            job.status = JobStatus::Done;
            job.finished_at = Some(Utc::now());
        }
        Ok(())
    }

    pub fn get(&self, id: JobId) -> Result<ScrapeJob, RegistryError> {
        self.jobs
            .get(&id)
            .map(|job| job.clone())
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// 删除在 `cutoff`（含）之前完成的作业，返回删除数量
    ///
    /// 未完成的作业永远不会被删除。
    pub fn purge_finished_before(&self, cutoff: DateTime<Utc>) -> usize {
        let before = self.jobs.len();
        self.jobs.retain(|_, job| match job.finished_at {
            Some(finished_at) if job.is_done() => finished_at > cutoff,
            _ => true,
        });
        before.saturating_sub(self.jobs.len())
    }
}

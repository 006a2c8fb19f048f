// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::job_record::JobRecord;

/// 抓取作业标识
///
/// 对调用方而言是不透明字符串，内部使用 UUID v4。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(JobId)
    }
}

/// 作业状态
///
/// 状态只会从 Pending 转到 Done，且只转一次。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Done,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Done => write!(f, "done"),
        }
    }
}

/// 单个站点的执行结果：记录列表或错误信息，二者必居其一
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeResult {
    Data(Vec<JobRecord>),
    Error(String),
}

/// 站点结果
///
/// 序列化为 `{source, data}` 或 `{source, error}`。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceOutcome {
    /// 调用方传入的原始站点标识
    pub source: String,
    #[serde(flatten)]
    pub result: OutcomeResult,
}

impl SourceOutcome {
    pub fn data(source: impl Into<String>, records: Vec<JobRecord>) -> Self {
        Self {
            source: source.into(),
            result: OutcomeResult::Data(records),
        }
    }

    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            result: OutcomeResult::Error(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.result, OutcomeResult::Error(_))
    }

    pub fn records(&self) -> &[JobRecord] {
        match &self.result {
            OutcomeResult::Data(records) => records,
            OutcomeResult::Error(_) => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.result {
            OutcomeResult::Error(message) => Some(message),
            OutcomeResult::Data(_) => None,
        }
    }
}

/// 抓取作业
///
/// 由编排器创建并在每个站点完成后原地更新。`progress` 始终等于
/// `outcomes.len()` 且不超过 `total`；进入 Done 后结果列表不再变化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeJob {
    pub id: JobId,
    pub status: JobStatus,
    pub outcomes: Vec<SourceOutcome>,
    pub progress: usize,
    pub total: usize,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ScrapeJob {
    pub fn new(total: usize) -> Self {
        Self {
            id: JobId::new(),
            status: JobStatus::Pending,
            outcomes: Vec::with_capacity(total),
            progress: 0,
            total,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == JobStatus::Done
    }

    /// 所有站点结果中的记录总数
    pub fn record_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.records().len()).sum()
    }
}

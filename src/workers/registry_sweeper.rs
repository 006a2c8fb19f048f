// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::settings::RegistrySettings;
use crate::infrastructure::registry::JobRegistry;

/// 已完成作业清理工作器
///
/// 定期删除完成时间早于保留期限的作业，进行中的作业不受影响。
pub struct RegistrySweeper {
    registry: JobRegistry,
    retention: Duration,
    interval: Duration,
}

impl RegistrySweeper {
    pub fn new(registry: JobRegistry, retention: Duration, interval: Duration) -> Self {
        Self {
            registry,
            retention,
            interval,
        }
    }

    /// 只有配置了保留期限时才创建
    pub fn from_settings(registry: JobRegistry, settings: &RegistrySettings) -> Option<Self> {
        let retention = Duration::from_secs(settings.retention_secs?);
        let interval = Duration::from_secs(settings.sweep_interval_secs.max(1));
        Some(Self::new(registry, retention, interval))
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!(
            "Registry sweeper started (retention {:?}, every {:?})",
            self.retention, self.interval
        );

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;
            let removed = self.sweep();
            if removed > 0 {
                info!("Evicted {} finished jobs", removed);
            } else {
                debug!("No finished jobs past retention");
            }
        }
    }

    /// 执行一次清理，返回删除数量
    pub fn sweep(&self) -> usize {
        let retention = match chrono::Duration::from_std(self.retention) {
            Ok(retention) => retention,
            Err(e) => {
                warn!("Retention out of range, skipping sweep: {}", e);
                return 0;
            }
        };
        match Utc::now().checked_sub_signed(retention) {
            Some(cutoff) => self.registry.purge_finished_before(cutoff),
            None => 0,
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PacingSettings;
use std::time::Duration;

/// 人类化节奏控制
///
/// 每次页面加载之后、以及翻页之前随机等待一段时间，
/// 区间为 `[min, max]`（毫秒，闭区间）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanPacer {
    min_ms: u64,
    max_ms: u64,
}

impl HumanPacer {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        // A reversed range is treated as its mirror
        let (min_ms, max_ms) = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };
        Self { min_ms, max_ms }
    }

    pub fn from_settings(settings: &PacingSettings) -> Self {
        Self::new(settings.min_delay_ms, settings.max_delay_ms)
    }

    /// 不等待，用于测试
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    /// 下一次等待时长
    pub fn next_delay(&self) -> Duration {
        if self.max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::random_range(self.min_ms..=self.max_ms))
    }

    pub async fn pause(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tracing::trace!("Pausing for {:?}", delay);
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for HumanPacer {
    fn default() -> Self {
        Self::new(2000, 6000)
    }
}

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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub browser: BrowserSettings,
    pub pacing: PacingSettings,
    pub scraping: ScrapingSettings,
    pub registry: RegistrySettings,
    #[serde(default)]
    pub metrics: MetricsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// 浏览器设置
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    /// 远程调试地址；设置后连接已有的 Chrome 而不是启动新进程
    pub remote_url: Option<String>,
    pub headless: bool,
    pub navigation_timeout_secs: u64,
    pub ready_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl BrowserSettings {
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn ready_timeout(&self) -> Duration {
        Duration::from_secs(self.ready_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PacingSettings {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrapingSettings {
    /// expatriates 抓取的页数
    pub expatriates_pages: u32,
}

/// 作业登记表设置
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    /// 已完成作业的保留时长（秒）；未设置时作业在进程生命周期内一直保留
    pub retention_secs: Option<u64>,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsSettings {
    /// Prometheus 抓取端点监听地址，未设置时不导出指标
    pub listen_addr: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBHARVEST").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 代码内置的默认值
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            // Browser
            .set_default("browser.headless", true)?
            .set_default("browser.navigation_timeout_secs", 45)?
            .set_default("browser.ready_timeout_secs", 10)?
            .set_default("browser.request_timeout_secs", 30)?
            // Human-like pacing between page loads
            .set_default("pacing.min_delay_ms", 2000)?
            .set_default("pacing.max_delay_ms", 6000)?
            .set_default("scraping.expatriates_pages", 5)?
            .set_default("registry.sweep_interval_secs", 300)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;

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

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// 浏览器引擎错误类型
#[derive(Error, Debug, Clone)]
pub enum BrowserError {
    /// 浏览器启动或连接失败
    #[error("Failed to launch browser: {0}")]
    Launch(String),
    /// 页面导航失败
    #[error("Navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },
    /// 超时
    #[error("Timed out after {after:?} waiting for {what}")]
    Timeout { what: String, after: Duration },
    /// 其他页面错误
    #[error("Page error: {0}")]
    Page(String),
}

impl BrowserError {
    /// 是否只影响当前页面（可以跳过该页继续）
    pub fn is_page_scoped(&self) -> bool {
        !matches!(self, BrowserError::Launch(_))
    }
}

/// 打开一个列表页所需的参数
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// 目标URL
    pub url: String,
    /// 本次请求使用的 User-Agent
    pub user_agent: String,
    /// 额外请求头
    pub headers: HashMap<String, String>,
    /// 导航超时
    pub navigation_timeout: Duration,
    /// 是否注入反自动化检测脚本
    pub stealth: bool,
}

impl PageRequest {
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: user_agent.into(),
            headers: default_headers(),
            navigation_timeout: Duration::from_secs(45),
            stealth: false,
        }
    }
}

/// 每个页面都会附带的请求头
pub fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        (
            "Accept-Language".to_string(),
            "en-US,en;q=0.9".to_string(),
        ),
        (
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"
                .to_string(),
        ),
    ])
}

/// 浏览器引擎特质
///
/// 每次站点抓取启动一个会话，结束时关闭。
#[async_trait]
pub trait BrowserEngine: Send + Sync {
    /// 启动（或连接）浏览器并返回会话
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}

/// 浏览器会话
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// 打开新页面并导航到目标地址
    async fn open_page(&self, request: &PageRequest) -> Result<Box<dyn ListingPage>, BrowserError>;

    /// 关闭会话
    async fn close(&self);
}

/// 已导航完成的列表页
#[async_trait]
pub trait ListingPage: Send + Sync {
    /// 等待列表就绪标记出现
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), BrowserError>;

    /// 渲染后的 HTML
    async fn content(&self) -> Result<String, BrowserError>;

    /// 关闭页面
    async fn close(&self);
}

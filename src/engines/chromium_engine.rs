// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::BrowserSettings;
use crate::engines::traits::{
    BrowserEngine, BrowserError, BrowserSession, ListingPage, PageRequest,
};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::{Headers, SetExtraHttpHeadersParams};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

// Hides the usual automation fingerprints before any site script runs.
const STEALTH_SCRIPT: &str = r#"
Object.defineProperty(navigator, 'webdriver', { get: () => undefined });
Object.defineProperty(navigator, 'plugins', { get: () => [1, 2, 3, 4, 5] });
Object.defineProperty(navigator, 'languages', { get: () => ['en-US', 'en'] });
"#;

const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Chromium 引擎
///
/// 基于 chromiumoxide 驱动无头 Chromium。每次 `launch` 都启动独立的浏览器
/// 进程（或连接到远程调试地址），会话之间互不共享。
#[derive(Debug, Clone)]
pub struct ChromiumEngine {
    remote_url: Option<String>,
    headless: bool,
    request_timeout: Duration,
}

impl ChromiumEngine {
    pub fn new(settings: &BrowserSettings) -> Self {
        // CDP commands include `goto`, so they must not expire before navigation does
        let request_timeout = settings
            .request_timeout_secs
            .max(settings.navigation_timeout_secs);

        Self {
            remote_url: settings.remote_url.clone(),
            headless: settings.headless,
            request_timeout: Duration::from_secs(request_timeout),
        }
    }

    fn launch_config(&self) -> Result<BrowserConfig, BrowserError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(self.request_timeout)
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-blink-features=AutomationControlled");

        if !self.headless {
            builder = builder.with_head();
        }

        builder.build().map_err(BrowserError::Launch)
    }
}

#[async_trait]
impl BrowserEngine for ChromiumEngine {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        let ((browser, mut handler), owned) = if let Some(ref url) = self.remote_url {
            tracing::info!("Connecting to remote Chrome instance at: {}", url);
            let pair = Browser::connect(url).await.map_err(|e| {
                BrowserError::Launch(format!("Failed to connect to remote Chrome: {}", e))
            })?;
            (pair, false)
        } else {
            let pair = Browser::launch(self.launch_config()?)
                .await
                .map_err(|e| BrowserError::Launch(e.to_string()))?;
            (pair, true)
        };

        // Drive the CDP event loop for the lifetime of the session
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Box::new(ChromiumSession {
            browser: Mutex::new(browser),
            handler: handler_task,
            owned,
        }))
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}

/// 单次抓取所用的浏览器会话
pub struct ChromiumSession {
    browser: Mutex<Browser>,
    handler: JoinHandle<()>,
    owned: bool,
}

impl ChromiumSession {
    async fn prepare(&self, page: &Page, request: &PageRequest) -> Result<(), BrowserError> {
        page.set_user_agent(request.user_agent.as_str())
            .await
            .map_err(|e| BrowserError::Page(format!("Failed to set user agent: {}", e)))?;

        if !request.headers.is_empty() {
            let headers = serde_json::to_value(&request.headers)
                .map_err(|e| BrowserError::Page(e.to_string()))?;
            page.execute(SetExtraHttpHeadersParams::new(Headers::new(headers)))
                .await
                .map_err(|e| BrowserError::Page(format!("Failed to set headers: {}", e)))?;
        }

        if request.stealth {
            page.evaluate_on_new_document(STEALTH_SCRIPT)
                .await
                .map_err(|e| BrowserError::Page(format!("Failed to inject script: {}", e)))?;
        }

        Ok(())
    }
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn open_page(&self, request: &PageRequest) -> Result<Box<dyn ListingPage>, BrowserError> {
        let page = {
            let browser = self.browser.lock().await;
            browser
                .new_page("about:blank")
                .await
                .map_err(|e| BrowserError::Page(e.to_string()))?
        };

        let listing = ChromiumPage { page };

        if let Err(e) = self.prepare(&listing.page, request).await {
            listing.close().await;
            return Err(e);
        }

        let navigation =
            tokio::time::timeout(request.navigation_timeout, listing.page.goto(request.url.as_str()))
                .await;

        match navigation {
            Ok(Ok(_)) => Ok(Box::new(listing)),
            Ok(Err(e)) => {
                listing.close().await;
                Err(BrowserError::Navigation {
                    url: request.url.clone(),
                    message: e.to_string(),
                })
            }
            Err(_) => {
                listing.close().await;
                Err(BrowserError::Timeout {
                    what: format!("navigation to {}", request.url),
                    after: request.navigation_timeout,
                })
            }
        }
    }

    async fn close(&self) {
        if self.owned {
            let mut browser = self.browser.lock().await;
            if let Err(e) = browser.close().await {
                tracing::warn!("Failed to close browser: {}", e);
            }
            if let Err(e) = browser.wait().await {
                tracing::debug!("Failed to reap browser process: {}", e);
            }
        }
        self.handler.abort();
    }
}

/// Chromium 页面
pub struct ChromiumPage {
    page: Page,
}

#[async_trait]
impl ListingPage for ChromiumPage {
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), BrowserError> {
        let poll = async {
            loop {
                if self.page.find_element(selector).await.is_ok() {
                    return;
                }
                tokio::time::sleep(READY_POLL_INTERVAL).await;
            }
        };

        tokio::time::timeout(timeout, poll)
            .await
            .map_err(|_| BrowserError::Timeout {
                what: format!("selector {}", selector),
                after: timeout,
            })
    }

    async fn content(&self) -> Result<String, BrowserError> {
        self.page
            .content()
            .await
            .map_err(|e| BrowserError::Page(e.to_string()))
    }

    async fn close(&self) {
        if let Err(e) = self.page.clone().close().await {
            tracing::debug!("Failed to close page: {}", e);
        }
    }
}

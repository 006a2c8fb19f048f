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

use jobharvest::config::settings::Settings;
use jobharvest::engines::chromium_engine::ChromiumEngine;
use jobharvest::engines::traits::BrowserEngine;
use jobharvest::infrastructure::registry::JobRegistry;
use jobharvest::infrastructure::sources::AdapterSet;
use jobharvest::presentation::routes;
use jobharvest::workers::{RegistrySweeper, ScrapeOrchestrator};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use jobharvest::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobharvest...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    jobharvest::infrastructure::metrics::init_metrics(settings.metrics.listen_addr.as_deref())?;

    // 3. Browser engine and source adapters
    let engine: Arc<dyn BrowserEngine> = Arc::new(ChromiumEngine::new(&settings.browser));
    let adapters = Arc::new(AdapterSet::from_settings(&settings, engine));

    // 4. Registry and orchestrator
    let registry = JobRegistry::new();
    let orchestrator = ScrapeOrchestrator::new(registry.clone(), adapters);

    // 5. Start workers
    if let Some(sweeper) = RegistrySweeper::from_settings(registry, &settings.registry) {
        sweeper.start();
    } else {
        info!("Registry retention disabled; jobs are kept for the process lifetime");
    }

    // 6. Start HTTP server
    let app = routes::routes(orchestrator);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

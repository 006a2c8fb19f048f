// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

pub const JOBS_STARTED: &str = "jobharvest_jobs_started_total";
pub const SOURCE_OUTCOMES: &str = "jobharvest_source_outcomes_total";
pub const RECORDS_COLLECTED: &str = "jobharvest_records_collected_total";
pub const UNITS_SKIPPED: &str = "jobharvest_units_skipped_total";

/// 安装 Prometheus 导出器
///
/// 未配置监听地址时不安装，计数宏在没有 recorder 时是空操作。
pub fn init_metrics(listen_addr: Option<&str>) -> anyhow::Result<()> {
    let Some(raw) = listen_addr else {
        info!("Metrics exporter disabled");
        return Ok(());
    };

    let addr: SocketAddr = raw.parse()?;

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return Ok(());
    }

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

pub fn record_job_started() {
    metrics::counter!(JOBS_STARTED).increment(1);
}

/// `result` 为 `ok` 或 `error`
pub fn record_source_outcome(source: &str, ok: bool) {
    let result = if ok { "ok" } else { "error" };
    metrics::counter!(SOURCE_OUTCOMES, "source" => source.to_string(), "result" => result)
        .increment(1);
}

pub fn record_records_collected(source: &'static str, count: usize) {
    metrics::counter!(RECORDS_COLLECTED, "source" => source).increment(count as u64);
}

pub fn record_unit_skipped(source: &'static str) {
    metrics::counter!(UNITS_SKIPPED, "source" => source).increment(1);
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含系统的技术实现细节：
/// - 指标（metrics）：Prometheus 导出与计数器
/// - 作业登记表（registry）：进程内的作业状态存储
/// - 招聘站点（sources）：通用抓取流程和各站点的字段映射
pub mod metrics;
pub mod registry;
pub mod sources;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 后台抓取编排和作业登记表清理
pub mod orchestrator;
pub mod registry_sweeper;

pub use orchestrator::ScrapeOrchestrator;
pub use registry_sweeper::RegistrySweeper;

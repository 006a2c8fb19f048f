// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// HTTP 接口的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、提取契约和时间窗口过滤
pub mod domain;

/// 引擎模块
///
/// 浏览器引擎抽象及其 Chromium 实现
pub mod engines;

/// 基础设施模块
///
/// 作业登记表、招聘站点适配器和指标
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 后台抓取编排和作业清理
pub mod workers;

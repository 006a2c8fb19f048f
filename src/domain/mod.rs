// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：招聘记录、作业、站点与时间窗口
/// - 提取接口（extraction）：每个站点适配器必须遵守的契约
/// - 服务（services）：纯函数式的领域规则，如发布时间过滤
///
/// 领域层不依赖浏览器或 HTTP 等具体实现。
pub mod extraction;
pub mod models;
pub mod services;

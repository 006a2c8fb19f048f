// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 提取领域模块
///
/// 定义站点适配器的统一契约：给定时间窗口，返回过滤后的招聘记录
pub mod adapter;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含不依赖外部资源的纯业务规则：
/// - 时间窗口过滤（time_window_filter）：把各站点的发布时间文本解析为
///   绝对时间，并判断是否落在调用方请求的时效窗口内
pub mod time_window_filter;

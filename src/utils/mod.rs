// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 浏览器身份轮换、请求节奏控制和日志初始化
pub mod identity;
pub mod pacing;
pub mod telemetry;

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 招聘记录（job_record）：从站点提取出的一条职位信息
/// - 抓取作业（scrape_job）：一次多站点抓取请求及其逐站点结果
/// - 站点（source）：受支持站点的封闭枚举
/// - 时间窗口（time_window）：调用方请求的时效过滤条件
pub mod job_record;
pub mod scrape_job;
pub mod source;
pub mod time_window;

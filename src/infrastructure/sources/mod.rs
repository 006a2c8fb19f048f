// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 招聘站点
///
/// 通用抓取流程加上每个站点的地址规则与字段映射
pub mod bayt;
pub mod expatriates;
pub mod factory;
pub mod gulftalent;
pub mod html;
pub mod mourjan;
pub mod naukrigulf;
pub mod pipeline;
pub mod profile;

pub use factory::AdapterSet;
pub use pipeline::{ListingPipeline, PipelineOptions};
pub use profile::{PagePlan, PageUnit, SourceProfile};

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::bayt::Bayt;
use super::expatriates::Expatriates;
use super::gulftalent::GulfTalent;
use super::mourjan::Mourjan;
use super::naukrigulf::NaukriGulf;
use super::pipeline::{ListingPipeline, PipelineOptions};
use crate::config::settings::Settings;
use crate::domain::extraction::adapter::ExtractionAdapter;
use crate::domain::models::source::SourceId;
use crate::engines::traits::BrowserEngine;

/// 站点到提取适配器的映射
///
/// 启动时构建一次，之后只读。
#[derive(Clone, Default)]
pub struct AdapterSet {
    adapters: HashMap<SourceId, Arc<dyn ExtractionAdapter>>,
}

impl AdapterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为全部支持的站点创建适配器
    pub fn with_all_sources(
        engine: Arc<dyn BrowserEngine>,
        options: PipelineOptions,
        expatriates_pages: u32,
    ) -> Self {
        let mut set = Self::new();
        set.register(Arc::new(ListingPipeline::new(
            Expatriates::new(expatriates_pages),
            engine.clone(),
            options,
        )));
        set.register(Arc::new(ListingPipeline::new(Mourjan, engine.clone(), options)));
        set.register(Arc::new(ListingPipeline::new(Bayt, engine.clone(), options)));
        set.register(Arc::new(ListingPipeline::new(NaukriGulf, engine.clone(), options)));
        set.register(Arc::new(ListingPipeline::new(GulfTalent, engine, options)));

        info!("Registered extraction adapters: {:?}", set.registered());
        set
    }

    pub fn from_settings(settings: &Settings, engine: Arc<dyn BrowserEngine>) -> Self {
        Self::with_all_sources(
            engine,
            PipelineOptions::from_settings(settings),
            settings.scraping.expatriates_pages,
        )
    }

    /// 注册适配器，同一站点后注册的覆盖先注册的
    pub fn register(&mut self, adapter: Arc<dyn ExtractionAdapter>) {
        self.adapters.insert(adapter.source(), adapter);
    }

    pub fn get(&self, source: SourceId) -> Option<Arc<dyn ExtractionAdapter>> {
        self.adapters.get(&source).cloned()
    }

    /// 已注册的站点，按固定顺序
    pub fn registered(&self) -> Vec<SourceId> {
        SourceId::ALL
            .into_iter()
            .filter(|source| self.adapters.contains_key(source))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

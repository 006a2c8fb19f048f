// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::time_window::TimeWindow;

/// 抓取请求数据传输对象
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ScrapeJobRequestDto {
    /// 站点标识列表（短标识或站点URL），按此顺序抓取
    #[serde(alias = "websites")]
    #[validate(length(min = 1, message = "sources cannot be empty"))]
    pub sources: Vec<String>,
    /// 时效窗口，缺省为不限
    #[serde(default, alias = "time")]
    pub window: TimeWindow,
}

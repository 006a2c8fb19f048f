// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Selector};
use url::Url;

use crate::domain::models::job_record::non_empty;

/// 取元素的可见文本，逐行去除首尾空白并丢弃空行
pub fn clean_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 第一个匹配子元素的文本，空文本视为缺失
pub fn text_of(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(clean_text).and_then(non_empty)
}

/// 第一个匹配子元素的属性值
pub fn attr_of(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .and_then(non_empty)
}

/// 将 href 解析为绝对地址
///
/// 相对地址以站点根地址补全；缺失或无法解析时返回 `None`。
pub fn resolve_link(base: &Url, href: Option<&str>) -> Option<String> {
    let href = href.map(str::trim).filter(|h| !h.is_empty())?;
    base.join(href).ok().map(String::from)
}

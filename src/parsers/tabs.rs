use crate::parsers::compile;
use crate::results::Tab;
use crate::utils;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Radix tab triggers plus the usual bootstrap-style navigation classes
const TAB_SELECTOR: &str = r#"[data-state], [role="tab"], .tab, .nav-item, .nav-link"#;

static TABS: LazyLock<Selector> = LazyLock::new(|| compile(TAB_SELECTOR));

/// Extracts tab-like elements in document order, skipping labels shorter than two characters
pub fn extract(doc: &Html) -> Vec<Tab> {
    let tabs: Vec<Tab> = doc
        .select(&TABS)
        .filter_map(|element| {
            let text = utils::trimmed_text(element);
            if text.chars().count() <= 1 {
                return None;
            }

            Some(Tab {
                text,
                href: utils::attr_or_empty(element, "href"),
                class: utils::class_list(element),
                data_state: utils::attr_or_empty(element, "data-state"),
            })
        })
        .collect();

    ::log::debug!("Tab extractor kept {} elements", tabs.len());
    tabs
}

use crate::parsers::compile;
use crate::results::{Heading, HeadingLevel};
use crate::utils;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static LEVEL_SELECTORS: LazyLock<Vec<(HeadingLevel, Selector)>> = LazyLock::new(|| {
    HeadingLevel::ALL
        .iter()
        .map(|level| (*level, compile(level.tag())))
        .collect()
});

/// Extracts headings level by level: every h1 in document order, then every h2, and so on
pub fn extract(doc: &Html) -> Vec<Heading> {
    LEVEL_SELECTORS
        .iter()
        .flat_map(|(level, selector)| {
            let level = *level;
            doc.select(selector).map(move |heading| Heading {
                level,
                text: utils::trimmed_text(heading),
                id: utils::attr_or_empty(heading, "id"),
            })
        })
        .collect()
}

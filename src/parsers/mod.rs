pub mod cards;
pub mod charts;
pub mod headings;
pub mod tabs;


use crate::results::PageInventory;
use crate::utils;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Fallback used when the document has no `<title>`
pub const NO_TITLE: &str = "No title";

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| compile("title"));

/// Compiles one of the built-in selectors
pub(crate) fn compile(selector: &str) -> Selector {
    Selector::parse(selector).expect("Built-in selectors should be valid")
}

/// Compiles a fallback chain, tried in the given order
pub(crate) fn compile_chain(selectors: &[&str]) -> Vec<Selector> {
    selectors.iter().map(|s| compile(s)).collect()
}

/// Returns the first descendant of `scope` matching the earliest selector in `chain`
/// that matches anything at all
pub(crate) fn first_match<'a>(scope: ElementRef<'a>, chain: &[Selector]) -> Option<ElementRef<'a>> {
    chain
        .iter()
        .find_map(|selector| scope.select(selector).next())
}

/// Text of the first `<title>` element, untrimmed
pub fn page_title(doc: &Html) -> String {
    doc.select(&TITLE_SELECTOR)
        .next()
        .map(|title| title.text().collect())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

/// Parses an HTML document and runs every extractor against it
pub fn extract(html: &str) -> PageInventory {
    let doc = Html::parse_document(html);
    extract_document(&doc)
}

/// Runs every extractor against an already parsed document
pub fn extract_document(doc: &Html) -> PageInventory {
    let inventory = PageInventory {
        page_title: page_title(doc),
        headings: headings::extract(doc),
        tabs: tabs::extract(doc),
        cards: cards::extract(doc),
        charts: charts::extract(doc),
    };

    ::log::debug!(
        "Extracted {} headings, {} tabs, {} cards, {} charts",
        inventory.headings.len(),
        inventory.tabs.len(),
        inventory.cards.len(),
        inventory.charts.len()
    );

    inventory
}

/// Trimmed text of the first chain match, if any
pub(crate) fn first_text(scope: ElementRef<'_>, chain: &[Selector]) -> Option<String> {
    first_match(scope, chain).map(utils::trimmed_text)
}

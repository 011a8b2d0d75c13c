use crate::parsers::{compile, compile_chain, first_text};
use crate::results::{Chart, ChartKind};
use crate::utils;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

const CHART_SELECTOR: &str = r#".recharts-wrapper, canvas, svg, [class*="chart"]"#;

const TITLE_CHAIN: [&str; 6] = ["h2", "h3", "h4", ".font-bold", ".text-lg", ".text-xl"];

static CHARTS: LazyLock<Selector> = LazyLock::new(|| compile(CHART_SELECTOR));
static TITLES: LazyLock<Vec<Selector>> = LazyLock::new(|| compile_chain(&TITLE_CHAIN));

/// Extracts chart containers in document order
pub fn extract(doc: &Html) -> Vec<Chart> {
    let charts: Vec<Chart> = doc
        .select(&CHARTS)
        .map(|element| Chart {
            kind: ChartKind::Chart,
            title: title_from_parent(element),
            element_type: element.value().name().to_string(),
            classes: utils::class_list(element),
        })
        .collect();

    ::log::debug!("Chart extractor matched {} elements", charts.len());
    charts
}

/// Looks for a title inside the immediate parent only, never further up
fn title_from_parent(element: ElementRef<'_>) -> Option<String> {
    let parent = element.parent().and_then(ElementRef::wrap)?;
    first_text(parent, &TITLES)
}

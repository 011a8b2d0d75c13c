use crate::parsers::{compile, compile_chain, first_text};
use crate::results::{BorderColor, Card, CardKind};
use crate::utils;
use scraper::{Html, Selector};
use std::sync::LazyLock;

// `[class*="card"]` also catches classes like "cardboard-x"; kept as-is.
const CARD_SELECTOR: &str = r#".card, [class*="card"], .border-l-4"#;

const TITLE_CHAIN: [&str; 6] = ["h4", "h3", "h2", ".font-medium", ".font-bold", ".text-sm"];
const CONTENT_CHAIN: [&str; 3] = ["p", ".text-muted-foreground", ".text-xs"];

/// Class marking a metric card
const METRIC_CLASS: &str = "border-l-4";

/// Checked in order, first hit wins
const BORDER_COLORS: [(&str, BorderColor); 4] = [
    ("border-l-green-500", BorderColor::Green),
    ("border-l-blue-500", BorderColor::Blue),
    ("border-l-purple-500", BorderColor::Purple),
    ("border-l-red-500", BorderColor::Red),
];

pub const UNTITLED_CARD: &str = "Untitled Card";

static CARDS: LazyLock<Selector> = LazyLock::new(|| compile(CARD_SELECTOR));
static TITLES: LazyLock<Vec<Selector>> = LazyLock::new(|| compile_chain(&TITLE_CHAIN));
static CONTENTS: LazyLock<Vec<Selector>> = LazyLock::new(|| compile_chain(&CONTENT_CHAIN));

/// Extracts cards in document order, classifying `border-l-4` cards as metric cards
pub fn extract(doc: &Html) -> Vec<Card> {
    let cards: Vec<Card> = doc
        .select(&CARDS)
        .map(|element| {
            let title = first_text(element, &TITLES).unwrap_or_else(|| UNTITLED_CARD.to_string());
            let content = first_text(element, &CONTENTS).unwrap_or_default();

            let (kind, border_color) = if utils::has_class(element, METRIC_CLASS) {
                let color = BORDER_COLORS
                    .iter()
                    .find(|(class, _)| utils::has_class(element, class))
                    .map(|(_, color)| *color)
                    .unwrap_or(BorderColor::Unrecognized);
                (CardKind::MetricCard, Some(color))
            } else {
                (CardKind::Card, None)
            };

            Card {
                kind,
                title,
                content,
                border_color,
                classes: utils::class_list(element),
            }
        })
        .collect();

    ::log::debug!("Card extractor matched {} elements", cards.len());
    cards
}

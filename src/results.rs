use serde::{Deserialize, Serialize};

/// Outcome of scraping one configured URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// URL of the page, exactly as configured
    pub url: String,

    /// Extracted inventory or the error that stopped the fetch
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

/// Success or failure of a single page, tagged with `status` in the JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PageOutcome {
    Success(PageInventory),
    Failed { error: String },
}

/// Everything extracted from a successfully fetched page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInventory {
    /// Text of the `<title>` element, or "No title"
    pub page_title: String,
    pub headings: Vec<Heading>,
    pub tabs: Vec<Tab>,
    pub cards: Vec<Card>,
    pub charts: Vec<Chart>,
}

impl PageResult {
    /// Create a result for a page that was fetched and parsed
    pub fn success(url: impl Into<String>, inventory: PageInventory) -> Self {
        Self {
            url: url.into(),
            outcome: PageOutcome::Success(inventory),
        }
    }

    /// Create a result for a page whose fetch failed
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: PageOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, PageOutcome::Success(_))
    }

    /// The extracted inventory, if the page was scraped successfully
    pub fn inventory(&self) -> Option<&PageInventory> {
        match &self.outcome {
            PageOutcome::Success(inventory) => Some(inventory),
            PageOutcome::Failed { .. } => None,
        }
    }

    /// The recorded error message, if the page failed
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            PageOutcome::Success(_) => None,
            PageOutcome::Failed { error } => Some(error),
        }
    }
}

impl PageInventory {
    /// Number of extracted elements, which is also the number of CSV rows for the page
    pub fn element_count(&self) -> usize {
        self.headings.len() + self.tabs.len() + self.cards.len() + self.charts.len()
    }
}

/// Heading level, serialized as the tag name ("h1".."h6")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels in extraction order
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    /// `id` attribute, empty when absent
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub text: String,
    pub href: String,
    /// Space-joined class list
    pub class: String,
    pub data_state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Card carrying the `border-l-4` accent
    MetricCard,
    Card,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::MetricCard => "metric_card",
            CardKind::Card => "card",
        }
    }
}

/// Left border accent of a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderColor {
    Green,
    Blue,
    Purple,
    Red,
    /// `border-l-4` without one of the known color classes
    #[serde(rename = "")]
    Unrecognized,
}

impl BorderColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderColor::Green => "green",
            BorderColor::Blue => "blue",
            BorderColor::Purple => "purple",
            BorderColor::Red => "red",
            BorderColor::Unrecognized => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub title: String,
    pub content: String,
    /// Only present for metric cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<BorderColor>,
    pub classes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Title found next to the chart, serialized as null when missing
    pub title: Option<String>,
    /// Tag name of the matched element
    pub element_type: String,
    pub classes: String,
}

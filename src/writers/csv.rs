use crate::results::{PageInventory, PageResult};
use crate::writers::ExportError;
use std::io::Write;
use std::path::Path;

pub const HEADER: [&str; 6] = [
    "URL",
    "Page Title",
    "Element Type",
    "Element Name",
    "Element Content",
    "Additional Info",
];

pub const UNTITLED_CHART: &str = "Untitled Chart";

/// One extracted element as a CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub url: String,
    pub page_title: String,
    pub element_type: String,
    pub name: String,
    pub content: String,
    pub info: String,
}

impl FlatRow {
    fn new(
        url: &str,
        page_title: &str,
        element_type: &str,
        name: &str,
        content: &str,
        info: String,
    ) -> Self {
        Self {
            url: url.to_string(),
            page_title: page_title.to_string(),
            element_type: element_type.to_string(),
            name: name.to_string(),
            content: content.to_string(),
            info,
        }
    }

    pub fn as_record(&self) -> [&str; 6] {
        [
            self.url.as_str(),
            self.page_title.as_str(),
            self.element_type.as_str(),
            self.name.as_str(),
            self.content.as_str(),
            self.info.as_str(),
        ]
    }
}

/// Flattens successful pages into rows: headings, then tabs, cards, charts.
/// Failed pages produce no rows.
pub fn flatten(results: &[PageResult]) -> Vec<FlatRow> {
    results
        .iter()
        .filter_map(|page| page.inventory().map(|inventory| page_rows(&page.url, inventory)))
        .flatten()
        .collect()
}

fn page_rows(url: &str, inventory: &PageInventory) -> Vec<FlatRow> {
    let title = inventory.page_title.as_str();
    let mut rows = Vec::with_capacity(inventory.element_count());

    for heading in &inventory.headings {
        rows.push(FlatRow::new(
            url,
            title,
            "Heading",
            heading.level.tag(),
            &heading.text,
            format!("ID: {}", heading.id),
        ));
    }

    for tab in &inventory.tabs {
        rows.push(FlatRow::new(
            url,
            title,
            "Tab",
            &tab.text,
            "",
            format!(
                "Href: {}, Classes: {}, State: {}",
                tab.href, tab.class, tab.data_state
            ),
        ));
    }

    for card in &inventory.cards {
        // plain cards carry no border at all; metric cards may carry an empty one
        let border = card.border_color.map(|c| c.as_str()).unwrap_or("none");
        rows.push(FlatRow::new(
            url,
            title,
            card.kind.as_str(),
            &card.title,
            &card.content,
            format!("Border: {}, Classes: {}", border, card.classes),
        ));
    }

    for chart in &inventory.charts {
        rows.push(FlatRow::new(
            url,
            title,
            "Chart/Graph",
            chart.title.as_deref().unwrap_or(UNTITLED_CHART),
            "",
            format!(
                "Element: {}, Classes: {}",
                chart.element_type, chart.classes
            ),
        ));
    }

    rows
}

/// Writes the header and one row per element; returns the number of element rows
pub fn write<W: Write>(writer: W, results: &[PageResult]) -> Result<usize, ExportError> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .from_writer(writer);

    write_rows(&mut csv_writer, results)
}

/// Writes the CSV export to `path`, truncating any existing file
pub fn write_file(path: &Path, results: &[PageResult]) -> Result<usize, ExportError> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .from_path(path)?;

    write_rows(&mut csv_writer, results)
}

fn write_rows<W: Write>(
    csv_writer: &mut ::csv::Writer<W>,
    results: &[PageResult],
) -> Result<usize, ExportError> {
    csv_writer.write_record(HEADER)?;

    let rows = flatten(results);
    for row in &rows {
        csv_writer.write_record(row.as_record())?;
    }
    csv_writer.flush()?;

    Ok(rows.len())
}

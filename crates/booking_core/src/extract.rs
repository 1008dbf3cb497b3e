use std::sync::LazyLock;

use ego_tree::NodeRef;
use engine_logging::{engine_debug, engine_info, engine_warn};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::{BookingRecord, ExclusionList};

/// Class of the `<table>` holding the booking rows.
pub const DEFAULT_TABLE_CLASS: &str = "booking_reports_list";

const CHARGE_SEPARATOR: &str = ", ";

static SELECTORS: LazyLock<RowSelectors> = LazyLock::new(RowSelectors::new);

/// What a single table row turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Record(BookingRecord),
    /// The row has no `<td>`; nothing is emitted.
    NoCell,
    Excluded { phrase: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub table_found: bool,
    /// Data rows visited, header excluded.
    pub rows_seen: usize,
    pub rows_without_cell: usize,
    pub rows_excluded: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<BookingRecord>,
    pub stats: ExtractionStats,
}

pub trait RecordExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Extraction;
}

/// Extracts booking rows from the report table, dropping excluded ones.
#[derive(Debug, Clone)]
pub struct BookingExtractor {
    table_class: String,
    exclusions: ExclusionList,
}

impl BookingExtractor {
    pub fn new(table_class: impl Into<String>, exclusions: ExclusionList) -> Self {
        Self {
            table_class: table_class.into(),
            exclusions,
        }
    }

    pub fn exclusions(&self) -> &ExclusionList {
        &self.exclusions
    }
}

impl Default for BookingExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_CLASS, ExclusionList::default())
    }
}

impl RecordExtractor for BookingExtractor {
    fn extract(&self, html: &str) -> Extraction {
        let mut extraction = Extraction::default();
        let selectors = &*SELECTORS;

        let doc = Html::parse_document(html);
        let Some(table) = find_table(&doc, &self.table_class, selectors) else {
            engine_warn!("No table found on the page (class={})", self.table_class);
            return extraction;
        };
        extraction.stats.table_found = true;

        for row in table.select(&selectors.tr).skip(1) {
            extraction.stats.rows_seen += 1;
            match parse_row_with(row, &self.exclusions, selectors) {
                RowOutcome::Record(record) => extraction.records.push(record),
                RowOutcome::NoCell => extraction.stats.rows_without_cell += 1,
                RowOutcome::Excluded { phrase } => {
                    engine_debug!(
                        "Excluded row {} (matched {:?})",
                        extraction.stats.rows_seen,
                        phrase
                    );
                    extraction.stats.rows_excluded += 1;
                }
            }
        }

        engine_info!(
            "Extracted {} records from {} rows ({} excluded, {} without cell)",
            extraction.records.len(),
            extraction.stats.rows_seen,
            extraction.stats.rows_excluded,
            extraction.stats.rows_without_cell
        );
        extraction
    }
}

/// Parse one `<tr>` into a record, or say why it produced nothing.
pub fn parse_row(row: ElementRef, exclusions: &ExclusionList) -> RowOutcome {
    parse_row_with(row, exclusions, &SELECTORS)
}

struct RowSelectors {
    table: Selector,
    tr: Selector,
    td: Selector,
    strong: Selector,
    br: Selector,
    ul: Selector,
}

impl RowSelectors {
    fn new() -> Self {
        Self {
            table: tag_selector("table"),
            tr: tag_selector("tr"),
            td: tag_selector("td"),
            strong: tag_selector("strong"),
            br: tag_selector("br"),
            ul: tag_selector("ul"),
        }
    }
}

fn tag_selector(tag: &'static str) -> Selector {
    Selector::parse(tag).expect("plain tag selector")
}

fn find_table<'a>(
    doc: &'a Html,
    class: &str,
    selectors: &RowSelectors,
) -> Option<ElementRef<'a>> {
    doc.select(&selectors.table)
        .find(|table| table.value().classes().any(|c| c == class))
}

fn parse_row_with(
    row: ElementRef,
    exclusions: &ExclusionList,
    selectors: &RowSelectors,
) -> RowOutcome {
    let Some(cell) = row.select(&selectors.td).next() else {
        return RowOutcome::NoCell;
    };

    let name = cell
        .select(&selectors.strong)
        .next()
        .map(collect_text)
        .unwrap_or_default();

    let (street, city, zip_code) = address_fields(cell, selectors);

    let charges = cell
        .select(&selectors.ul)
        .next()
        .map(|ul| {
            ul.text()
                .collect::<Vec<_>>()
                .join(CHARGE_SEPARATOR)
                .trim()
                .to_string()
        })
        .unwrap_or_default();

    let haystacks = [charges.as_str(), street.as_str(), city.as_str()];
    if let Some(phrase) = exclusions.first_match(&haystacks) {
        return RowOutcome::Excluded {
            phrase: phrase.to_string(),
        };
    }

    RowOutcome::Record(BookingRecord {
        name,
        street,
        city,
        zip_code,
    })
}

/// Street follows the first `<br>`, "city, zip" follows the second.
fn address_fields(cell: ElementRef, selectors: &RowSelectors) -> (String, String, String) {
    let breaks: Vec<ElementRef> = cell.select(&selectors.br).collect();
    let (Some(first), Some(second)) = (breaks.first(), breaks.get(1)) else {
        return (String::new(), String::new(), String::new());
    };

    let street = sibling_text(first.next_sibling());
    let city_zip = sibling_text(second.next_sibling());
    let (city, zip_code) = split_city_zip(&city_zip).unwrap_or_default();
    (street, city, zip_code)
}

/// Exactly two comma-separated parts, or nothing.
fn split_city_zip(combined: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = combined.split(',').collect();
    match parts.as_slice() {
        [city, zip] => Some((city.trim().to_string(), zip.trim().to_string())),
        _ => None,
    }
}

fn sibling_text(node: Option<NodeRef<'_, Node>>) -> String {
    let Some(node) = node else {
        return String::new();
    };
    match node.value() {
        Node::Text(text) => text.trim().to_string(),
        Node::Comment(comment) => comment.trim().to_string(),
        Node::Element(_) => ElementRef::wrap(node).map(collect_text).unwrap_or_default(),
        _ => String::new(),
    }
}

fn collect_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

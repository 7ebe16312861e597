//! Shared table-walking helpers
//!
//! The portal renders every record type as `<table>` fragments with no type
//! annotation and inconsistent structure. This module flattens markup into
//! plain [`TableRow`] values so the per-record extractors can work on text
//! cells instead of DOM nodes.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

// Precompiled CSS selectors, shared by all extractors
static SELECTOR_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("Invalid table selector"));
static SELECTOR_TR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("Invalid tr selector"));
static SELECTOR_TD: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("Invalid td selector"));
static SELECTOR_A_ONCLICK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[onclick]").expect("Invalid onclick selector"));

/// One table row, flattened to text
///
/// `cells` holds the whitespace-collapsed text of each `<td>`, in document
/// order. Header cells (`<th>`) are deliberately not collected; rows made up
/// of them flatten to zero cells and fall out as noise during classification.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Text content of each `<td>` cell
    pub cells: Vec<String>,

    /// Text of the designated section-header cell, if this row carries one
    pub section_header: Option<String>,

    /// Raw `onclick` attribute of the first inline action link in the row
    pub onclick: Option<String>,
}

/// Collapses an element's text content to single-spaced, trimmed form
pub fn cell_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lower-cased full text content of a table, used for fingerprinting
pub fn table_text_lower(table: &ElementRef) -> String {
    table.text().collect::<String>().to_lowercase()
}

/// Flattens a single `<tr>` element into a [`TableRow`]
///
/// `section_header_class` names the CSS class the portal puts on
/// section-marker cells (e.g. the exam-type banner rows); when a cell carries
/// it, the row is tagged with that cell's text.
pub fn flatten_row(row: &ElementRef, section_header_class: Option<&str>) -> TableRow {
    let mut cells = Vec::new();
    let mut section_header = None;

    for td in row.select(&SELECTOR_TD) {
        let text = cell_text(&td);
        if let Some(marker) = section_header_class {
            if section_header.is_none() && has_class(&td, marker) {
                section_header = Some(text.clone());
            }
        }
        cells.push(text);
    }

    let onclick = row
        .select(&SELECTOR_A_ONCLICK)
        .next()
        .and_then(|a| a.value().attr("onclick"))
        .map(str::to_string);

    TableRow {
        cells,
        section_header,
        onclick,
    }
}

/// Flattens every row in the element, in document order
pub fn rows_of(element: &ElementRef, section_header_class: Option<&str>) -> Vec<TableRow> {
    element
        .select(&SELECTOR_TR)
        .map(|tr| flatten_row(&tr, section_header_class))
        .collect()
}

/// Flattens every row in the whole document, in document order
///
/// Several portal pages interleave rows of interest with decorative tables;
/// the original layout gives no reliable table boundary, so those extractors
/// scan all rows and let classification discard the noise.
pub fn all_rows(document: &Html, section_header_class: Option<&str>) -> Vec<TableRow> {
    document
        .select(&SELECTOR_TR)
        .map(|tr| flatten_row(&tr, section_header_class))
        .collect()
}

/// Returns every `<table>` element in the document
pub fn tables_of(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&SELECTOR_TABLE).collect()
}

/// Finds a table by its `id` attribute
pub fn table_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .select(&SELECTOR_TABLE)
        .find(|table| table.value().attr("id") == Some(id))
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .map(|attr| attr.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

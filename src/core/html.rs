// src/core/html.rs
// Table location on top of `scraper`. Cell text is returned raw: no trimming,
// no whitespace collapsing, so callers see exactly what the page contains.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

static TABLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Concatenated text of every descendant text node.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Locate the first `<table>` in `doc` and return the `<td>` texts of each
/// `<tr>` below the first one. The first row is the header and is skipped.
///
/// Rows are returned in document order; a row may hold any number of cells,
/// column-count checks are the caller's business.
pub fn first_table_rows(doc: &str) -> Result<Vec<Vec<String>>> {
    let document = Html::parse_document(doc);
    let table = document.select(&TABLE).next().ok_or(ScrapeError::NoTable)?;

    let rows: Vec<Vec<String>> = table
        .select(&TR)
        .skip(1)
        .map(|tr| tr.select(&TD).map(element_text).collect::<Vec<_>>())
        .collect();

    Ok(rows)
}

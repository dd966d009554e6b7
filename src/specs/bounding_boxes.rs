// src/specs/bounding_boxes.rs
//! Scraping spec for the state bounding-box table.
//!
//! Page shape: the first `<table>` holds a header row and then one row per
//! jurisdiction: `State | West | East | North | South`. Coordinates are
//! written in degree notation with compass letters (`W 124 030`).
//!
//! Responsibilities:
//! - Column-count check: a row with fewer than 5 cells aborts the whole run.
//! - Dropping the excluded jurisdictions ([`is_excluded`]).
//! - Normalizing the four coordinate cells.

use tracing::{debug, info};

use crate::config::consts::{CSV_HEADERS, EXCLUDED_STATES};
use crate::core::{html, net, normalize_coord};
use crate::error::{Result, ScrapeError};

/// One exported row. Coordinates are normalized text, not numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateBox {
    pub state: String,
    pub west: String,
    pub east: String,
    pub north: String,
    pub south: String,
}

impl StateBox {
    /// Fields in output column order.
    pub fn as_record(&self) -> [&str; 5] {
        [&self.state, &self.west, &self.east, &self.north, &self.south]
    }
}

pub struct BoundingBoxBundle {
    pub headers: [&'static str; 5],
    pub rows: Vec<StateBox>,
}

/// Exact, case-sensitive, untrimmed match against the exclusion set.
/// `"District Of Columbia"` or `" Puerto Rico"` are *not* excluded.
pub fn is_excluded(state: &str) -> bool {
    EXCLUDED_STATES.contains(&state)
}

pub fn fetch(url: &str) -> Result<BoundingBoxBundle> {
    let doc = net::http_get(url)?;
    extract(&doc)
}

/// Parse an already downloaded page.
pub fn extract(doc: &str) -> Result<BoundingBoxBundle> {
    let table = html::first_table_rows(doc)?;
    info!(rows = table.len(), "bounding-box table located");

    let mut rows = Vec::with_capacity(table.len());
    for (i, cells) in table.iter().enumerate() {
        let [state, west, east, north, south, ..] = cells.as_slice() else {
            return Err(ScrapeError::ShortRow { row: i + 1, cells: cells.len() });
        };

        if is_excluded(state) {
            debug!(%state, "excluded");
            continue;
        }

        rows.push(StateBox {
            state: state.clone(),
            west: normalize_coord(west),
            east: normalize_coord(east),
            north: normalize_coord(north),
            south: normalize_coord(south),
        });
    }

    Ok(BoundingBoxBundle { headers: CSV_HEADERS, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> String {
        let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
        format!("<tr>{tds}</tr>")
    }

    fn page(rows: &[&[&str]]) -> String {
        let header = "<tr><th>State</th><th>W</th><th>E</th><th>N</th><th>S</th></tr>";
        let body: String = rows.iter().map(|r| row(r)).collect();
        format!("<html><body><table>{header}{body}</table></body></html>")
    }

    #[test]
    fn exclusion_set_is_exactly_three_literals() {
        assert!(is_excluded("District of Columbia"));
        assert!(is_excluded("U. S. Virgin Islands"));
        assert!(is_excluded("Puerto Rico"));

        assert!(!is_excluded("District Of Columbia"));
        assert!(!is_excluded("U.S. Virgin Islands"));
        assert!(!is_excluded("Puerto Rico "));
        assert!(!is_excluded("puerto rico"));
        assert!(!is_excluded("Guam"));
        assert!(!is_excluded("Ohio"));
    }

    #[test]
    fn rows_are_normalized_and_filtered_in_order() {
        let doc = page(&[
            &["Ohio", "W 84 049", "W 80 031", "N 41 058", "N 38 024"],
            &["District of Columbia", "W 77 007", "W 76 054", "N 38 059", "N 38 047"],
            &["Maine", "W 71 005", "W 66 057", "N 47 028", "N 42 058"],
        ]);
        let bundle = extract(&doc).unwrap();

        assert_eq!(bundle.headers, ["States", "West", "East", "North", "South"]);
        let states: Vec<&str> = bundle.rows.iter().map(|r| r.state.as_str()).collect();
        assert_eq!(states, ["Ohio", "Maine"]);
        assert_eq!(
            bundle.rows[0].as_record(),
            ["Ohio", "-84.049", "-80.031", "41.058", "38.024"]
        );
    }

    #[test]
    fn extra_cells_are_ignored() {
        let doc = page(&[&["Ohio", "W 84", "W 80", "N 41", "N 38", "note"]]);
        let bundle = extract(&doc).unwrap();
        assert_eq!(bundle.rows[0].as_record(), ["Ohio", "-84", "-80", "41", "38"]);
    }

    #[test]
    fn short_row_is_fatal_even_for_excluded_names() {
        let doc = page(&[
            &["Ohio", "W 84", "W 80", "N 41", "N 38"],
            &["Puerto Rico", "W 67", "W 65", "N 18"],
        ]);
        match extract(&doc) {
            Err(ScrapeError::ShortRow { row, cells }) => {
                assert_eq!(row, 2);
                assert_eq!(cells, 4);
            }
            other => panic!("expected ShortRow, got {:?}", other.map(|b| b.rows)),
        }
    }

    #[test]
    fn differently_cased_territory_is_exported() {
        let doc = page(&[&["District Of Columbia", "W 77", "W 76", "N 38", "N 38"]]);
        let bundle = extract(&doc).unwrap();
        assert_eq!(bundle.rows.len(), 1);
        assert_eq!(bundle.rows[0].state, "District Of Columbia");
    }
}

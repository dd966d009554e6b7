// src/bbox.rs
//! Numeric view of an export, for placing a point inside a state.

use std::path::Path;

use ::csv::StringRecord;
use tracing::warn;

use crate::error::{Result, ScrapeError};
use crate::file::read_export;

#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub state: String,
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl BoundingBox {
    /// Inclusive on every edge.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        self.west <= lon && lon <= self.east && self.south <= lat && lat <= self.north
    }

    /// Build from one `States,West,East,North,South` record.
    pub fn from_record(rec: &StringRecord) -> Result<Self> {
        let state = rec.get(0).unwrap_or_default().to_string();
        let coord = |idx: usize, column: &'static str| -> Result<f64> {
            let value = rec.get(idx).unwrap_or_default();
            value.parse::<f64>().map_err(|_| ScrapeError::BadCoordinate {
                state: state.clone(),
                column,
                value: value.to_string(),
            })
        };

        Ok(Self {
            west: coord(1, "West")?,
            east: coord(2, "East")?,
            north: coord(3, "North")?,
            south: coord(4, "South")?,
            state: state.clone(),
        })
    }
}

/// Load the boxes from an export written by [`crate::file::write_export`].
///
/// A garbled cell normalizes to blank (or otherwise non-numeric) text at export
/// time. Such a row is skipped with a warning; every other state still loads.
pub fn load_boxes(path: &Path) -> Result<Vec<BoundingBox>> {
    let (_, rows) = read_export(path)?;

    let mut boxes = Vec::with_capacity(rows.len());
    for rec in &rows {
        match BoundingBox::from_record(rec) {
            Ok(b) => boxes.push(b),
            Err(e @ ScrapeError::BadCoordinate { .. }) => {
                warn!(path = %path.display(), "skipping box: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    if boxes.iter().any(|b| b.west > b.east || b.south > b.north) {
        warn!(path = %path.display(), "export holds inverted boxes; they never match");
    }
    Ok(boxes)
}

/// State whose box contains `(lon, lat)`. Boxes overlap along shared
/// borders; the last matching box in file order wins.
pub fn which_state(boxes: &[BoundingBox], lon: f64, lat: f64) -> Option<&str> {
    boxes
        .iter()
        .rev()
        .find(|b| b.contains(lon, lat))
        .map(|b| b.state.as_str())
}

// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "http://www.ala.org/rt/magirt/publicationsab/usa";
pub const USER_AGENT: &str = concat!("statebb_scrape/", env!("CARGO_PKG_VERSION"));

// Export
pub const OUTPUT_FILE: &str = "state_bounding_boxes.csv";
pub const CSV_HEADERS: [&str; 5] = ["States", "West", "East", "North", "South"];

// Scrape
/// Rows whose first cell equals one of these, byte for byte, are never exported.
pub const EXCLUDED_STATES: [&str; 3] = [
    "District of Columbia",
    "U. S. Virgin Islands",
    "Puerto Rico",
];

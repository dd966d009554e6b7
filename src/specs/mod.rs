// src/specs/mod.rs
//! # Page scraping specs
//!
//! One module per remote page. A spec knows *where the data lives in the HTML*
//! and *how to shape it* into output records; it does not decide where the
//! records are written.
//!
//! ```text
//! runner::run → core::net::http_get → specs::<page>::extract
//!                                   ↘ returns headers + records
//!             file::write_export (outside of specs)
//! ```
//!
//! Specs are testable offline against captured or hand-written HTML.
pub mod bounding_boxes;

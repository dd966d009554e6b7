// src/runner.rs
use std::path::Path;
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::RunOptions,
    error::Result,
    file::write_export,
    specs::bounding_boxes::{self, BoundingBoxBundle},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub file_written: PathBuf,
    pub rows_written: usize,
}

/// Top-level pipeline: fetch once, extract, write.
/// Any failure aborts the run; nothing is retried and no partial output is repaired.
pub fn run(opts: &RunOptions) -> Result<RunSummary> {
    let bundle = bounding_boxes::fetch(&opts.url)?;
    export(&bundle, &opts.out)
}

/// Same pipeline minus the fetch, for a document already in memory.
pub fn export_document(doc: &str, out: &Path) -> Result<RunSummary> {
    let bundle = bounding_boxes::extract(doc)?;
    export(&bundle, out)
}

/// Write an extracted bundle to `out`.
pub fn export(bundle: &BoundingBoxBundle, out: &Path) -> Result<RunSummary> {
    let file_written = write_export(out, bundle)?;
    let rows_written = bundle.rows.len();

    info!(rows = rows_written, path = %file_written.display(), "run complete");
    Ok(RunSummary { file_written, rows_written })
}

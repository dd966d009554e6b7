// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use ::csv::StringRecord;
use tracing::info;

use crate::csv::{read_table, write_table};
use crate::error::Result;
use crate::specs::bounding_boxes::BoundingBoxBundle;

/// Create/truncate `path` and write the whole bundle in one pass.
/// Missing parent directories are created. Returns the path written to.
pub fn write_export(path: &Path, bundle: &BoundingBoxBundle) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    write_table(
        &mut out,
        &bundle.headers,
        bundle.rows.iter().map(|r| r.as_record()),
    )?;
    out.flush()?;

    info!(path = %path.display(), rows = bundle.rows.len(), "export written");
    Ok(path.to_path_buf())
}

/// Load a previously written export (header + records).
pub fn read_export(path: &Path) -> Result<(StringRecord, Vec<StringRecord>)> {
    let file = File::open(path)?;
    read_table(BufReader::new(file))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

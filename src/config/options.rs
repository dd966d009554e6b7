// src/config/options.rs
use std::path::PathBuf;

use super::consts::{OUTPUT_FILE, SOURCE_URL};

/// Where to read from and where to write to.
/// The binary always runs with `RunOptions::default()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub out: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            out: PathBuf::from(OUTPUT_FILE),
        }
    }
}

// src/lib.rs

#[macro_use]
pub mod macros;

pub mod bbox;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod log;
pub mod runner;
pub mod specs;

pub use error::ScrapeError;

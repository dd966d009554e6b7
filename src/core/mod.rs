// src/core/mod.rs

pub mod coords;
pub mod html;
pub mod net;

pub use coords::normalize_coord;

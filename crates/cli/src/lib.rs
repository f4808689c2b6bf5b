//! Gaelic fonts CLI library.

pub mod cli;

pub use gaelic_core::{BatchReport, FontFilter, MarkOptions, Marker, process_directory};

//! Gaelic Core - marking a directory of fonts as supporting Irish.

pub mod config;
pub mod driver;
pub mod error;
pub mod filter;

pub use driver::{BatchReport, FailedFont, MarkedFont, Marker, process_directory};
pub use error::{Error, Result};
pub use filter::FontFilter;
pub use gaelic_font_metadata::{MarkOptions, MarkReport, PatchOutcome};

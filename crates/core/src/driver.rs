//! Marking every qualifying font in a directory.

use std::{
    fs::read_dir,
    path::{Path, PathBuf},
};

use gaelic_font_metadata::{MarkOptions, MarkReport, mark_font};
use gaelic_font_ops::FontDocument;
use log::{debug, error, info, warn};

use crate::{
    Error, FontFilter, Result,
    config::summary_line,
};

/// A font that was marked.
#[derive(Debug)]
pub struct MarkedFont {
    pub filename: String,
    pub report: MarkReport,
}

/// A font that could not be marked.
#[derive(Debug)]
pub struct FailedFont {
    pub filename: String,
    pub error: anyhow::Error,
}

/// Result of processing a directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub marked: Vec<MarkedFont>,
    pub failed: Vec<FailedFont>,
}

impl BatchReport {
    /// Names of the marked fonts, in processing order.
    pub fn processed(&self) -> Vec<&str> {
        self.marked.iter().map(|m| m.filename.as_str()).collect()
    }

    /// Number of fonts whose file contents changed.
    pub fn modified(&self) -> usize {
        self.marked.iter().filter(|m| m.report.is_modified()).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        summary_line(self.marked.len())
    }
}

/// Marks the qualifying fonts of a directory, one file at a time.
#[derive(Debug, Clone, Default)]
pub struct Marker {
    filter: FontFilter,
    options: MarkOptions,
    fail_fast: bool,
}

impl Marker {
    pub fn new(filter: FontFilter, options: MarkOptions) -> Self {
        Self { filter, options, fail_fast: false }
    }

    /// Stop at the first font that fails instead of carrying on.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn filter(&self) -> &FontFilter {
        &self.filter
    }

    pub fn options(&self) -> &MarkOptions {
        &self.options
    }

    /// List the fonts of `dir` to mark, sorted by filename.
    ///
    /// Entries rejected by the filter, entries that are not regular files and
    /// entries whose names are not valid UTF-8 are left out.
    pub fn candidates(&self, dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        if !dir.is_dir() {
            return Err(Error::NotADirectory { path: dir.to_path_buf() });
        }
        let read_err = |source| Error::ReadDir { path: dir.to_path_buf(), source };

        let mut names = Vec::new();
        for entry in read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => warn!("Skipping non UTF-8 filename: {}", name.to_string_lossy()),
            }
        }
        names.sort();

        Ok(names
            .into_iter()
            .filter(|name| self.filter.should_process(name))
            .filter_map(|name| {
                let path = dir.join(&name);
                if path.is_file() {
                    Some((name, path))
                } else {
                    debug!("Skipping {name}: not a regular file");
                    None
                }
            })
            .collect())
    }

    /// Open, mark and save one font.
    pub fn mark_file(&self, path: &Path) -> anyhow::Result<MarkReport> {
        let mut doc = FontDocument::open(path)?;
        let report = mark_font(&mut doc, &self.options)?;
        doc.save()?;
        Ok(report)
    }

    /// Mark every qualifying font in `dir`.
    pub fn process_directory(&self, dir: &Path) -> Result<BatchReport> {
        let mut batch = BatchReport::default();

        for (filename, path) in self.candidates(dir)? {
            println!("Marking: {filename}");
            match self.mark_file(&path) {
                Ok(report) => {
                    info!("{filename}: {report}");
                    batch.marked.push(MarkedFont { filename, report });
                }
                Err(source) if self.fail_fast => return Err(Error::Font { filename, source }),
                Err(error) => {
                    error!("{filename}: {error:#}");
                    batch.failed.push(FailedFont { filename, error });
                }
            }
        }

        Ok(batch)
    }
}

/// Mark the fonts of `dir` as Irish with the default filter.
pub fn process_directory(dir: &Path) -> Result<BatchReport> {
    Marker::default().process_directory(dir)
}

//! In-place font editing.

use std::{
    fs::{read, remove_file, rename, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use read_fonts::FontRef;
use write_fonts::FontBuilder;

use crate::{FontFormat, rewrite_font};

/// A font file opened for editing.
///
/// Holds the decompressed sfnt data of one file together with the container
/// it was read from. Edits go through [`FontDocument::rewrite`]; [`FontDocument::save`]
/// consumes the document and writes it back to the path it was opened from.
#[derive(Debug, Clone)]
pub struct FontDocument {
    path: PathBuf,
    format: FontFormat,
    data: Vec<u8>,
    modified: bool,
}

impl FontDocument {
    /// Read and parse the font at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = read(&path).with_context(|| format!("Failed to read font: {}", path.display()))?;
        Self::from_bytes(path, &raw)
    }

    /// Parse font file contents that belong to `path`.
    pub fn from_bytes(path: impl Into<PathBuf>, raw: &[u8]) -> Result<Self> {
        let path = path.into();
        let format = FontFormat::detect(raw)
            .with_context(|| format!("Unsupported font file: {}", path.display()))?;
        let data = format
            .decode(raw)
            .with_context(|| format!("Failed to decode font: {}", path.display()))?;
        FontRef::new(&data).with_context(|| format!("Failed to parse font: {}", path.display()))?;

        Ok(Self { path, format, data, modified: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }

    /// The current sfnt data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// `true` once any rewrite has been applied.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Borrow the current font for reading.
    pub fn font(&self) -> Result<FontRef<'_>> {
        FontRef::new(&self.data)
            .with_context(|| format!("Failed to parse font: {}", self.path.display()))
    }

    /// Replace or add tables, see [`rewrite_font`].
    pub fn rewrite(
        &mut self,
        f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<()>,
    ) -> Result<()> {
        let data = rewrite_font(&self.data, f)
            .with_context(|| format!("Failed to rewrite font: {}", self.path.display()))?;
        self.data = data;
        self.modified = true;
        Ok(())
    }

    /// Serialize to the original container.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.format.encode(&self.data).with_context(|| {
            format!("Failed to encode {} font: {}", self.format, self.path.display())
        })
    }

    /// Write the document back to its path and release it.
    ///
    /// An unmodified document leaves the file untouched. The new contents are
    /// written to a sibling temporary file first and renamed over the original.
    pub fn save(self) -> Result<()> {
        if !self.modified {
            debug!("{}: unchanged, not writing", self.path.display());
            return Ok(());
        }
        self.save_to(&self.path)
    }

    /// Write the document to `path`, regardless of whether it was modified.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        let temp = temp_path(path);

        let result = write(&temp, &bytes)
            .with_context(|| format!("Failed to write font: {}", temp.display()))
            .and_then(|()| {
                rename(&temp, path)
                    .with_context(|| format!("Failed to replace font: {}", path.display()))
            });
        if result.is_err() {
            let _ = remove_file(&temp);
        }
        result?;

        debug!("{}: wrote {} bytes ({})", path.display(), bytes.len(), self.format);
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path.file_name().unwrap_or_default().to_string_lossy();
    path.with_file_name(format!(".{name}.tmp"))
}

//! Font filename filtering.

use std::path::Path;

use crate::config::{EXCLUDED_PREFIXES, FONT_EXTENSIONS};

/// Decides which files in a directory get marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFilter {
    extensions: Vec<String>,
    excluded_prefixes: Vec<String>,
}

impl FontFilter {
    pub fn new<E, P>(extensions: E, excluded_prefixes: P) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(|e| e.as_ref().to_ascii_lowercase()).collect(),
            excluded_prefixes: excluded_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Add another excluded filename prefix.
    pub fn with_excluded_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.excluded_prefixes.push(prefix.into());
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn excluded_prefixes(&self) -> &[String] {
        &self.excluded_prefixes
    }

    /// `true` if a file with this name (not path) should be marked.
    pub fn should_process(&self, filename: &str) -> bool {
        let Some(extension) = Path::new(filename).extension() else {
            return false;
        };
        let extension = extension.to_string_lossy().to_ascii_lowercase();
        if !self.extensions.contains(&extension) {
            return false;
        }

        !self.excluded_prefixes.iter().any(|prefix| filename.starts_with(prefix.as_str()))
    }
}

impl Default for FontFilter {
    fn default() -> Self {
        Self::new(FONT_EXTENSIONS, EXCLUDED_PREFIXES.iter().copied())
    }
}

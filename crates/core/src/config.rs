//! Configuration constants for marking Gaelic fonts.

/// File extensions of fonts to mark (compared case-insensitively).
pub const FONT_EXTENSIONS: &[&str] = &["otf", "woff2"];

/// Filename prefixes of fonts that are never marked.
///
/// SF Pro ships alongside the Gaelic fonts for UI text and is not ours to edit.
pub const EXCLUDED_PREFIXES: &[&str] = &["SF-Pro"];

/// Summary line printed after a directory has been processed.
pub fn summary_line(marked: usize) -> String {
    format!("Done. Marked {marked} font files as Gaelic.")
}

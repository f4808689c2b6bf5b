//! Generic font table manipulation utilities.

mod document;

use anyhow::{Context, Result};
use read_fonts::FontRef;
use write_fonts::FontBuilder;

pub use document::FontDocument;
pub use gaelic_font_woff2::FontFormat;

/// Rewrite font data by applying a transformation function.
///
/// Copies all tables from the source font, then calls `f` to modify or add tables.
/// The function receives a reference to the source font and a mutable builder
/// that already contains all original tables.
pub fn rewrite_font(
    data: &[u8],
    f: impl FnOnce(&FontRef, &mut FontBuilder) -> Result<()>,
) -> Result<Vec<u8>> {
    let font = FontRef::new(data).context("Failed to parse font")?;
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }

    f(&font, &mut builder)?;
    Ok(builder.build())
}


#[cfg(test)]
mod tests {
    use read_fonts::TableProvider;

    use super::{test_fonts::*, *};

    #[test]
    fn test_rewrite_font_keeps_untouched_tables() {
        let data = font_with_names(&[(1, "Aonchlo")]);
        let rewritten = rewrite_font(&data, |_, _| Ok(())).unwrap();

        let font = FontRef::new(&rewritten).unwrap();
        let name = font.name().unwrap();
        assert_eq!(name.name_record().len(), 1);
    }

    #[test]
    fn test_rewrite_font_replaces_table() {
        let data = font_with_names(&[(1, "Aonchlo")]);
        let rewritten = rewrite_font(&data, |_, builder| {
            builder.add_table(&name_table(&[(1, "Richlo"), (2, "Regular")]))?;
            Ok(())
        })
        .unwrap();

        let font = FontRef::new(&rewritten).unwrap();
        let name = font.name().unwrap();
        let strings: Vec<String> = name
            .name_record()
            .iter()
            .map(|r| r.string(name.string_data()).unwrap().to_string())
            .collect();
        assert_eq!(strings, ["Richlo", "Regular"]);
    }

    #[test]
    fn test_rewrite_font_rejects_garbage() {
        assert!(rewrite_font(b"not a font", |_, _| Ok(())).is_err());
    }
}

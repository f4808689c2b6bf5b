//! Language marking constants.

use read_fonts::types::Tag;

/// Windows language ID for Irish (Ireland).
pub const IRISH_LANGUAGE_ID: u16 = 0x083C;

/// Windows language ID for English (United States).
pub const ENGLISH_US_LANGUAGE_ID: u16 = 0x0409;

/// Windows platform ID.
pub const PLATFORM_WINDOWS: u16 = 3;

/// Unicode BMP encoding ID on the Windows platform.
pub const ENCODING_UNICODE_BMP: u16 = 1;

/// Name IDs copied into the target language.
///
/// 1 = family, 2 = subfamily, 4 = full name, 5 = version, 6 = PostScript name.
pub const NAME_IDS_TO_COPY: &[u16] = &[1, 2, 4, 5, 6];

/// OS/2 `ulUnicodeRange1` bit for Latin Extended Additional (U+1E00..U+1EFF),
/// which covers the dotted consonants of traditional Irish orthography.
pub const LATIN_EXTENDED_ADDITIONAL_BIT: u8 = 29;

/// OpenType script tag for Latin.
pub const LATIN_SCRIPT: Tag = Tag::new(b"latn");

/// OpenType language system tag for Irish.
pub const IRISH_LANG_SYS: Tag = Tag::new(b"IRI ");

/// What to write when marking a font for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOptions {
    /// Language ID given to the copied name records.
    pub language_id: u16,
    /// Language ID of the records to copy from.
    pub source_language_id: u16,
    /// Platform ID of the records to copy.
    pub platform_id: u16,
    /// Encoding ID of the records to copy.
    pub encoding_id: u16,
    /// Name IDs to copy.
    pub name_ids: Vec<u16>,
    /// Bit of OS/2 `ulUnicodeRange1` to set (0..=31).
    pub unicode_range_bit: u8,
    /// GSUB script that receives the language system.
    pub script_tag: Tag,
    /// Tag of the language system to add.
    pub lang_sys_tag: Tag,
}

impl MarkOptions {
    /// Options for marking a font as Irish.
    pub fn irish() -> Self {
        Self {
            language_id: IRISH_LANGUAGE_ID,
            source_language_id: ENGLISH_US_LANGUAGE_ID,
            platform_id: PLATFORM_WINDOWS,
            encoding_id: ENCODING_UNICODE_BMP,
            name_ids: NAME_IDS_TO_COPY.to_vec(),
            unicode_range_bit: LATIN_EXTENDED_ADDITIONAL_BIT,
            script_tag: LATIN_SCRIPT,
            lang_sys_tag: IRISH_LANG_SYS,
        }
    }
}

impl Default for MarkOptions {
    fn default() -> Self {
        Self::irish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_irish() {
        let options = MarkOptions::default();
        assert_eq!(options.language_id, 2108);
        assert_eq!(options.source_language_id, 1033);
        assert_eq!(options.name_ids, [1, 2, 4, 5, 6]);
        assert_eq!(options.unicode_range_bit, 29);
        assert_eq!(options.script_tag.to_string(), "latn");
        assert_eq!(options.lang_sys_tag.to_string(), "IRI ");
    }
}

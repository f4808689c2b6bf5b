//! Font container detection and WOFF2 conversion.
//!
//! Fonts are edited as plain sfnt data. A WOFF2 file is decompressed when it
//! is opened and compressed again when it is written back, so callers only
//! ever see sfnt bytes.
//!
//! # Example
//!
//! ```no_run
//! use gaelic_font_woff2::FontFormat;
//!
//! let data = std::fs::read("richlo.woff2").unwrap();
//! let format = FontFormat::detect(&data).unwrap();
//! let sfnt = format.decode(&data).unwrap();
//! let woff2 = format.encode(&sfnt).unwrap();
//! ```

use std::fmt;

use anyhow::{Result, anyhow, bail};
use log::debug;
use ttf2woff2::BrotliQuality;

/// WOFF 1.0 signature (`wOFF`).
const WOFF_SIGNATURE: &[u8; 4] = b"wOFF";

/// WOFF 2.0 signature (`wOF2`).
const WOFF2_SIGNATURE: &[u8; 4] = b"wOF2";

/// sfnt versions accepted as uncompressed fonts.
const SFNT_SIGNATURES: &[&[u8; 4]] = &[b"\x00\x01\x00\x00", b"OTTO", b"true", b"typ1"];

/// On-disk container of a font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// Uncompressed sfnt (OpenType/TrueType).
    Sfnt,
    /// WOFF 2.0 compressed web font.
    Woff2,
}

impl FontFormat {
    /// Detect the container from the leading signature bytes.
    pub fn detect(data: &[u8]) -> Result<Self> {
        let Some(signature) = data.get(..4) else {
            bail!("File too short to be a font ({} bytes)", data.len());
        };

        if signature == WOFF2_SIGNATURE {
            Ok(Self::Woff2)
        } else if SFNT_SIGNATURES.iter().any(|s| signature == s.as_slice()) {
            Ok(Self::Sfnt)
        } else if signature == WOFF_SIGNATURE {
            bail!("WOFF 1.0 fonts are not supported")
        } else {
            bail!("Unrecognized font signature {signature:02x?}")
        }
    }

    /// Convert container data to sfnt data.
    pub fn decode(self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Sfnt => Ok(data.to_vec()),
            Self::Woff2 => {
                let mut input = data;
                let sfnt = woff2_patched::convert_woff2_to_ttf(&mut input)
                    .map_err(|e| anyhow!("Failed to decompress WOFF2: {e:?}"))?;
                debug!("Decompressed WOFF2: {} -> {} bytes", data.len(), sfnt.len());
                Ok(sfnt)
            }
        }
    }

    /// Convert sfnt data back to this container.
    pub fn encode(self, sfnt: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Sfnt => Ok(sfnt.to_vec()),
            Self::Woff2 => {
                let woff2 = ttf2woff2::encode(sfnt, BrotliQuality::default())
                    .map_err(|e| anyhow!("Failed to compress WOFF2: {e:?}"))?;
                debug!("Compressed WOFF2: {} -> {} bytes", sfnt.len(), woff2.len());
                Ok(woff2)
            }
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sfnt => f.write_str("sfnt"),
            Self::Woff2 => f.write_str("WOFF2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use read_fonts::{FontRef, TableProvider, types::Tag};

    use super::*;

    #[test]
    fn test_detect_sfnt() {
        assert_eq!(FontFormat::detect(b"OTTO\x00\x0b").unwrap(), FontFormat::Sfnt);
        assert_eq!(FontFormat::detect(b"\x00\x01\x00\x00\x00\x0b").unwrap(), FontFormat::Sfnt);
        assert_eq!(FontFormat::detect(b"true").unwrap(), FontFormat::Sfnt);
    }

    #[test]
    fn test_detect_woff2() {
        assert_eq!(FontFormat::detect(b"wOF2\x00\x01\x00\x00").unwrap(), FontFormat::Woff2);
    }

    #[test]
    fn test_detect_rejects_woff1() {
        let err = FontFormat::detect(b"wOFF\x00\x01\x00\x00").unwrap_err();
        assert!(err.to_string().contains("WOFF 1.0"));
    }

    #[test]
    fn test_detect_rejects_garbage() {
        assert!(FontFormat::detect(b"{\\rtf1\\ansi").is_err());
        assert!(FontFormat::detect(b"OT").is_err());
    }

    #[test]
    fn test_sfnt_passthrough() {
        let data = b"OTTO-not-really-a-font";
        assert_eq!(FontFormat::Sfnt.decode(data).unwrap(), data);
        assert_eq!(FontFormat::Sfnt.encode(data).unwrap(), data);
    }

    #[test]
    fn test_woff2_round_trip() {
        let sfnt = font_test_data::NOTO_SERIF_DISPLAY_TRIMMED;
        let woff2 = FontFormat::Woff2.encode(sfnt).unwrap();
        assert_eq!(FontFormat::detect(&woff2).unwrap(), FontFormat::Woff2);

        let decoded = FontFormat::Woff2.decode(&woff2).unwrap();
        let original = FontRef::new(sfnt).unwrap();
        let font = FontRef::new(&decoded).unwrap();

        let tags = |font: &FontRef| -> Vec<_> {
            font.table_directory.table_records().iter().map(|r| r.tag()).collect()
        };
        assert_eq!(tags(&font), tags(&original));
        let name = |font: &FontRef| font.table_data(Tag::new(b"name")).unwrap().as_bytes().to_vec();
        assert_eq!(name(&font), name(&original));
        assert_eq!(
            font.os2().unwrap().ul_unicode_range_1(),
            original.os2().unwrap().ul_unicode_range_1()
        );
    }

    #[test]
    fn test_decode_truncated_woff2() {
        assert!(FontFormat::Woff2.decode(b"wOF2\x00\x01").is_err());
    }
}

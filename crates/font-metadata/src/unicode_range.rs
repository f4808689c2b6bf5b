//! OS/2 Unicode range bits.

use anyhow::{Context, Result, bail};
use read_fonts::{FontRef, ReadError, TableProvider};
use write_fonts::{from_obj::ToOwnedTable, tables::os2::Os2};

use crate::{PatchOutcome, TablePatch};

/// Mask for `bit` of a 32-bit Unicode range field.
pub fn unicode_range_mask(bit: u8) -> Result<u32> {
    match 1u32.checked_shl(bit.into()) {
        Some(mask) => Ok(mask),
        None => bail!("Unicode range bit {bit} is out of range (0..=31)"),
    }
}

/// Set `bit` in `range`, leaving every other bit alone.
pub fn with_unicode_range_bit(range: u32, bit: u8) -> Result<u32> {
    Ok(range | unicode_range_mask(bit)?)
}

/// Set a bit of OS/2 `ulUnicodeRange1`.
pub fn set_unicode_range_bit(font: &FontRef, bit: u8) -> Result<TablePatch<Os2>> {
    let mask = unicode_range_mask(bit)?;
    let os2 = match font.os2() {
        Ok(os2) => os2,
        Err(ReadError::TableIsMissing(_)) => {
            return Ok(TablePatch::skipped(PatchOutcome::SkippedNoTable));
        }
        Err(e) => return Err(e).context("Failed to read OS/2 table"),
    };

    if os2.ul_unicode_range_1() & mask != 0 {
        return Ok(TablePatch::skipped(PatchOutcome::SkippedAlreadyPresent));
    }

    let mut table: Os2 = os2.to_owned_table();
    table.ul_unicode_range_1 |= mask;
    Ok(TablePatch::applied(table, 1))
}

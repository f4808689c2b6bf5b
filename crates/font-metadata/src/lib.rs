//! Language support metadata (name records, OS/2 ranges, GSUB language systems).
//!
//! [`mark_font`] marks a font as supporting a language, Irish by default:
//!
//! - English name records are copied under the Irish language ID,
//! - OS/2 `ulUnicodeRange1` bit 29 (Latin Extended Additional) is set,
//! - an `IRI ` language system is added to the GSUB `latn` script.
//!
//! Each edit only adds what is missing, so marking a font twice is the same
//! as marking it once.

mod lang_sys;
mod names;
mod options;
mod unicode_range;

use std::fmt;

use anyhow::Result;
use gaelic_font_ops::{FontDocument, rewrite_font};
use log::debug;
use read_fonts::FontRef;
use write_fonts::{
    FontBuilder,
    tables::{gsub::Gsub, name::Name, os2::Os2},
};

pub use lang_sys::{NO_REQUIRED_FEATURE, add_lang_sys, add_language_system};
pub use names::{NameEntry, add_language_names, plan_language_names, read_name_entries};
pub use options::{
    ENCODING_UNICODE_BMP, ENGLISH_US_LANGUAGE_ID, IRISH_LANG_SYS, IRISH_LANGUAGE_ID,
    LATIN_EXTENDED_ADDITIONAL_BIT, LATIN_SCRIPT, MarkOptions, NAME_IDS_TO_COPY, PLATFORM_WINDOWS,
};
pub use unicode_range::{set_unicode_range_bit, unicode_range_mask, with_unicode_range_bit};

/// Result of one marking edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The table was changed.
    Applied,
    /// The font has no such table.
    SkippedNoTable,
    /// The table has no matching script (GSUB only).
    SkippedNoScript,
    /// There were no records to copy from (name only).
    SkippedNoSource,
    /// Everything was already in place.
    SkippedAlreadyPresent,
}

impl PatchOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Applied => "applied",
            Self::SkippedNoTable => "no table",
            Self::SkippedNoScript => "no script",
            Self::SkippedNoSource => "nothing to copy",
            Self::SkippedAlreadyPresent => "already present",
        })
    }
}

/// An edit to one table: its outcome and, if applied, the new table.
#[derive(Debug, Clone)]
pub struct TablePatch<T> {
    pub outcome: PatchOutcome,
    /// Number of records added or bits set.
    pub changes: usize,
    pub table: Option<T>,
}

impl<T> TablePatch<T> {
    pub fn skipped(outcome: PatchOutcome) -> Self {
        Self { outcome, changes: 0, table: None }
    }

    pub fn applied(table: T, changes: usize) -> Self {
        Self { outcome: PatchOutcome::Applied, changes, table: Some(table) }
    }
}

/// Outcomes of marking one font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkReport {
    pub names: PatchOutcome,
    pub names_added: usize,
    pub unicode_range: PatchOutcome,
    pub lang_sys: PatchOutcome,
}

impl MarkReport {
    /// `true` if any table was changed.
    pub fn is_modified(&self) -> bool {
        self.names.is_applied() || self.unicode_range.is_applied() || self.lang_sys.is_applied()
    }
}

impl fmt::Display for MarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}", self.names)?;
        if self.names_added > 0 {
            write!(f, " ({} records)", self.names_added)?;
        }
        write!(f, ", OS/2: {}, GSUB: {}", self.unicode_range, self.lang_sys)
    }
}

/// The tables to replace when marking a font.
struct MarkPlan {
    report: MarkReport,
    name: Option<Name>,
    os2: Option<Os2>,
    gsub: Option<Gsub>,
}

impl MarkPlan {
    fn new(font: &FontRef, options: &MarkOptions) -> Result<Self> {
        let name = add_language_names(font, options)?;
        let os2 = set_unicode_range_bit(font, options.unicode_range_bit)?;
        let gsub = add_language_system(font, options.script_tag, options.lang_sys_tag)?;

        debug!("name: {}, OS/2: {}, GSUB: {}", name.outcome, os2.outcome, gsub.outcome);

        Ok(Self {
            report: MarkReport {
                names: name.outcome,
                names_added: name.changes,
                unicode_range: os2.outcome,
                lang_sys: gsub.outcome,
            },
            name: name.table,
            os2: os2.table,
            gsub: gsub.table,
        })
    }

    fn apply(&self, builder: &mut FontBuilder) -> Result<()> {
        if let Some(name) = &self.name {
            builder.add_table(name)?;
        }
        if let Some(os2) = &self.os2 {
            builder.add_table(os2)?;
        }
        if let Some(gsub) = &self.gsub {
            builder.add_table(gsub)?;
        }
        Ok(())
    }
}

/// Mark an open font document.
///
/// The document is only rewritten when at least one edit applies.
pub fn mark_font(doc: &mut FontDocument, options: &MarkOptions) -> Result<MarkReport> {
    let plan = MarkPlan::new(&doc.font()?, options)?;
    if plan.report.is_modified() {
        doc.rewrite(|_, builder| plan.apply(builder))?;
    }
    Ok(plan.report)
}

/// Mark sfnt font data, returning the new data.
///
/// Data that needs no changes is returned as is.
pub fn mark_font_data(data: &[u8], options: &MarkOptions) -> Result<(Vec<u8>, MarkReport)> {
    let plan = MarkPlan::new(&FontRef::new(data)?, options)?;
    if !plan.report.is_modified() {
        return Ok((data.to_vec(), plan.report));
    }
    let marked = rewrite_font(data, |_, builder| plan.apply(builder))?;
    Ok((marked, plan.report))
}

//! Name record duplication.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use log::debug;
use read_fonts::{
    FontRef, ReadError, TableProvider,
    tables::name::{self as read_name, Encoding},
    types::NameId,
};
use write_fonts::{
    from_obj::ToOwnedTable,
    tables::name::{Name, NameRecord},
};

use crate::{MarkOptions, PatchOutcome, TablePatch};

/// A decoded name record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub name_id: u16,
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub text: String,
}

impl NameEntry {
    fn key(&self) -> (u16, u16, u16) {
        (self.name_id, self.platform_id, self.encoding_id)
    }

    fn is_source(&self, options: &MarkOptions) -> bool {
        self.platform_id == options.platform_id
            && self.encoding_id == options.encoding_id
            && self.language_id == options.source_language_id
            && options.name_ids.contains(&self.name_id)
    }
}

/// Decode every record of a name table.
pub fn read_name_entries(name: &read_name::Name) -> Result<Vec<NameEntry>> {
    name.name_record()
        .iter()
        .map(|record| {
            let name_id = record.name_id().to_u16();
            let text = record
                .string(name.string_data())
                .with_context(|| format!("Failed to read name record {name_id}"))?
                .to_string();
            Ok(NameEntry {
                name_id,
                platform_id: record.platform_id(),
                encoding_id: record.encoding_id(),
                language_id: record.language_id(),
                text,
            })
        })
        .collect()
}

/// Compute the records missing from the target language.
///
/// Every source record whose (name ID, platform, encoding) has no counterpart
/// in the target language yields one copy with the target language ID.
pub fn plan_language_names(entries: &[NameEntry], options: &MarkOptions) -> Vec<NameEntry> {
    let mut present: HashSet<_> = entries
        .iter()
        .filter(|e| e.language_id == options.language_id)
        .map(NameEntry::key)
        .collect();

    entries
        .iter()
        .filter(|e| e.is_source(options))
        .filter(|e| present.insert(e.key()))
        .map(|e| NameEntry { language_id: options.language_id, ..e.clone() })
        .collect()
}

/// Copy source-language name records into the target language.
pub fn add_language_names(font: &FontRef, options: &MarkOptions) -> Result<TablePatch<Name>> {
    let name = match font.name() {
        Ok(name) => name,
        Err(ReadError::TableIsMissing(_)) => {
            return Ok(TablePatch::skipped(PatchOutcome::SkippedNoTable));
        }
        Err(e) => return Err(e).context("Failed to read name table"),
    };

    let entries = read_name_entries(&name)?;
    if !entries.iter().any(|e| e.is_source(options)) {
        return Ok(TablePatch::skipped(PatchOutcome::SkippedNoSource));
    }

    let additions = plan_language_names(&entries, options);
    if additions.is_empty() {
        return Ok(TablePatch::skipped(PatchOutcome::SkippedAlreadyPresent));
    }

    // Records in encodings that cannot be decoded would be rebuilt empty.
    if let Some(record) = name
        .name_record()
        .iter()
        .find(|r| matches!(Encoding::new(r.platform_id(), r.encoding_id()), Encoding::Unknown))
    {
        bail!(
            "Unsupported encoding in name record {} (platform {}, encoding {})",
            record.name_id().to_u16(),
            record.platform_id(),
            record.encoding_id()
        );
    }

    let mut table: Name = name.to_owned_table();
    for entry in &additions {
        debug!(
            "Adding name {} for language {:#06x}: {}",
            entry.name_id, entry.language_id, entry.text
        );
        table.name_record.push(NameRecord::new(
            entry.platform_id,
            entry.encoding_id,
            entry.language_id,
            NameId::new(entry.name_id),
            entry.text.clone().into(),
        ));
    }
    table.name_record.sort();

    Ok(TablePatch::applied(table, additions.len()))
}

//! GSUB language system records.

use anyhow::{Context, Result};
use read_fonts::{FontRef, ReadError, TableProvider, types::Tag};
use write_fonts::{
    from_obj::ToOwnedTable,
    tables::{
        gsub::Gsub,
        layout::{LangSys, LangSysRecord, ScriptList},
    },
};

use crate::{PatchOutcome, TablePatch};

/// `required_feature_index` of a language system without a required feature.
pub const NO_REQUIRED_FEATURE: u16 = 0xFFFF;

/// Add a language system to the first script tagged `script_tag`.
///
/// The new language system copies the script's default language system
/// (required feature and feature indices, in order), or has no features when
/// the script has no default. Records stay sorted by tag.
pub fn add_lang_sys(
    script_list: &mut ScriptList,
    script_tag: Tag,
    lang_sys_tag: Tag,
) -> PatchOutcome {
    let Some(script) = script_list
        .script_records
        .iter_mut()
        .find(|r| r.script_tag == script_tag)
        .map(|r| &mut *r.script)
    else {
        return PatchOutcome::SkippedNoScript;
    };

    if script.lang_sys_records.iter().any(|r| r.lang_sys_tag == lang_sys_tag) {
        return PatchOutcome::SkippedAlreadyPresent;
    }

    let lang_sys = match script.default_lang_sys.as_ref() {
        Some(default) => LangSys {
            required_feature_index: default.required_feature_index,
            feature_indices: default.feature_indices.clone(),
        },
        None => {
            LangSys { required_feature_index: NO_REQUIRED_FEATURE, feature_indices: Vec::new() }
        }
    };

    let records = &mut script.lang_sys_records;
    let position =
        records.iter().position(|r| r.lang_sys_tag > lang_sys_tag).unwrap_or(records.len());
    records.insert(position, LangSysRecord::new(lang_sys_tag, lang_sys));

    PatchOutcome::Applied
}

/// Add a language system to a font's GSUB table.
pub fn add_language_system(
    font: &FontRef,
    script_tag: Tag,
    lang_sys_tag: Tag,
) -> Result<TablePatch<Gsub>> {
    let gsub = match font.gsub() {
        Ok(gsub) => gsub,
        Err(ReadError::TableIsMissing(_)) => {
            return Ok(TablePatch::skipped(PatchOutcome::SkippedNoTable));
        }
        Err(e) => return Err(e).context("Failed to read GSUB table"),
    };

    match gsub.script_list() {
        Ok(_) => {}
        Err(ReadError::NullOffset) => return Ok(TablePatch::skipped(PatchOutcome::SkippedNoScript)),
        Err(e) => return Err(e).context("Failed to read GSUB script list"),
    }

    let mut table: Gsub = gsub.to_owned_table();
    match add_lang_sys(&mut table.script_list, script_tag, lang_sys_tag) {
        PatchOutcome::Applied => Ok(TablePatch::applied(table, 1)),
        outcome => Ok(TablePatch::skipped(outcome)),
    }
}

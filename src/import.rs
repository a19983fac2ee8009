// SPDX-License-Identifier: PMPL-1.0-or-later

//! Ingestion of locale files delivered by external translators.
//!
//! Deliveries are messy: nested folders, Windows editors, stray BOMs.
//! The import scan therefore walks the whole directory tree, accepts
//! Latin-1 encoded files, and keeps going past invalid ones so a single
//! bad file never blocks the rest of a delivery.

use crate::store::LocaleStore;
use crate::tree::TranslationTree;
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file that could not be imported.
#[derive(Debug, Clone)]
pub struct ImportFailure {
    /// Path relative to the import directory.
    pub file: String,
    pub error: String,
}

/// What an import run did.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Language codes whose file was accepted and rewritten into the
    /// locale directory.
    pub imported: Vec<String>,
    pub failed: Vec<ImportFailure>,
}

/// Import every `.json` file under `from` into the locale store.
///
/// Files are processed in sorted path order; the language code is the
/// file stem, so `deliveries/batch2/sw.json` lands as locale `sw`.
/// Accepted files are re-serialized through the store, which normalizes
/// formatting and encoding.
pub fn import_dir(store: &LocaleStore, from: &Path) -> Result<ImportOutcome> {
    if !from.is_dir() {
        bail!(
            "import directory not found: {} (create it and drop locale JSON files inside)",
            from.display()
        );
    }

    let files: Vec<PathBuf> = WalkDir::new(from)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();

    if files.is_empty() {
        bail!("no JSON files to import in {}", from.display());
    }

    let mut outcome = ImportOutcome::default();
    for path in files {
        let label = path
            .strip_prefix(from)
            .unwrap_or(&path)
            .display()
            .to_string();
        match import_file(store, &path) {
            Ok(code) => outcome.imported.push(code),
            Err(err) => outcome.failed.push(ImportFailure {
                file: label,
                error: format!("{err:#}"),
            }),
        }
    }
    Ok(outcome)
}

fn import_file(store: &LocaleStore, path: &Path) -> Result<String> {
    let code = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| anyhow!("file name is not valid UTF-8"))?
        .to_string();

    let raw_bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    // Try UTF-8 first, then Latin-1 fallback
    let content = match String::from_utf8(raw_bytes) {
        Ok(text) => text,
        Err(err) => {
            let raw_bytes = err.into_bytes();
            let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&raw_bytes);
            if had_errors {
                bail!("neither UTF-8 nor Latin-1 text");
            }
            decoded.into_owned()
        }
    };

    let tree: TranslationTree = serde_json::from_str(content.trim_start_matches('\u{feff}'))
        .context("invalid JSON (top level must be an object)")?;
    store.save(&code, &tree)?;
    Ok(code)
}

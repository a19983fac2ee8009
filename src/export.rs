// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hand-off bundle for external translators.
//!
//! One export run produces three artifacts in the output directory: a
//! verbatim copy of every locale file, a single `all-translations.json`
//! keyed by language code, and a semicolon-separated CSV with one row
//! per base key and one column per manifest language (cells stay empty
//! for languages without a file yet).

use crate::manifest::Manifest;
use crate::resolver::LanguageRegistry;
use crate::store::LocaleStore;
use crate::tree::{leaf_text, TranslationTree};
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub const BUNDLE_FILE: &str = "all-translations.json";
pub const CSV_FILE: &str = "translations.csv";

/// What an export run produced.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub out_dir: PathBuf,
    /// Codes whose raw file was copied.
    pub copied: Vec<String>,
    pub bundle_path: PathBuf,
    /// Absent when the base language has no file, since the CSV rows are
    /// keyed by the base layout.
    pub csv_path: Option<PathBuf>,
    /// Base leaf count, 0 without a base file.
    pub keys: usize,
}

/// Export every discovered locale into `out_dir`.
pub fn export_all(store: &LocaleStore, manifest: &Manifest, out_dir: &Path) -> Result<ExportSummary> {
    let registry = store.load_registry(manifest)?;
    if registry.is_empty() {
        bail!("no locale files found in {}", store.dir().display());
    }
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating export directory {}", out_dir.display()))?;

    let mut copied = Vec::new();
    for info in registry.languages() {
        let from = store.locale_path(&info.code);
        let to = out_dir.join(format!("{}.json", info.code));
        fs::copy(&from, &to)
            .with_context(|| format!("copying {} to {}", from.display(), to.display()))?;
        copied.push(info.code);
    }

    let bundle_path = out_dir.join(BUNDLE_FILE);
    write_bundle(&bundle_path, &registry)?;

    let (csv_path, keys) = match registry.tree(&manifest.base) {
        Some(base) => {
            let path = out_dir.join(CSV_FILE);
            write_csv(&path, manifest, &registry, base)?;
            (Some(path), base.count_leaves())
        }
        None => (None, 0),
    };

    Ok(ExportSummary {
        out_dir: out_dir.to_path_buf(),
        copied,
        bundle_path,
        csv_path,
        keys,
    })
}

fn write_bundle(path: &Path, registry: &LanguageRegistry) -> Result<()> {
    let mut bundle = Map::new();
    for info in registry.languages() {
        let Some(tree) = registry.tree(&info.code) else {
            continue;
        };
        bundle.insert(info.code, Value::Object(tree.as_map().clone()));
    }
    let mut body =
        serde_json::to_string_pretty(&bundle).context("serializing translation bundle")?;
    body.push('\n');
    fs::write(path, body).with_context(|| format!("writing bundle {}", path.display()))
}

fn write_csv(
    path: &Path,
    manifest: &Manifest,
    registry: &LanguageRegistry,
    base: &TranslationTree,
) -> Result<()> {
    let mut out = String::from("Key");
    for language in &manifest.languages {
        out.push(';');
        out.push_str(&escape_csv_field(&language.name));
    }
    out.push('\n');

    for (key_path, _) in base.flatten() {
        out.push_str(&escape_csv_field(&key_path));
        for language in &manifest.languages {
            let cell = registry
                .tree(&language.code)
                .and_then(|tree| tree.get_at_path(&key_path))
                .filter(|value| !value.is_object())
                .map(leaf_text)
                .unwrap_or_default();
            out.push(';');
            out.push_str(&escape_csv_field(&cell));
        }
        out.push('\n');
    }

    fs::write(path, out).with_context(|| format!("writing CSV {}", path.display()))
}

/// Quote a field when it contains the separator, a quote or a newline;
/// inner quotes are doubled.
fn escape_csv_field(field: &str) -> String {
    if field.contains(';') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

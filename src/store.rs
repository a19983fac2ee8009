// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale directory persistence.
//!
//! One language lives in one `<code>.json` file at the top level of the
//! locale directory. Reads are strict UTF-8 and strict JSON-object; the
//! lenient decoding path for third-party deliveries lives in the import
//! module instead.

use crate::manifest::Manifest;
use crate::resolver::LanguageRegistry;
use crate::tree::TranslationTree;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle on a locale directory.
pub struct LocaleStore {
    dir: PathBuf,
}

impl LocaleStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocaleStore { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a language code.
    #[must_use]
    pub fn locale_path(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{code}.json"))
    }

    #[must_use]
    pub fn exists(&self, code: &str) -> bool {
        self.locale_path(code).is_file()
    }

    /// Language codes backed by a `.json` file, sorted by code.
    pub fn discover(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Err(anyhow!("locale directory not found: {}", self.dir.display()));
        }

        let mut codes: Vec<String> = fs::read_dir(&self.dir)
            .with_context(|| format!("listing locale directory {}", self.dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .map(|ext| ext.eq_ignore_ascii_case("json"))
                        .unwrap_or(false)
            })
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .collect();

        codes.sort();
        Ok(codes)
    }

    /// Read and parse one language's file.
    pub fn load(&self, code: &str) -> Result<TranslationTree> {
        let path = self.locale_path(code);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading locale file {}", path.display()))?;
        let tree: TranslationTree = serde_json::from_str(&raw).with_context(|| {
            format!(
                "parsing locale file {} (top level must be a JSON object)",
                path.display()
            )
        })?;
        Ok(tree)
    }

    /// Write one language's file, pretty-printed with a trailing newline.
    ///
    /// Creates the locale directory on first use.
    pub fn save(&self, code: &str, tree: &TranslationTree) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating locale directory {}", self.dir.display()))?;
        let path = self.locale_path(code);
        let mut body =
            serde_json::to_string_pretty(tree).context("serializing translation tree")?;
        body.push('\n');
        fs::write(&path, body).with_context(|| format!("writing locale file {}", path.display()))?;
        Ok(())
    }

    /// Load every discovered language into a registry.
    ///
    /// Registration order is manifest order first, then any extra
    /// on-disk languages the manifest does not declare (sorted by code,
    /// display name falling back to the code).
    pub fn load_registry(&self, manifest: &Manifest) -> Result<LanguageRegistry> {
        let discovered = self.discover()?;
        let mut registry = LanguageRegistry::new();

        for code in manifest.codes() {
            if discovered.iter().any(|c| c == code) {
                registry.register(code, manifest.display_name(code), self.load(code)?);
            }
        }
        for code in &discovered {
            if !manifest.contains(code) {
                registry.register(code.clone(), code.clone(), self.load(code)?);
            }
        }
        Ok(registry)
    }
}

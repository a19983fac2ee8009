// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale file scaffolding.
//!
//! Derives an empty skeleton from the base language's file and writes it
//! for every declared language that has no file yet, so translators
//! always start from the canonical key layout.

use crate::manifest::Manifest;
use crate::store::LocaleStore;
use anyhow::{bail, Result};

/// What a scaffolding run did.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOutcome {
    pub base_code: String,
    /// Codes whose file was written this run.
    pub created: Vec<String>,
    /// Codes whose existing file was left alone.
    pub skipped: Vec<String>,
}

/// Write a blank skeleton file for every manifest language without one.
///
/// The base language's file is the input and is never touched. With
/// `force`, existing files are overwritten and any translations in them
/// are lost; without it they are skipped.
pub fn generate(store: &LocaleStore, manifest: &Manifest, force: bool) -> Result<ScaffoldOutcome> {
    if !store.exists(&manifest.base) {
        bail!(
            "base locale file not found: {} (write the base language's strings there first)",
            store.locale_path(&manifest.base).display()
        );
    }
    let base = store.load(&manifest.base)?;
    let skeleton = base.empty_skeleton();

    let mut outcome = ScaffoldOutcome {
        base_code: manifest.base.clone(),
        ..ScaffoldOutcome::default()
    };
    for code in manifest.codes() {
        if code == manifest.base {
            continue;
        }
        if store.exists(code) && !force {
            outcome.skipped.push(code.to_string());
            continue;
        }
        store.save(code, &skeleton)?;
        outcome.created.push(code.to_string());
    }
    Ok(outcome)
}

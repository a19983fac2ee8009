// SPDX-License-Identifier: PMPL-1.0-or-later

//! Completion and integrity analysis across languages.
//!
//! Everything here reduces to two tree operations: `diff_missing` against
//! the base language and `empty_keys` within a single language. The
//! aggregate [`AuditReport`] is what `validate`, `stats` and
//! `untranslated` print, and what `--output` persists.

use crate::resolver::LanguageRegistry;
use crate::tree::TranslationTree;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Translated-versus-total summary for one language.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionStats {
    pub translated: usize,
    pub total: usize,
    pub percent: f64,
}

/// Completion of `tree` measured against the base language's leaf count.
///
/// `translated` counts the candidate's own non-empty leaves wherever they
/// sit, so a tree with keys outside the base shape still gets credit. An
/// empty base yields 0.0 percent, never a division error.
#[must_use]
pub fn completion(tree: &TranslationTree, base: &TranslationTree) -> CompletionStats {
    let total = base.count_leaves();
    let translated = tree.count_translated();
    let percent = if total > 0 {
        (translated as f64 / total as f64) * 100.0
    } else {
        0.0
    };
    CompletionStats {
        translated,
        total,
        percent,
    }
}

/// Base leaf paths absent from or empty in `tree`.
#[must_use]
pub fn missing_keys(tree: &TranslationTree, base: &TranslationTree) -> Vec<String> {
    tree.diff_missing(base)
}

/// Leaf paths within `tree` holding an empty or null value.
#[must_use]
pub fn empty_keys(tree: &TranslationTree) -> Vec<String> {
    tree.empty_keys()
}

/// Audit findings for a single language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageAudit {
    pub code: String,
    pub display_name: String,
    pub stats: CompletionStats,
    /// Paths present in this language but holding no content.
    pub empty: Vec<String>,
    /// Base paths this language lacks (absent or empty).
    pub missing: Vec<String>,
}

impl LanguageAudit {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Full audit across every registered language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub created_at: String,
    pub locales_dir: PathBuf,
    pub base_code: String,
    pub base_total: usize,
    pub languages: Vec<LanguageAudit>,
}

impl AuditReport {
    /// Languages other than the base itself.
    pub fn candidates(&self) -> impl Iterator<Item = &LanguageAudit> {
        self.languages.iter().filter(|l| l.code != self.base_code)
    }

    /// Whether any non-base language is missing keys.
    #[must_use]
    pub fn has_missing(&self) -> bool {
        self.candidates().any(|l| !l.missing.is_empty())
    }

    /// Count of non-base languages with at least one missing key.
    #[must_use]
    pub fn incomplete_languages(&self) -> usize {
        self.candidates().filter(|l| !l.missing.is_empty()).count()
    }

    /// Total missing keys across non-base languages.
    #[must_use]
    pub fn total_missing(&self) -> usize {
        self.candidates().map(|l| l.missing.len()).sum()
    }
}

/// Audit every language in `registry` against the base language.
///
/// The base must be registered; its own entry trivially reports no
/// missing keys but still surfaces empty ones.
pub fn audit_registry(
    registry: &LanguageRegistry,
    base_code: &str,
    locales_dir: &Path,
) -> Result<AuditReport> {
    let base = registry
        .tree(base_code)
        .ok_or_else(|| anyhow!("base language '{}' is not loaded", base_code))?;

    let languages = registry
        .languages()
        .into_iter()
        .map(|info| {
            let tree = registry
                .tree(&info.code)
                .ok_or_else(|| anyhow!("language '{}' vanished from the registry", info.code))?;
            Ok(LanguageAudit {
                stats: completion(tree, base),
                empty: empty_keys(tree),
                missing: missing_keys(tree, base),
                code: info.code,
                display_name: info.name,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AuditReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        locales_dir: locales_dir.to_path_buf(),
        base_code: base_code.to_string(),
        base_total: base.count_leaves(),
        languages,
    })
}

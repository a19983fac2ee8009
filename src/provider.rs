// SPDX-License-Identifier: PMPL-1.0-or-later

//! Offline translation sources and the fill pipeline.
//!
//! A [`TranslationProvider`] answers "how does this base-language text
//! read in the target language", or declines. Providers stack into a
//! [`ProviderChain`] where the first answer wins, and [`fill_tree`] runs
//! the chain over every untranslated leaf of a language.
//!
//! Everything here is offline. The bundled provider is a glossary file
//! maintained by reviewers; machine translation services are deliberately
//! not part of this tool.

use crate::tree::{is_empty_leaf, leaf_text, TranslationTree};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// A source of candidate translations.
pub trait TranslationProvider: Send + Sync {
    /// Translate base-language `text` into `target_lang`, or `None` when
    /// this provider has no answer for it.
    fn translate(&self, text: &str, target_lang: &str) -> Option<String>;

    /// Short label for console output.
    fn name(&self) -> &str;
}

/// Ordered providers, consulted first to last.
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Box<dyn TranslationProvider>>,
}

impl ProviderChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, provider: Box<dyn TranslationProvider>) {
        self.providers.push(provider);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider labels in consultation order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// First answer from the chain. Later providers are not consulted
    /// once one answers.
    #[must_use]
    pub fn translate(&self, text: &str, target_lang: &str) -> Option<String> {
        self.providers
            .iter()
            .find_map(|provider| provider.translate(text, target_lang))
    }
}

/// Reviewer-maintained glossary for one target language.
///
/// The backing file is a flat JSON object mapping base-language text to
/// its translation:
///
/// ```json
/// { "Iniciar Sessão": "Ingia", "Sair": "Toka" }
/// ```
#[derive(Debug)]
pub struct GlossaryProvider {
    lang: String,
    label: String,
    entries: HashMap<String, String>,
}

impl GlossaryProvider {
    /// Build from entries directly; mainly for tests and embedding.
    #[must_use]
    pub fn new(lang: impl Into<String>, entries: HashMap<String, String>) -> Self {
        let lang = lang.into();
        let label = format!("glossary:{lang}");
        GlossaryProvider {
            lang,
            label,
            entries,
        }
    }

    /// Load a glossary file bound to `lang`.
    pub fn from_file(path: &Path, lang: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading glossary {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "parsing glossary {} (must be a flat JSON object of strings)",
                path.display()
            )
        })?;
        Ok(Self::new(lang, entries))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TranslationProvider for GlossaryProvider {
    fn translate(&self, text: &str, target_lang: &str) -> Option<String> {
        if target_lang != self.lang {
            return None;
        }
        self.entries.get(text).cloned()
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// What a fill run did for one language.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    pub lang: String,
    /// The language's tree on the base layout after filling.
    pub tree: TranslationTree,
    /// Base leaf count.
    pub total: usize,
    /// Leaves that already carried a translation.
    pub already: usize,
    /// Leaves translated by the chain this run.
    pub filled: usize,
}

impl FillOutcome {
    /// Leaves still untranslated after the run.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.already - self.filled
    }
}

/// Fill every untranslated leaf of `existing` from the provider chain.
///
/// The result sits on the base layout: a fresh skeleton takes the
/// existing translations first, then the chain is asked about each leaf
/// that is still empty, using the base text as the source. Existing
/// translations are never overwritten, and leaves the chain cannot
/// answer stay empty.
pub fn fill_tree(
    base: &TranslationTree,
    existing: &TranslationTree,
    target_lang: &str,
    chain: &ProviderChain,
) -> Result<FillOutcome> {
    let mut tree = base.empty_skeleton();
    tree.merge_leaves(existing);

    let mut total = 0;
    let mut already = 0;
    let mut filled = 0;
    for (path, base_value) in base.flatten() {
        total += 1;
        let needs_translation = tree.get_at_path(&path).map(is_empty_leaf).unwrap_or(true);
        if !needs_translation {
            already += 1;
            continue;
        }
        let source_text = leaf_text(base_value);
        if source_text.is_empty() {
            continue;
        }
        if let Some(translated) = chain.translate(&source_text, target_lang) {
            tree.set_at_path(&path, translated)
                .with_context(|| format!("writing filled translation at '{path}'"))?;
            filled += 1;
        }
    }

    Ok(FillOutcome {
        lang: target_lang.to_string(),
        tree,
        total,
        already,
        filled,
    })
}

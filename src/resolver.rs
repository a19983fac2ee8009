// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime translation lookup.
//!
//! [`LanguageRegistry`] holds every loaded language alongside its display
//! name; [`Translator`] resolves dotted keys against a current language
//! with a single fallback hop and `{name}` parameter substitution.
//!
//! Resolution rules:
//!
//! * A key resolves in the current language when the path exists and ends
//!   on a leaf. An empty string is a deliberate translation and is
//!   returned as-is; it never triggers fallback.
//! * Only structural absence (a path segment that does not exist, or a
//!   path that ends on a sub-tree) falls back to the fallback language.
//! * A key absent from both languages comes back verbatim so the UI shows
//!   the dotted key instead of a blank widget.

use crate::tree::{leaf_text, TranslationTree};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// A language code paired with its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

#[derive(Debug)]
struct LanguageEntry {
    code: String,
    name: String,
    tree: TranslationTree,
}

/// Ordered set of loaded languages.
///
/// Registration order is preserved and is the order every listing
/// surface reports. Lookups are a linear scan, which is fine for the
/// handful of languages a deployment carries.
#[derive(Debug, Default)]
pub struct LanguageRegistry {
    entries: Vec<LanguageEntry>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a language, replacing any earlier registration of the same
    /// code in place (order is kept).
    pub fn register(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        tree: TranslationTree,
    ) {
        let entry = LanguageEntry {
            code: code.into(),
            name: name.into(),
            tree,
        };
        match self.entries.iter_mut().find(|e| e.code == entry.code) {
            Some(slot) => *slot = entry,
            None => self.entries.push(entry),
        }
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// The translation tree for a language code, if loaded.
    #[must_use]
    pub fn tree(&self, code: &str) -> Option<&TranslationTree> {
        self.entries.iter().find(|e| e.code == code).map(|e| &e.tree)
    }

    /// Display name for a code, if loaded.
    #[must_use]
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.name.as_str())
    }

    /// All languages in registration order.
    #[must_use]
    pub fn languages(&self) -> Vec<LanguageInfo> {
        self.entries
            .iter()
            .map(|e| LanguageInfo {
                code: e.code.clone(),
                name: e.name.clone(),
            })
            .collect()
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

/// Key resolver bound to a current language and a fixed fallback.
pub struct Translator {
    registry: LanguageRegistry,
    current: String,
    fallback: String,
    placeholder: Regex,
}

impl Translator {
    /// Build a translator over `registry`. The current language starts at
    /// `fallback`.
    #[must_use]
    pub fn new(registry: LanguageRegistry, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        Translator {
            registry,
            current: fallback.clone(),
            fallback,
            // Infallible: the pattern is a literal.
            placeholder: Regex::new(r"\{(\w+)\}").unwrap(),
        }
    }

    /// Switch the current language.
    ///
    /// Unknown codes are rejected and the previous selection stays
    /// active; the return value says whether the switch happened.
    pub fn set_language(&mut self, code: &str) -> bool {
        if self.registry.contains(code) {
            self.current = code.to_string();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current_language(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    #[must_use]
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Languages available for [`Translator::set_language`], in
    /// registration order.
    #[must_use]
    pub fn available_languages(&self) -> Vec<LanguageInfo> {
        self.registry.languages()
    }

    /// Resolve `key` in the current language, falling back on structural
    /// absence, echoing the key when both languages miss it.
    ///
    /// String leaves get `{name}` placeholders substituted from `params`;
    /// placeholders without a matching parameter are left verbatim.
    /// Non-string leaves render through their JSON form and skip
    /// substitution, as does an echoed key.
    ///
    /// # Examples
    ///
    /// ```
    /// use localekit::resolver::{LanguageRegistry, Translator};
    /// use localekit::tree::TranslationTree;
    ///
    /// let tree: TranslationTree =
    ///     serde_json::from_str(r#"{"greeting":"Karibu, {name}!"}"#).unwrap();
    /// let mut registry = LanguageRegistry::new();
    /// registry.register("sw", "Swahili", tree);
    ///
    /// let translator = Translator::new(registry, "sw");
    /// assert_eq!(
    ///     translator.translate("greeting", &[("name", "Amina")]),
    ///     "Karibu, Amina!"
    /// );
    /// assert_eq!(translator.translate("absent.key", &[]), "absent.key");
    /// ```
    #[must_use]
    pub fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let resolved = self
            .lookup_leaf(&self.current, key)
            .or_else(|| self.lookup_leaf(&self.fallback, key));
        match resolved {
            Some(Value::String(template)) => self.substitute(template, params),
            Some(other) => leaf_text(other),
            None => key.to_string(),
        }
    }

    fn lookup_leaf(&self, lang: &str, key: &str) -> Option<&Value> {
        let value = self.registry.tree(lang)?.get_at_path(key)?;
        // A sub-tree is not a resolvable string.
        if value.is_object() {
            None
        } else {
            Some(value)
        }
    }

    fn substitute(&self, template: &str, params: &[(&str, &str)]) -> String {
        self.placeholder
            .replace_all(template, |caps: &regex::Captures<'_>| {
                match params.iter().find(|(name, _)| *name == &caps[1]) {
                    Some((_, value)) => (*value).to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

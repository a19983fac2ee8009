// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language manifest: which locales a project carries and which one is
//! the base (source of truth for keys).
//!
//! Projects can check in a `localekit.json` or `localekit.yaml` next to
//! their locale directory; without one, the built-in Mozambique language
//! set applies.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One declared language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSpec {
    pub code: String,
    pub name: String,
}

/// Where a manifest came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ManifestSource {
    #[default]
    Defaults,
    File(PathBuf),
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Declared language set plus the base language code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default = "default_base")]
    pub base: String,
    pub languages: Vec<LanguageSpec>,
    #[serde(skip)]
    source: ManifestSource,
}

fn default_base() -> String {
    "pt".to_string()
}

fn lang(code: &str, name: &str) -> LanguageSpec {
    LanguageSpec {
        code: code.to_string(),
        name: name.to_string(),
    }
}

impl Default for Manifest {
    /// Portuguese as base plus the languages spoken across Mozambique.
    fn default() -> Self {
        Manifest {
            base: default_base(),
            languages: vec![
                lang("pt", "Português"),
                lang("en", "English"),
                lang("ts", "Xitsonga"),
                lang("sw", "Swahili"),
                lang("sn", "Sena"),
                lang("nd", "Ndau"),
                lang("lomwe", "Lomwe"),
                lang("chuwabo", "Chuwabo"),
            ],
            source: ManifestSource::Defaults,
        }
    }
}

impl Manifest {
    /// Load a manifest.
    ///
    /// With an explicit path the file must exist and parse. Otherwise the
    /// conventional file names are probed in the working directory and
    /// the defaults apply when none is present.
    pub fn load(explicit: Option<&Path>) -> Result<Manifest> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                for name in ["localekit.json", "localekit.yaml", "localekit.yml"] {
                    let candidate = Path::new(name);
                    if candidate.exists() {
                        return Self::from_file(candidate);
                    }
                }
                Ok(Manifest::default())
            }
        }
    }

    /// Parse a manifest file, dispatching on extension (YAML or JSON).
    pub fn from_file(path: &Path) -> Result<Manifest> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let mut manifest: Manifest = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("parsing YAML manifest {}", path.display()))?,
            _ => serde_json::from_str(&raw)
                .with_context(|| format!("parsing JSON manifest {}", path.display()))?,
        };

        if manifest.languages.is_empty() {
            bail!("manifest {} declares no languages", path.display());
        }
        let mut seen = HashSet::new();
        for language in &manifest.languages {
            if !seen.insert(language.code.as_str()) {
                bail!(
                    "manifest {} declares language '{}' twice",
                    path.display(),
                    language.code
                );
            }
        }
        if !manifest.languages.iter().any(|l| l.code == manifest.base) {
            bail!(
                "manifest {} does not declare its base language '{}'",
                path.display(),
                manifest.base
            );
        }

        manifest.source = ManifestSource::File(path.to_path_buf());
        Ok(manifest)
    }

    #[must_use]
    pub fn source(&self) -> &ManifestSource {
        &self.source
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    /// Display name for a code, falling back to the code itself for
    /// languages outside the manifest.
    #[must_use]
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.name.as_str())
            .unwrap_or(code)
    }

    /// Declared codes in manifest order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.code.as_str())
    }
}

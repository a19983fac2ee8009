// SPDX-License-Identifier: PMPL-1.0-or-later

//! localekit: JSON translation-tree management and runtime lookup.
//!
//! One JSON file per language, a base language defining the canonical
//! key layout, and everything else derived from flattening, diffing and
//! merging those trees.
//!
//! ENGINE PILLARS:
//! 1. **Tree**: the dotted-key translation model every other module
//!    traverses (flatten, skeleton, diff, merge).
//! 2. **Resolver**: runtime lookup with language fallback and `{name}`
//!    parameter substitution; total, echoing the key as a last resort.
//! 3. **Audit**: completion and integrity reporting across a locale
//!    directory, rendered by the report module and enforced by
//!    `validate`.

pub mod audit;
pub mod diagnostics;
pub mod export;
pub mod import;
pub mod manifest;
pub mod provider;
pub mod report;
pub mod resolver;
pub mod scaffold;
pub mod store;
pub mod tree;

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Dotted-key translation tree model.
//!
//! A [`TranslationTree`] is the parsed form of one language's locale file:
//! a nested JSON object whose leaves are the translatable strings. Every
//! other part of the tool exchanges flat `(dotted path, value)` pairs with
//! this module instead of re-implementing the recursive walk.
//!
//! ## Design
//!
//! Keys are addressed by dotted paths (`"auth.sign_in"`). Any non-object
//! JSON value is a leaf; `null` is a leaf equivalent to the empty string.
//! Traversal follows the declaration order of the source file (the crate
//! enables serde_json's `preserve_order`), so flattening, skeletons and
//! exports all mirror the base file's layout.
//!
//! Shape invariant: a translation may legitimately be empty, but a key
//! present in the base language must never be absent from another
//! language's tree. [`TranslationTree::diff_missing`] reports violations;
//! [`TranslationTree::set_at_path`] refuses to invent intermediate nodes
//! so that corrupt files surface as errors instead of silently growing
//! new branches.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One language's translation strings as a nested key/value tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree(Map<String, Value>);

/// Structural failure while writing through a dotted path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// An intermediate segment does not exist in the tree.
    MissingNode { path: String, at: String },
    /// An intermediate segment exists but holds a leaf, not a sub-tree.
    NotATree { path: String, at: String },
    /// The dotted path was empty.
    EmptyPath,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNode { path, at } => {
                write!(f, "missing node '{at}' while setting '{path}'")
            }
            Self::NotATree { path, at } => {
                write!(f, "'{at}' is a leaf, not a sub-tree, while setting '{path}'")
            }
            Self::EmptyPath => write!(f, "empty dotted path"),
        }
    }
}

impl std::error::Error for PathError {}

/// Whether a leaf value counts as untranslated.
///
/// Empty string and `null` are untranslated; numbers, booleans and
/// non-empty strings are translated content.
pub fn is_empty_leaf(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Render a leaf as display text: strings verbatim, `null` as empty,
/// anything else via its JSON form.
pub fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl TranslationTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the tree, yielding the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Whether the tree holds no keys at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Depth-first iterator over every leaf as `(dotted path, value)`.
    ///
    /// Lazy and restartable; order is the declaration order of the source
    /// file, so repeated runs over the same tree are reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use localekit::tree::TranslationTree;
    ///
    /// let tree: TranslationTree =
    ///     serde_json::from_str(r#"{"auth":{"sign_in":"Entrar","sign_out":"Sair"}}"#).unwrap();
    /// let paths: Vec<String> = tree.flatten().map(|(path, _)| path).collect();
    /// assert_eq!(paths, vec!["auth.sign_in", "auth.sign_out"]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![(String::new(), self.0.iter())],
        }
    }

    /// A new tree with identical nesting but every leaf replaced by `""`.
    ///
    /// Used to scaffold a fresh locale file for a language with no
    /// translations yet. Does not mutate `self`.
    #[must_use]
    pub fn empty_skeleton(&self) -> TranslationTree {
        TranslationTree(skeleton_of(&self.0))
    }

    /// Look up the value at a dotted path.
    ///
    /// Returns `None` the moment any segment is absent, so callers can
    /// tell "translated as empty string" apart from "key does not exist".
    #[must_use]
    pub fn get_at_path(&self, path: &str) -> Option<&Value> {
        let mut map = Some(&self.0);
        let mut found: Option<&Value> = None;
        for segment in path.split('.') {
            let value = map?.get(segment)?;
            found = Some(value);
            map = value.as_object();
        }
        found
    }

    /// Assign `value` at a dotted path, mutating the tree in place.
    ///
    /// Every intermediate segment must already exist as a sub-tree; this
    /// never creates missing nodes. The final segment is inserted or
    /// replaced.
    pub fn set_at_path(&mut self, path: &str, value: impl Into<Value>) -> Result<(), PathError> {
        if path.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments
            .split_last()
            .expect("split on a non-empty string yields at least one segment");

        let mut map = &mut self.0;
        for (depth, segment) in parents.iter().enumerate() {
            let node = map.get_mut(*segment).ok_or_else(|| PathError::MissingNode {
                path: path.to_string(),
                at: segments[..=depth].join("."),
            })?;
            map = node.as_object_mut().ok_or_else(|| PathError::NotATree {
                path: path.to_string(),
                at: segments[..=depth].join("."),
            })?;
        }
        map.insert((*last).to_string(), value.into());
        Ok(())
    }

    /// Total number of leaf positions.
    #[must_use]
    pub fn count_leaves(&self) -> usize {
        self.flatten().count()
    }

    /// Number of leaves carrying actual content (not empty, not null).
    #[must_use]
    pub fn count_translated(&self) -> usize {
        self.flatten().filter(|(_, v)| !is_empty_leaf(v)).count()
    }

    /// Leaf paths in this tree whose value is empty or null.
    #[must_use]
    pub fn empty_keys(&self) -> Vec<String> {
        self.flatten()
            .filter(|(_, value)| is_empty_leaf(value))
            .map(|(path, _)| path)
            .collect()
    }

    /// Every base leaf path that is absent from, or present-but-empty in,
    /// this tree.
    ///
    /// The check is structural: when a whole base sub-tree is missing (or
    /// occupied by a leaf), all of that sub-tree's leaf paths are
    /// reported, not just the top key.
    ///
    /// # Examples
    ///
    /// ```
    /// use localekit::tree::TranslationTree;
    ///
    /// let base: TranslationTree =
    ///     serde_json::from_str(r#"{"a":{"b":"x","c":"y"}}"#).unwrap();
    /// let candidate = TranslationTree::new();
    /// assert_eq!(candidate.diff_missing(&base), vec!["a.b", "a.c"]);
    /// ```
    #[must_use]
    pub fn diff_missing(&self, base: &TranslationTree) -> Vec<String> {
        let mut missing = Vec::new();
        diff_maps(Some(&self.0), &base.0, "", &mut missing);
        missing
    }

    /// Copy every non-empty leaf of `source` into the matching leaf
    /// position of `self`.
    ///
    /// Positions that do not exist in `self`, or whose kinds disagree
    /// (leaf vs sub-tree), are left untouched, so the receiving shape is
    /// preserved. Typically called on a fresh base skeleton to pull an
    /// existing partial translation onto the canonical layout.
    pub fn merge_leaves(&mut self, source: &TranslationTree) {
        merge_maps(&mut self.0, &source.0);
    }
}

/// Depth-first leaf iterator produced by [`TranslationTree::flatten`].
pub struct Leaves<'a> {
    stack: Vec<(String, serde_json::map::Iter<'a>)>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (prefix, iter) = self.stack.last_mut()?;
            match iter.next() {
                None => {
                    self.stack.pop();
                }
                Some((key, value)) => {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    match value {
                        Value::Object(child) => self.stack.push((path, child.iter())),
                        leaf => return Some((path, leaf)),
                    }
                }
            }
        }
    }
}

fn skeleton_of(map: &Map<String, Value>) -> Map<String, Value> {
    let mut blank = Map::new();
    for (key, value) in map {
        let replacement = match value {
            Value::Object(child) => Value::Object(skeleton_of(child)),
            _ => Value::String(String::new()),
        };
        blank.insert(key.clone(), replacement);
    }
    blank
}

fn diff_maps(
    candidate: Option<&Map<String, Value>>,
    base: &Map<String, Value>,
    prefix: &str,
    missing: &mut Vec<String>,
) {
    for (key, base_value) in base {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match base_value {
            Value::Object(base_child) => {
                // A leaf sitting where the base has a sub-tree counts as
                // an absent sub-tree.
                let candidate_child = candidate.and_then(|m| m.get(key)).and_then(Value::as_object);
                diff_maps(candidate_child, base_child, &path, missing);
            }
            _ => {
                let untranslated = match candidate.and_then(|m| m.get(key)) {
                    None => true,
                    Some(value) => is_empty_leaf(value),
                };
                if untranslated {
                    missing.push(path);
                }
            }
        }
    }
}

fn merge_maps(dest: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        match (dest.get_mut(key), incoming) {
            (Some(Value::Object(dest_child)), Value::Object(source_child)) => {
                merge_maps(dest_child, source_child);
            }
            (Some(slot), leaf) => {
                if !slot.is_object() && !leaf.is_object() && !is_empty_leaf(leaf) {
                    *slot = leaf.clone();
                }
            }
            (None, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TranslationTree {
        serde_json::from_str(
            r#"{
                "auth": {
                    "sign_in": "Iniciar Sessão",
                    "sign_out": "Terminar Sessão",
                    "pending": ""
                },
                "common": {
                    "save": "Hifadhi",
                    "notes": null
                },
                "title": "Portal"
            }"#,
        )
        .expect("sample tree should parse")
    }

    #[test]
    fn flatten_follows_declaration_order() {
        let paths: Vec<String> = sample().flatten().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec![
                "auth.sign_in",
                "auth.sign_out",
                "auth.pending",
                "common.save",
                "common.notes",
                "title",
            ]
        );
    }

    #[test]
    fn flatten_treats_null_as_leaf() {
        let tree = sample();
        let (_, value) = tree
            .flatten()
            .find(|(p, _)| p == "common.notes")
            .expect("null leaf should be yielded");
        assert!(value.is_null());
        assert!(is_empty_leaf(value));
    }

    #[test]
    fn flatten_is_restartable() {
        let tree = sample();
        let first: Vec<String> = tree.flatten().map(|(p, _)| p).collect();
        let second: Vec<String> = tree.flatten().map(|(p, _)| p).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn skeleton_blanks_every_leaf_and_keeps_shape() {
        let tree = sample();
        let skeleton = tree.empty_skeleton();
        let original: Vec<String> = tree.flatten().map(|(p, _)| p).collect();
        let blanked: Vec<(String, &Value)> = skeleton.flatten().collect();

        let skeleton_paths: Vec<&String> = blanked.iter().map(|(p, _)| p).collect();
        assert_eq!(original.iter().collect::<Vec<_>>(), skeleton_paths);
        for (path, value) in &blanked {
            assert_eq!(
                value.as_str(),
                Some(""),
                "skeleton leaf '{path}' should be an empty string"
            );
        }
        // Pure: the source keeps its content.
        assert_eq!(
            tree.get_at_path("auth.sign_in").and_then(Value::as_str),
            Some("Iniciar Sessão")
        );
    }

    #[test]
    fn get_distinguishes_empty_from_absent() {
        let tree = sample();
        assert_eq!(
            tree.get_at_path("auth.pending").and_then(Value::as_str),
            Some("")
        );
        assert!(tree.get_at_path("auth.unknown").is_none());
        assert!(tree.get_at_path("auth.sign_in.deeper").is_none());
    }

    #[test]
    fn get_at_path_resolves_sub_trees_too() {
        let tree = sample();
        let node = tree.get_at_path("auth").expect("auth should resolve");
        assert!(node.is_object());
    }

    #[test]
    fn set_at_path_rejects_missing_intermediates() {
        let mut tree = sample();
        let err = tree
            .set_at_path("nowhere.key", "value")
            .expect_err("missing intermediate should error");
        assert_eq!(
            err,
            PathError::MissingNode {
                path: "nowhere.key".into(),
                at: "nowhere".into(),
            }
        );
    }

    #[test]
    fn set_at_path_rejects_leaf_intermediates() {
        let mut tree = sample();
        let err = tree
            .set_at_path("title.sub", "value")
            .expect_err("leaf intermediate should error");
        assert_eq!(
            err,
            PathError::NotATree {
                path: "title.sub".into(),
                at: "title".into(),
            }
        );
    }

    #[test]
    fn set_at_path_rejects_empty_path() {
        let mut tree = sample();
        assert_eq!(tree.set_at_path("", "x"), Err(PathError::EmptyPath));
    }

    #[test]
    fn set_at_path_writes_existing_branch() {
        let mut tree = sample();
        tree.set_at_path("auth.pending", "Pendente")
            .expect("existing branch should accept writes");
        assert_eq!(
            tree.get_at_path("auth.pending").and_then(Value::as_str),
            Some("Pendente")
        );
    }

    #[test]
    fn counts_match_flatten() {
        let tree = sample();
        assert_eq!(tree.count_leaves(), tree.flatten().count());
        assert_eq!(tree.count_leaves(), 6);
        // "auth.pending" and "common.notes" are untranslated.
        assert_eq!(tree.count_translated(), 4);
    }

    #[test]
    fn empty_keys_lists_blank_and_null() {
        assert_eq!(sample().empty_keys(), vec!["auth.pending", "common.notes"]);
    }

    #[test]
    fn diff_against_self_is_clean_for_translated_leaves() {
        let full: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":"x"},"c":"y"}"#).expect("tree should parse");
        assert!(full.diff_missing(&full).is_empty());
    }

    #[test]
    fn diff_reports_present_but_empty() {
        let base: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":"x"}}"#).expect("base should parse");
        let candidate: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":""}}"#).expect("candidate should parse");
        assert_eq!(candidate.diff_missing(&base), vec!["a.b"]);
    }

    #[test]
    fn diff_expands_absent_sub_trees_to_leaf_paths() {
        let base: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":"x","c":"y"},"d":"z"}"#).expect("base should parse");
        let candidate: TranslationTree =
            serde_json::from_str(r#"{"d":"w"}"#).expect("candidate should parse");
        assert_eq!(candidate.diff_missing(&base), vec!["a.b", "a.c"]);
    }

    #[test]
    fn diff_treats_leaf_at_sub_tree_position_as_absent() {
        let base: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":"x","c":"y"}}"#).expect("base should parse");
        let candidate: TranslationTree =
            serde_json::from_str(r#"{"a":"oops"}"#).expect("candidate should parse");
        assert_eq!(candidate.diff_missing(&base), vec!["a.b", "a.c"]);
    }

    #[test]
    fn merge_copies_only_non_empty_leaves_into_existing_positions() {
        let base: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":"x","c":"y"},"d":"z"}"#).expect("base should parse");
        let partial: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":"translated","c":""},"stray":"ignored"}"#)
                .expect("partial should parse");

        let mut skeleton = base.empty_skeleton();
        skeleton.merge_leaves(&partial);

        assert_eq!(
            skeleton.get_at_path("a.b").and_then(Value::as_str),
            Some("translated")
        );
        assert_eq!(skeleton.get_at_path("a.c").and_then(Value::as_str), Some(""));
        assert_eq!(skeleton.get_at_path("d").and_then(Value::as_str), Some(""));
        assert!(skeleton.get_at_path("stray").is_none());
    }

    #[test]
    fn merge_never_replaces_a_sub_tree_with_a_leaf() {
        let mut dest: TranslationTree =
            serde_json::from_str(r#"{"a":{"b":"x"}}"#).expect("dest should parse");
        let source: TranslationTree =
            serde_json::from_str(r#"{"a":"flat"}"#).expect("source should parse");
        dest.merge_leaves(&source);
        assert!(dest.get_at_path("a").map(Value::is_object).unwrap_or(false));
    }

    #[test]
    fn leaf_text_renders_scalars() {
        assert_eq!(leaf_text(&Value::String("Olá".into())), "Olá");
        assert_eq!(leaf_text(&Value::Null), "");
        assert_eq!(leaf_text(&serde_json::json!(42)), "42");
        assert_eq!(leaf_text(&serde_json::json!(true)), "true");
    }
}

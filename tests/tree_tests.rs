// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the translation tree model (flatten, skeleton, paths, diff)

use localekit::tree::{PathError, TranslationTree};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn fixture_tree(name: &str) -> TranslationTree {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(format!("testdata/locales/{name}.json"));
    let raw = fs::read_to_string(&path).expect("fixture should be readable");
    serde_json::from_str(&raw).expect("fixture should parse")
}

#[test]
fn test_skeleton_has_identical_paths_and_blank_leaves() {
    let base = fixture_tree("pt");
    let skeleton = base.empty_skeleton();

    let base_paths: Vec<String> = base.flatten().map(|(p, _)| p).collect();
    let skeleton_paths: Vec<String> = skeleton.flatten().map(|(p, _)| p).collect();
    assert_eq!(
        base_paths, skeleton_paths,
        "skeleton must mirror the base path set in the same order"
    );

    for (path, value) in skeleton.flatten() {
        assert_eq!(
            value.as_str(),
            Some(""),
            "skeleton leaf '{path}' should be empty"
        );
    }
}

#[test]
fn test_set_then_get_round_trips_every_base_path() {
    let base = fixture_tree("pt");
    let mut work = base.empty_skeleton();

    for (path, _) in base.flatten() {
        let marker = format!("value at {path}");
        work.set_at_path(&path, marker.clone())
            .expect("skeleton paths should accept writes");
        assert_eq!(
            work.get_at_path(&path).and_then(Value::as_str),
            Some(marker.as_str())
        );
    }
    assert_eq!(work.count_translated(), base.count_leaves());
}

#[test]
fn test_count_leaves_equals_flatten_length() {
    for name in ["pt", "en", "sw"] {
        let tree = fixture_tree(name);
        assert_eq!(
            tree.count_leaves(),
            tree.flatten().count(),
            "count_leaves and flatten disagree for {name}"
        );
    }
    assert_eq!(fixture_tree("pt").count_leaves(), 14);
}

#[test]
fn test_fully_translated_tree_diffs_clean_against_itself() {
    let base = fixture_tree("pt");
    assert!(base.diff_missing(&base).is_empty());
    let en = fixture_tree("en");
    assert!(en.diff_missing(&base).is_empty());
}

#[test]
fn test_missing_sub_tree_reports_every_leaf_path() {
    let base: TranslationTree =
        serde_json::from_str(r#"{"a":{"b":"x","c":"y"}}"#).expect("base should parse");
    let empty = TranslationTree::new();
    assert_eq!(empty.diff_missing(&base), vec!["a.b", "a.c"]);
}

#[test]
fn test_diff_lists_missing_in_base_declaration_order() {
    let base = fixture_tree("pt");
    let sw = fixture_tree("sw");
    assert_eq!(
        sw.diff_missing(&base),
        vec![
            "app.tagline",
            "auth.forgot_password",
            "common.search",
            "common.loading",
            "dashboard.pending_requests",
            "errors.not_found",
            "errors.server",
        ]
    );
}

#[test]
fn test_empty_leaf_is_present_for_get_but_missing_for_diff() {
    let sw = fixture_tree("sw");
    // Present as a deliberate empty string.
    assert_eq!(
        sw.get_at_path("common.search").and_then(Value::as_str),
        Some("")
    );
    // Entirely absent.
    assert!(sw.get_at_path("errors.not_found").is_none());
}

#[test]
fn test_set_at_path_never_creates_intermediates() {
    let mut sw = fixture_tree("sw");
    let err = sw
        .set_at_path("errors.not_found", "Ukurasa haukupatikana")
        .expect_err("absent intermediate must be an error");
    assert!(matches!(err, PathError::MissingNode { .. }));
    // The failed write must not have grown the tree.
    assert!(sw.get_at_path("errors").is_none());
}

#[test]
fn test_flatten_iterates_lazily_and_restarts() {
    let tree = fixture_tree("pt");
    let mut leaves = tree.flatten();
    let first = leaves.next().expect("tree has leaves");
    assert_eq!(first.0, "app.name");

    // A fresh call starts over instead of resuming.
    let again: Vec<String> = tree.flatten().map(|(p, _)| p).collect();
    assert_eq!(again.first().map(String::as_str), Some("app.name"));
    assert_eq!(again.len(), 14);
}

#[test]
fn test_merge_pulls_partial_translation_onto_base_shape() {
    let base = fixture_tree("pt");
    let sw = fixture_tree("sw");

    let mut normalized = base.empty_skeleton();
    normalized.merge_leaves(&sw);

    // Same shape as the base even though sw lacks the errors sub-tree.
    let paths: Vec<String> = normalized.flatten().map(|(p, _)| p).collect();
    let base_paths: Vec<String> = base.flatten().map(|(p, _)| p).collect();
    assert_eq!(paths, base_paths);

    assert_eq!(
        normalized.get_at_path("auth.sign_in").and_then(Value::as_str),
        Some("Ingia")
    );
    assert_eq!(
        normalized
            .get_at_path("errors.not_found")
            .and_then(Value::as_str),
        Some("")
    );
    assert_eq!(normalized.count_translated(), sw.count_translated());
}

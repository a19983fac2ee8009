// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the audit pass (completion, missing keys, report output)

use localekit::audit::{self, AuditReport};
use localekit::manifest::Manifest;
use localekit::report::{write_report, ReportFormat};
use localekit::store::LocaleStore;
use std::path::Path;
use tempfile::TempDir;

fn fixture_audit() -> AuditReport {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/locales");
    let store = LocaleStore::new(&dir);
    let registry = store
        .load_registry(&Manifest::default())
        .expect("fixture registry should load");
    audit::audit_registry(&registry, "pt", &dir).expect("audit should succeed")
}

#[test]
fn test_audit_totals_come_from_the_base() {
    let report = fixture_audit();
    assert_eq!(report.base_code, "pt");
    assert_eq!(report.base_total, 14);
    assert_eq!(report.languages.len(), 3);
    assert!(!report.created_at.is_empty());
}

#[test]
fn test_base_and_complete_languages_are_clean() {
    let report = fixture_audit();
    let pt = &report.languages[0];
    assert_eq!(pt.code, "pt");
    assert!(pt.missing.is_empty());
    assert!(pt.empty.is_empty());

    let en = &report.languages[1];
    assert_eq!(en.code, "en");
    assert!(en.is_complete());
    assert_eq!(en.stats.translated, 14);
    assert!((en.stats.percent - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_partial_language_stats_and_listings() {
    let report = fixture_audit();
    let sw = report
        .languages
        .iter()
        .find(|l| l.code == "sw")
        .expect("sw should be audited");

    assert_eq!(sw.stats.translated, 7);
    assert_eq!(sw.stats.total, 14);
    assert!((sw.stats.percent - 50.0).abs() < f64::EPSILON);

    assert_eq!(
        sw.empty,
        vec![
            "app.tagline",
            "auth.forgot_password",
            "common.search",
            "common.loading",
            "dashboard.pending_requests",
        ]
    );
    assert_eq!(sw.missing.len(), 7);
    assert!(sw.missing.contains(&"errors.server".to_string()));
}

#[test]
fn test_summary_counters() {
    let report = fixture_audit();
    assert!(report.has_missing());
    assert_eq!(report.incomplete_languages(), 1);
    assert_eq!(report.total_missing(), 7);
}

#[test]
fn test_report_serializes_to_json_and_yaml() {
    let report = fixture_audit();
    let dir = TempDir::new().expect("temp dir");

    let json_path = dir.path().join("audit.json");
    write_report(&report, ReportFormat::Json, &json_path).expect("json write should succeed");
    let raw = std::fs::read_to_string(&json_path).expect("json should be readable");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("report should be JSON");
    assert_eq!(parsed["base_code"], "pt");
    assert_eq!(parsed["base_total"], 14);
    assert!(parsed["languages"].is_array());

    let yaml_path = dir.path().join("audit.yaml");
    write_report(&report, ReportFormat::Yaml, &yaml_path).expect("yaml write should succeed");
    let raw = std::fs::read_to_string(&yaml_path).expect("yaml should be readable");
    assert!(raw.contains("base_code: pt"));

    // The persisted report reads back into the same shape.
    let restored: AuditReport =
        serde_json::from_str(&std::fs::read_to_string(&json_path).expect("reread json"))
            .expect("report should deserialize");
    assert_eq!(restored.base_total, report.base_total);
    assert_eq!(restored.languages.len(), report.languages.len());
}

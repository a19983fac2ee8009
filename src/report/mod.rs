// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report rendering and persistence module

pub mod formatter;
pub mod output;

use crate::audit::AuditReport;
use crate::export::ExportSummary;
use crate::import::ImportOutcome;
use crate::provider::FillOutcome;
use crate::resolver::LanguageInfo;
use crate::scaffold::ScaffoldOutcome;

pub use formatter::ReportFormatter;
pub use output::{resolve_report_path, write_report, ReportFormat};

/// Print the completion table to the console
pub fn print_stats(report: &AuditReport) {
    ReportFormatter::new().print_stats(report);
}

/// Print per-language validation results
pub fn print_validation(report: &AuditReport) {
    ReportFormatter::new().print_validation(report);
}

/// Print the per-language untranslated key listing
pub fn print_untranslated(report: &AuditReport) {
    ReportFormatter::new().print_untranslated(report);
}

/// Print the loaded language table
pub fn print_languages(languages: &[LanguageInfo], base_code: &str) {
    ReportFormatter::new().print_languages(languages, base_code);
}

/// Print what a scaffold run created and skipped
pub fn print_scaffold(outcome: &ScaffoldOutcome) {
    ReportFormatter::new().print_scaffold(outcome);
}

/// Print the export artifact summary
pub fn print_export(summary: &ExportSummary) {
    ReportFormatter::new().print_export(summary);
}

/// Print per-file import results
pub fn print_import(outcome: &ImportOutcome) {
    ReportFormatter::new().print_import(outcome);
}

/// Print fill-run counters
pub fn print_fill(outcome: &FillOutcome, providers: &[&str]) {
    ReportFormatter::new().print_fill(outcome, providers);
}

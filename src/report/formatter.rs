// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering for audit results and run summaries

use crate::audit::AuditReport;
use crate::export::ExportSummary;
use crate::import::ImportOutcome;
use crate::provider::FillOutcome;
use crate::resolver::LanguageInfo;
use crate::scaffold::ScaffoldOutcome;
use colored::*;

const BAR_WIDTH: usize = 20;
const MISSING_PREVIEW: usize = 10;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_stats(&self, report: &AuditReport) {
        println!("\n{}", "=== TRANSLATION COMPLETION ===".bold().cyan());
        println!();
        println!("  Locales: {}", report.locales_dir.display());
        println!(
            "  Base: {} ({} keys)",
            report.base_code.bold(),
            report.base_total
        );
        println!();

        for lang in &report.languages {
            let percent = lang.stats.percent;
            let percent_label = format!("{percent:.1}%")
                .color(completion_color(percent))
                .bold();
            println!("  {} ({})", lang.display_name.bold(), lang.code);
            println!("    {} {}", progress_bar(percent), percent_label);
            println!(
                "    Translated: {}/{}   Empty: {}   Missing: {}",
                lang.stats.translated,
                lang.stats.total,
                lang.empty.len(),
                lang.missing.len()
            );
            println!();
        }
    }

    pub fn print_validation(&self, report: &AuditReport) {
        println!("\n{}", "=== TRANSLATION VALIDATION ===".bold().cyan());
        println!();
        println!(
            "  Base: {} ({} keys, {})",
            report.base_code.bold(),
            report.base_total,
            report.locales_dir.display()
        );
        println!();

        for lang in report.candidates() {
            let status = if lang.is_complete() {
                "COMPLETE".green()
            } else {
                "INCOMPLETE".red()
            };
            println!("  {} ({}): {}", lang.display_name.bold(), lang.code, status);

            if !lang.missing.is_empty() {
                for path in lang.missing.iter().take(MISSING_PREVIEW) {
                    println!("    - {}", path.dimmed());
                }
                if lang.missing.len() > MISSING_PREVIEW {
                    println!("    ... and {} more", lang.missing.len() - MISSING_PREVIEW);
                }
            }
        }

        println!();
        if report.has_missing() {
            println!(
                "  {} {} language(s) incomplete, {} key(s) missing",
                "FAIL".red().bold(),
                report.incomplete_languages(),
                report.total_missing()
            );
        } else {
            println!("  {} all languages complete", "PASS".green().bold());
        }
    }

    pub fn print_untranslated(&self, report: &AuditReport) {
        println!("\n{}", "=== UNTRANSLATED KEYS ===".bold().cyan());

        let mut total = 0;
        for lang in &report.languages {
            if lang.empty.is_empty() {
                continue;
            }
            total += lang.empty.len();
            println!(
                "\n  {} ({}): {}",
                lang.display_name.bold(),
                lang.code,
                lang.empty.len().to_string().red().bold()
            );
            for path in &lang.empty {
                println!("    - {}", path.dimmed());
            }
        }

        println!();
        if total == 0 {
            println!("  {}", "No untranslated keys in any language".green());
        } else {
            println!("  Total: {}", total.to_string().red().bold());
        }
    }

    pub fn print_languages(&self, languages: &[LanguageInfo], base_code: &str) {
        println!("\n{}", "=== AVAILABLE LANGUAGES ===".bold().cyan());
        println!();
        for info in languages {
            if info.code == base_code {
                println!("  {} - {} {}", info.code.bold(), info.name, "(base)".cyan());
            } else {
                println!("  {} - {}", info.code.bold(), info.name);
            }
        }
        println!("\n  Total: {}", languages.len());
    }

    pub fn print_scaffold(&self, outcome: &ScaffoldOutcome) {
        println!("\n{}", "=== LOCALE SCAFFOLD ===".bold().cyan());
        println!();
        println!("  Base: {}", outcome.base_code.bold());
        for code in &outcome.created {
            println!("  {} {}.json", "created".green(), code);
        }
        for code in &outcome.skipped {
            println!("  {} {}.json (already exists)", "skipped".dimmed(), code);
        }
        println!(
            "\n  {} created, {} skipped",
            outcome.created.len(),
            outcome.skipped.len()
        );
        if !outcome.skipped.is_empty() {
            println!("  {}", "Use --force to overwrite existing files".yellow());
        }
    }

    pub fn print_export(&self, summary: &ExportSummary) {
        println!("\n{}", "=== EXPORT ===".bold().cyan());
        println!();
        println!("  Directory: {}", summary.out_dir.display());
        println!("  Locale files copied: {}", summary.copied.len());
        println!("  Bundle: {}", summary.bundle_path.display());
        match &summary.csv_path {
            Some(path) => println!("  CSV: {} ({} keys)", path.display(), summary.keys),
            None => println!("  {}", "CSV skipped: no base locale file".yellow()),
        }
    }

    pub fn print_import(&self, outcome: &ImportOutcome) {
        println!("\n{}", "=== IMPORT ===".bold().cyan());
        println!();
        for code in &outcome.imported {
            println!("  {} {}", "imported".green(), code);
        }
        for failure in &outcome.failed {
            println!(
                "  {} {}: {}",
                "failed".red().bold(),
                failure.file,
                failure.error
            );
        }
        println!(
            "\n  Imported: {}  Failed: {}",
            outcome.imported.len().to_string().green(),
            if outcome.failed.is_empty() {
                "0".normal()
            } else {
                outcome.failed.len().to_string().red().bold()
            }
        );
    }

    pub fn print_fill(&self, outcome: &FillOutcome, providers: &[&str]) {
        println!("\n{}", "=== FILL ===".bold().cyan());
        println!();
        println!("  Language: {}", outcome.lang.bold());
        if providers.is_empty() {
            println!("  Providers: {}", "none configured".yellow());
        } else {
            println!("  Providers: {}", providers.join(", "));
        }
        println!("  Already translated: {}/{}", outcome.already, outcome.total);
        println!(
            "  Filled this run: {}",
            outcome.filled.to_string().green().bold()
        );
        let remaining = outcome.remaining();
        if remaining > 0 {
            println!("  Still missing: {}", remaining.to_string().red().bold());
        } else {
            println!("  Still missing: {}", "0".green());
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn completion_color(percent: f64) -> &'static str {
    if percent >= 80.0 {
        "green"
    } else if percent >= 50.0 {
        "yellow"
    } else {
        "red"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "░".repeat(20)));
        assert_eq!(progress_bar(100.0), format!("[{}]", "█".repeat(20)));
        // Over-translated languages can pass 100 percent.
        assert_eq!(progress_bar(140.0), format!("[{}]", "█".repeat(20)));
    }

    #[test]
    fn progress_bar_rounds_to_nearest_segment() {
        let bar = progress_bar(50.0);
        assert_eq!(bar, format!("[{}{}]", "█".repeat(10), "░".repeat(10)));
        let bar = progress_bar(72.0);
        // 72% of 20 segments is 14.4, rounded to 14.
        assert_eq!(bar, format!("[{}{}]", "█".repeat(14), "░".repeat(6)));
    }

    #[test]
    fn completion_color_thresholds() {
        assert_eq!(completion_color(95.0), "green");
        assert_eq!(completion_color(80.0), "green");
        assert_eq!(completion_color(79.9), "yellow");
        assert_eq!(completion_color(50.0), "yellow");
        assert_eq!(completion_color(10.0), "red");
    }
}

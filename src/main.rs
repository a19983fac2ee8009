// SPDX-License-Identifier: PMPL-1.0-or-later

//! localekit: locale file management and runtime lookup for JSON
//! translation trees
//!
//! A tool for keeping a directory of per-language JSON locale files
//! consistent with a base language: scaffolding, validation, statistics,
//! translator hand-off (export/import), offline glossary filling, and a
//! command-line view of the runtime resolver.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use localekit::manifest::Manifest;
use localekit::provider::{fill_tree, GlossaryProvider, ProviderChain};
use localekit::report::{self, ReportFormat};
use localekit::resolver::Translator;
use localekit::store::LocaleStore;
use localekit::tree::TranslationTree;
use localekit::{audit, diagnostics, export, import, scaffold};

#[derive(Parser)]
#[command(name = "localekit")]
#[command(version = "1.0.2")]
#[command(about = "Locale file management and runtime lookup for JSON translation trees")]
#[command(long_about = None)]
struct Cli {
    /// Locale directory holding one <code>.json file per language
    #[arg(long, default_value = "locales", global = true)]
    locales: PathBuf,

    /// Manifest file (JSON or YAML); without it, localekit.json/.yaml in
    /// the working directory or the built-in defaults apply
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an empty skeleton file for every manifest language without one
    Generate {
        /// Overwrite existing files (their translations are lost)
        #[arg(long)]
        force: bool,
    },

    /// Check every language against the base; missing keys fail the run
    Validate {
        /// Write the structured audit report to this path (a directory
        /// target gets a timestamped file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report serialization format
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
    },

    /// Completion statistics for every language
    Stats {
        /// Write the structured audit report to this path (a directory
        /// target gets a timestamped file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report serialization format
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
    },

    /// List keys whose value is still empty, per language
    Untranslated,

    /// Copy locale files, a combined bundle and a CSV into a directory
    Export {
        /// Export directory
        #[arg(long, default_value = "exports")]
        out_dir: PathBuf,
    },

    /// Ingest locale JSON files delivered by translators
    Import {
        /// Directory holding the delivered files (scanned recursively)
        #[arg(long, default_value = "imports")]
        from: PathBuf,
    },

    /// Fill untranslated keys of one language from glossary files
    Fill {
        /// Target language code
        #[arg(value_name = "LANG")]
        lang: String,

        /// Glossary JSON files mapping base text to translations,
        /// consulted in the order given
        #[arg(short, long, value_name = "FILE")]
        glossary: Vec<PathBuf>,
    },

    /// Resolve one key the way an application would at runtime
    Lookup {
        /// Dotted key, e.g. auth.sign_in
        #[arg(value_name = "KEY")]
        key: String,

        /// Language to resolve in (defaults to the base language)
        #[arg(short, long)]
        lang: Option<String>,

        /// Parameter substitution as name=value (repeatable)
        #[arg(short, long, value_name = "NAME=VALUE")]
        param: Vec<String>,
    },

    /// List loaded languages with their display names
    Languages,

    /// Self-diagnostics for the locale directory and manifest
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let manifest = Manifest::load(cli.manifest.as_deref())?;
    let store = LocaleStore::new(&cli.locales);

    match cli.command {
        Commands::Generate { force } => {
            println!("Scaffolding locale files in: {}", store.dir().display());
            let outcome = scaffold::generate(&store, &manifest, force)?;
            report::print_scaffold(&outcome);
        }

        Commands::Validate { output, format } => {
            let registry = store.load_registry(&manifest)?;
            let audit = audit::audit_registry(&registry, &manifest.base, store.dir())?;
            report::print_validation(&audit);

            if let Some(target) = output {
                let path = report::resolve_report_path(&target, format);
                report::write_report(&audit, format, &path)?;
                println!("Report saved to: {}", path.display());
            }
            if audit.has_missing() {
                bail!(
                    "{} language(s) have missing translations",
                    audit.incomplete_languages()
                );
            }
        }

        Commands::Stats { output, format } => {
            let registry = store.load_registry(&manifest)?;
            let audit = audit::audit_registry(&registry, &manifest.base, store.dir())?;
            report::print_stats(&audit);

            if let Some(target) = output {
                let path = report::resolve_report_path(&target, format);
                report::write_report(&audit, format, &path)?;
                println!("Report saved to: {}", path.display());
            }
        }

        Commands::Untranslated => {
            let registry = store.load_registry(&manifest)?;
            let audit = audit::audit_registry(&registry, &manifest.base, store.dir())?;
            report::print_untranslated(&audit);
        }

        Commands::Export { out_dir } => {
            println!("Exporting locales to: {}", out_dir.display());
            let summary = export::export_all(&store, &manifest, &out_dir)?;
            report::print_export(&summary);
        }

        Commands::Import { from } => {
            println!("Importing locale files from: {}", from.display());
            let outcome = import::import_dir(&store, &from)?;
            report::print_import(&outcome);
        }

        Commands::Fill { lang, glossary } => {
            if lang == manifest.base {
                bail!("refusing to fill the base language '{lang}'");
            }
            println!(
                "Filling '{}' from {} glossary file(s)",
                lang,
                glossary.len()
            );

            let base = store.load(&manifest.base)?;
            let existing = if store.exists(&lang) {
                store.load(&lang)?
            } else {
                TranslationTree::new()
            };

            let mut chain = ProviderChain::new();
            for path in &glossary {
                let provider = GlossaryProvider::from_file(path, &lang)?;
                println!(
                    "  loaded {} ({} entries)",
                    path.display(),
                    provider.len()
                );
                chain.push(Box::new(provider));
            }

            let outcome = fill_tree(&base, &existing, &lang, &chain)?;
            store.save(&lang, &outcome.tree)?;
            let names = chain.names();
            report::print_fill(&outcome, &names);
        }

        Commands::Lookup { key, lang, param } => {
            let registry = store.load_registry(&manifest)?;
            if registry.is_empty() {
                bail!("no locale files found in {}", store.dir().display());
            }

            let mut translator = Translator::new(registry, manifest.base.clone());
            if let Some(code) = lang {
                if !translator.set_language(&code) {
                    eprintln!(
                        "{}",
                        format!(
                            "unknown language '{}', staying on '{}'",
                            code,
                            translator.current_language()
                        )
                        .yellow()
                    );
                }
            }

            let params = parse_params(&param)?;
            let pairs: Vec<(&str, &str)> = params
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            println!("{}", translator.translate(&key, &pairs));
        }

        Commands::Languages => {
            let registry = store.load_registry(&manifest)?;
            let languages = registry.languages();
            report::print_languages(&languages, &manifest.base);
        }

        Commands::Doctor => {
            diagnostics::run_self_diagnostics(&store, &manifest)?;
        }
    }

    Ok(())
}

fn parse_params(raw: &[String]) -> Result<Vec<(String, String)>> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("invalid --param '{entry}' (expected name=value)"))
        })
        .collect()
}

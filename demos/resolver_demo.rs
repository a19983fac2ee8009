// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedding demo: load a locale folder and resolve keys through the
//! runtime translator.

use clap::Parser;
use localekit::manifest::Manifest;
use localekit::resolver::Translator;
use localekit::store::LocaleStore;

#[derive(Parser, Debug)]
#[command(name = "resolver-demo")]
struct Args {
    /// Folder holding one <code>.json file per language
    #[arg(long, default_value = "testdata/locales")]
    locales: String,

    /// Language to resolve in
    #[arg(long, default_value = "sw")]
    language: String,

    /// Interpolation parameter as name=value (repeatable)
    #[arg(long = "param")]
    params: Vec<String>,

    /// Keys to resolve; a small showcase set when omitted
    keys: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let manifest = Manifest::default();
    let store = LocaleStore::new(&args.locales);
    let registry = match store.load_registry(&manifest) {
        Ok(registry) => registry,
        Err(err) => {
            eprintln!("Failed to load locales from {}: {:#}", args.locales, err);
            std::process::exit(1);
        }
    };
    if registry.is_empty() {
        eprintln!("No locale files found in {}", args.locales);
        std::process::exit(1);
    }

    let mut translator = Translator::new(registry, manifest.base.clone());
    if !translator.set_language(&args.language) {
        eprintln!(
            "Unknown language '{}', staying on '{}'",
            args.language,
            translator.current_language()
        );
    }

    let params = parse_params(&args.params);
    let pairs: Vec<(&str, &str)> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    let keys = if args.keys.is_empty() {
        showcase_keys()
    } else {
        args.keys.clone()
    };

    println!(
        "Resolving in '{}' (fallback '{}'):",
        translator.current_language(),
        translator.fallback_language()
    );
    for key in &keys {
        println!("  {} = {}", key, translator.translate(key, &pairs));
    }
}

fn parse_params(raw: &[String]) -> Vec<(String, String)> {
    let mut params = Vec::new();
    for entry in raw {
        match entry.split_once('=') {
            Some((name, value)) => params.push((name.to_string(), value.to_string())),
            None => {
                eprintln!("Bad --param '{}', expected name=value", entry);
                std::process::exit(2);
            }
        }
    }
    params
}

fn showcase_keys() -> Vec<String> {
    ["app.name", "dashboard.welcome", "errors.not_found"]
        .iter()
        .map(|key| (*key).to_string())
        .collect()
}

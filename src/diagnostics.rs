use crate::manifest::Manifest;
use crate::store::LocaleStore;
use anyhow::{anyhow, Result};
use std::path::Path;

pub fn run_self_diagnostics(store: &LocaleStore, manifest: &Manifest) -> Result<()> {
    println!("localekit self-diagnostics");

    let mut checks = Vec::new();
    checks.push(Diagnostic::ok(
        "version",
        format!("localekit {}", env!("CARGO_PKG_VERSION")),
    ));
    checks.push(Diagnostic::ok(
        "manifest",
        format!(
            "{} ({} languages, base '{}')",
            manifest.source(),
            manifest.languages.len(),
            manifest.base
        ),
    ));

    checks.push(check_directory("locale directory", store.dir()));
    checks.push(check_base_locale(store, manifest));
    for language in &manifest.languages {
        if language.code == manifest.base {
            continue;
        }
        checks.push(check_locale_file(store, &language.code));
    }
    checks.push(check_undeclared(store, manifest));

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks
        .iter()
        .any(|entry| matches!(entry.level, Level::Error))
    {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

struct Diagnostic {
    label: String,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: impl Into<String>, level: Level, detail: String) -> Self {
        Self {
            label: label.into(),
            level,
            detail,
        }
    }

    fn ok(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: impl Into<String>, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:22} {}", self.level.tag(), self.label, self.detail,);
    }
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warn => "WARN",
            Level::Error => "ERR",
        }
    }
}

fn check_directory(label: &str, path: &Path) -> Diagnostic {
    if path.is_dir() {
        Diagnostic::ok(label, format!("{} exists", path.display()))
    } else if path.exists() {
        Diagnostic::error(
            label,
            format!("{} exists but is not a directory", path.display()),
        )
    } else {
        Diagnostic::error(
            label,
            format!(
                "{} missing (create with mkdir -p {})",
                path.display(),
                path.display()
            ),
        )
    }
}

fn check_base_locale(store: &LocaleStore, manifest: &Manifest) -> Diagnostic {
    let label = format!("base locale ({})", manifest.base);
    if !store.exists(&manifest.base) {
        return Diagnostic::error(
            label,
            format!(
                "{} missing (write the base language's strings there)",
                store.locale_path(&manifest.base).display()
            ),
        );
    }
    match store.load(&manifest.base) {
        Ok(tree) => Diagnostic::ok(
            label,
            format!(
                "{} keys, {} translated",
                tree.count_leaves(),
                tree.count_translated()
            ),
        ),
        Err(err) => Diagnostic::error(label, format!("unreadable: {err:#}")),
    }
}

fn check_locale_file(store: &LocaleStore, code: &str) -> Diagnostic {
    let label = format!("locale {code}");
    if !store.exists(code) {
        return Diagnostic::warning(
            label,
            format!(
                "{} missing (run localekit generate)",
                store.locale_path(code).display()
            ),
        );
    }
    match store.load(code) {
        Ok(tree) => Diagnostic::ok(
            label,
            format!(
                "{} of {} keys translated",
                tree.count_translated(),
                tree.count_leaves()
            ),
        ),
        Err(err) => Diagnostic::error(label, format!("unreadable: {err:#}")),
    }
}

fn check_undeclared(store: &LocaleStore, manifest: &Manifest) -> Diagnostic {
    match store.discover() {
        Ok(codes) => {
            let extras: Vec<String> = codes
                .into_iter()
                .filter(|code| !manifest.contains(code))
                .collect();
            if extras.is_empty() {
                Diagnostic::ok("undeclared locales", "none".to_string())
            } else {
                Diagnostic::warning(
                    "undeclared locales",
                    format!(
                        "{} not in the manifest (declare them or remove the files)",
                        extras.join(", ")
                    ),
                )
            }
        }
        Err(err) => Diagnostic::warning("undeclared locales", format!("unable to scan: {err}")),
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for persisted audit reports

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
        }
    }

    pub fn serialize<T: Serialize>(&self, report: &T) -> Result<String> {
        match self {
            ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

/// Resolve where a report lands. A directory target gets a timestamped
/// file name inside it; any other target is used as-is.
#[must_use]
pub fn resolve_report_path(target: &Path, format: ReportFormat) -> PathBuf {
    if target.is_dir() {
        let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S").to_string();
        target.join(format!("audit-{}.{}", timestamp, format.extension()))
    } else {
        target.to_path_buf()
    }
}

/// Serialize `report` in `format` and write it to `path`, creating
/// parent directories as needed.
pub fn write_report<T: Serialize>(report: &T, format: ReportFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }
    let content = format.serialize(report)?;
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

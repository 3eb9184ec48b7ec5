// src/packages/pacman_query.rs

//! Query installed pacman packages from the system database
//!
//! Installed packages are read from `pacman -Qi` output, run under the C
//! locale so field names are stable. The same text can be saved to a file
//! and read back with [`SnapshotFile`] for offline planning.

use crate::error::{Error, Result};
use crate::packages::traits::{MetadataSource, PackageMetadata};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const FIELD_NAME: &str = "Name";
const FIELD_VERSION: &str = "Version";
const FIELD_PROVIDES: &str = "Provides";
const FIELD_DEPENDS: &str = "Depends On";

/// Metadata source backed by the live pacman database
#[derive(Debug, Clone)]
pub struct PacmanQuery {
    program: String,
}

impl PacmanQuery {
    pub fn new() -> Self {
        Self {
            program: "pacman".to_string(),
        }
    }
}

impl Default for PacmanQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for PacmanQuery {
    fn installed_packages(&self) -> Result<Vec<PackageMetadata>> {
        debug!("Querying installed packages with {} -Qi", self.program);

        let output = Command::new(&self.program)
            .arg("-Qi")
            .env("LANG", "C")
            .env("LC_ALL", "C")
            .output()
            .map_err(|e| {
                Error::QueryError(format!(
                    "Failed to run {}: {}. Is pacman installed?",
                    self.program, e
                ))
            })?;

        if !output.status.success() {
            return Err(Error::QueryError(format!(
                "{} -Qi failed: {}",
                self.program,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let packages = parse_query_output(&String::from_utf8_lossy(&output.stdout))?;
        debug!("Found {} installed packages", packages.len());
        Ok(packages)
    }
}

/// Metadata source reading saved `pacman -Qi` output
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl MetadataSource for SnapshotFile {
    fn installed_packages(&self) -> Result<Vec<PackageMetadata>> {
        debug!("Reading package snapshot from {}", self.path.display());
        let text = std::fs::read_to_string(&self.path)?;
        parse_query_output(&text)
    }
}

/// Parse `pacman -Qi` output into package records
///
/// Packages are separated by blank lines. Each field line is `Key : Value`,
/// split at the first colon. Indented lines continue the previous field,
/// which is how pacman wraps long lists.
pub fn parse_query_output(output: &str) -> Result<Vec<PackageMetadata>> {
    let mut packages = Vec::new();
    let mut fields: Vec<(String, String)> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            if !fields.is_empty() {
                packages.push(block_to_metadata(&fields, packages.len() + 1)?);
                fields.clear();
            }
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            match fields.last_mut() {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(line.trim());
                }
                None => {
                    return Err(Error::MetadataFormatError(format!(
                        "continuation line before any field: '{}'",
                        line.trim()
                    )));
                }
            }
        } else if let Some((key, value)) = line.split_once(':') {
            fields.push((key.trim().to_string(), value.trim().to_string()));
        } else {
            return Err(Error::MetadataFormatError(format!(
                "line is not a 'Key : Value' field: '{}'",
                line
            )));
        }
    }

    if !fields.is_empty() {
        packages.push(block_to_metadata(&fields, packages.len() + 1)?);
    }

    Ok(packages)
}

fn block_to_metadata(fields: &[(String, String)], block: usize) -> Result<PackageMetadata> {
    let field = |key: &str| {
        fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    let required = |key: &str| {
        field(key)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::MetadataFormatError(format!(
                    "package block {} is missing the {} field",
                    block, key
                ))
            })
    };

    Ok(PackageMetadata {
        name: required(FIELD_NAME)?,
        version: required(FIELD_VERSION)?,
        provides: split_list(field(FIELD_PROVIDES)),
        depends: split_list(field(FIELD_DEPENDS)),
    })
}

/// Split a whitespace separated list field; pacman prints `None` for empty lists
fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split_whitespace()
        .filter(|s| *s != "None")
        .map(str::to_string)
        .collect()
}

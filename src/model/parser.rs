// src/model/parser.rs

//! Parser for want-list files.
//!
//! Two formats are accepted. The plain format lists one package per line,
//! with `#` starting a comment:
//!
//! ```text
//! # base system
//! base
//! linux        # kernel
//! ```
//!
//! Files ending in `.toml` use a model section instead:
//!
//! ```toml
//! [model]
//! version = 1
//! install = ["base", "linux"]
//! ```

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Current model file version
pub const MODEL_VERSION: u32 = 1;

/// File name of the default want list inside the user config directory
pub const DEFAULT_WANT_LIST: &str = "spacman.conf";

/// The set of package names the user wants installed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WantList {
    names: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    model: ModelSection,
}

#[derive(Debug, Deserialize)]
struct ModelSection {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    install: Vec<String>,
}

fn default_version() -> u32 {
    MODEL_VERSION
}

impl WantList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the plain one-name-per-line format
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(before, _)| before))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Parse the TOML model format
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ModelFile = toml::from_str(content)?;
        if file.model.version != MODEL_VERSION {
            return Err(Error::ParseError(format!(
                "unsupported model version {} (expected {})",
                file.model.version, MODEL_VERSION
            )));
        }

        Ok(file
            .model
            .install
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect())
    }

    /// Load a want list from disk, picking the format from the extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigError(format!("No such file: {}", path.display())));
        }

        let content = std::fs::read_to_string(path)?;
        let wants = if path.extension().is_some_and(|ext| ext == "toml") {
            Self::from_toml(&content)?
        } else {
            Self::parse(&content)
        };

        debug!("Loaded {} wanted packages from {}", wants.len(), path.display());
        Ok(wants)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Wanted names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WantList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WantList {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Default want-list location: `<config dir>/spacman.conf`
pub fn default_want_list_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_WANT_LIST)
}

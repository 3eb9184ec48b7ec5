// src/resolver/provider.rs

//! Index of provided names
//!
//! Maps every provided name to the packages that supply it, keyed by the
//! version they provide it at. An empty version tag means the name is
//! provided without a version. Every package provides its own name
//! unversioned.

use super::graph::DependencyGraph;
use std::collections::BTreeMap;
use tracing::debug;

/// Version tag used for unversioned provisions
pub const UNVERSIONED: &str = "";

/// Split a raw provides entry into name and version tag
///
/// `libfoo.so=1-64` → (`libfoo.so`, `1-64`); `sh` → (`sh`, "").
pub fn split_provide(entry: &str) -> (&str, &str) {
    match entry.split_once('=') {
        Some((name, version)) => (name.trim(), version.trim()),
        None => (entry.trim(), UNVERSIONED),
    }
}

/// Provided name → version tag → owning package
#[derive(Debug, Clone, Default)]
pub struct ProviderIndex {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl ProviderIndex {
    /// Build the index from every package in the graph
    ///
    /// When two packages provide the same name at the same version tag, the
    /// first in package-name order keeps the entry. A package's own name
    /// always maps to itself under the unversioned tag.
    pub fn build(graph: &DependencyGraph) -> Self {
        let mut index = Self::default();

        for package in graph.packages() {
            for entry in &package.provides {
                let (name, version) = split_provide(entry);
                if name.is_empty() {
                    continue;
                }

                let owners = index.entries.entry(name.to_string()).or_default();
                match owners.get(version) {
                    Some(owner) if owner != &package.name => {
                        debug!(
                            "{} also provides {}{}, keeping {}",
                            package.name,
                            name,
                            version_suffix(version),
                            owner
                        );
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(version.to_string(), package.name.clone());
                    }
                }
            }
        }

        for package in graph.packages() {
            index
                .entries
                .entry(package.name.clone())
                .or_default()
                .insert(UNVERSIONED.to_string(), package.name.clone());
        }

        debug!("Built provider index with {} names", index.entries.len());
        index
    }

    /// Check whether anything provides this name
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All (version tag → package) entries for a provided name
    pub fn providers(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.entries.get(name)
    }

    /// The package providing `name` without a version, if any
    pub fn unversioned(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .and_then(|owners| owners.get(UNVERSIONED))
            .map(String::as_str)
    }

    /// Number of distinct provided names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn version_suffix(version: &str) -> String {
    if version.is_empty() {
        String::new()
    } else {
        format!("={}", version)
    }
}

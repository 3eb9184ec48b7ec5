// src/resolver/graph.rs

//! Dependency graph data structures
//!
//! [`DependencyGraph`] holds installed packages with their raw provides and
//! depends strings, exactly as the metadata source reported them.
//! [`ResolvedGraph`] is the output of the resolver: the same packages, with
//! every dependency either pointing at an installed package or marked
//! unresolved.

use crate::error::{Error, Result};
use crate::packages::{MetadataSource, PackageMetadata};
use std::collections::BTreeMap;
use tracing::debug;

/// An installed package before dependency resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    /// Raw provides entries: `name` or `name=version`
    pub provides: Vec<String>,
    /// Raw dependency specifications
    pub dependencies: Vec<String>,
}

impl PackageRecord {
    /// Normalize a metadata record, rejecting records without name or version
    pub fn from_metadata(meta: PackageMetadata) -> Result<Self> {
        let name = meta.name.trim();
        if name.is_empty() {
            return Err(Error::MetadataFormatError(format!(
                "package record with version '{}' has no name",
                meta.version.trim()
            )));
        }

        let version = meta.version.trim();
        if version.is_empty() {
            return Err(Error::MetadataFormatError(format!(
                "package '{}' has no version",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            provides: trim_entries(meta.provides),
            dependencies: trim_entries(meta.depends),
        })
    }
}

fn trim_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Installed packages keyed by name
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, PackageRecord>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from raw metadata records
    pub fn from_metadata<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = PackageMetadata>,
    {
        let mut graph = Self::new();
        for meta in records {
            graph.add_record(PackageRecord::from_metadata(meta)?)?;
        }

        let stats = graph.stats();
        debug!(
            "Built dependency graph: {} packages, {} provides, {} dependency specs",
            stats.total_packages, stats.total_provides, stats.total_dependencies
        );
        Ok(graph)
    }

    /// Build the graph from everything a metadata source reports
    pub fn from_source<S>(source: &S) -> Result<Self>
    where
        S: MetadataSource + ?Sized,
    {
        Self::from_metadata(source.installed_packages()?)
    }

    /// Add a package; a second record with the same name is malformed input
    pub fn add_record(&mut self, record: PackageRecord) -> Result<()> {
        if self.nodes.contains_key(&record.name) {
            return Err(Error::MetadataFormatError(format!(
                "package '{}' is listed more than once",
                record.name
            )));
        }
        self.nodes.insert(record.name.clone(), record);
        Ok(())
    }

    /// Get a package by name
    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.nodes.get(name)
    }

    /// Check whether a package with this exact name is installed
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// All packages in name order
    pub fn packages(&self) -> impl Iterator<Item = &PackageRecord> {
        self.nodes.values()
    }

    /// All package names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the dependency graph
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_packages: self.nodes.len(),
            total_provides: self.nodes.values().map(|p| p.provides.len()).sum(),
            total_dependencies: self.nodes.values().map(|p| p.dependencies.len()).sum(),
        }
    }
}

/// Statistics about the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub total_packages: usize,
    pub total_provides: usize,
    pub total_dependencies: usize,
}

/// A dependency after resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    /// Satisfied by this installed package
    Package(String),
    /// No installed package satisfies the raw specification
    Unresolved(String),
}

impl Dependency {
    /// Installed package name, if resolved
    pub fn package(&self) -> Option<&str> {
        match self {
            Dependency::Package(name) => Some(name),
            Dependency::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Dependency::Package(_))
    }
}

/// An installed package with resolved dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: String,
    pub provides: Vec<String>,
    pub dependencies: Vec<Dependency>,
}

/// Installed packages with resolved dependency lists
#[derive(Debug, Clone, Default)]
pub struct ResolvedGraph {
    nodes: BTreeMap<String, ResolvedPackage>,
}

impl ResolvedGraph {
    pub(crate) fn insert(&mut self, package: ResolvedPackage) {
        self.nodes.insert(package.name.clone(), package);
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedPackage> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn packages(&self) -> impl Iterator<Item = &ResolvedPackage> {
        self.nodes.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// src/resolver/engine.rs

//! Dependency resolver implementation
//!
//! Turns every raw dependency string in a [`DependencyGraph`] into either an
//! installed package name or an unresolved marker, producing a new
//! [`ResolvedGraph`]. Problems are collected as diagnostics; resolution
//! always covers the whole graph.
//!
//! Provider selection is deterministic:
//! - exact-name specs take the unversioned provider if there is one,
//!   otherwise the provider with the highest version;
//! - versioned specs scan versioned providers from highest to lowest
//!   version and take the first that satisfies the constraint.
//!   Unversioned provisions never satisfy a versioned constraint.

use crate::version::VersionComparator;
use std::cmp::Ordering;
use tracing::debug;

use super::conflict::{Diagnostic, DiagnosticKind};
use super::graph::{Dependency, DependencyGraph, ResolvedGraph, ResolvedPackage};
use super::provider::{ProviderIndex, UNVERSIONED};
use super::spec::{DependencySpec, VersionRequirement};

/// Output of a resolution pass
#[derive(Debug, Clone)]
pub struct Resolution {
    pub graph: ResolvedGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Diagnostics raised for one package
    pub fn diagnostics_for<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.package == package)
    }
}

/// Resolves dependency specifications against installed packages
pub struct Resolver<C> {
    comparator: C,
}

impl<C: VersionComparator> Resolver<C> {
    /// Create a resolver that orders versions with `comparator`
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Build the provider index and resolve every package in the graph
    pub fn resolve(&self, graph: &DependencyGraph) -> Resolution {
        let index = ProviderIndex::build(graph);
        self.resolve_with_index(graph, &index)
    }

    /// Resolve every package against a prebuilt provider index
    pub fn resolve_with_index(&self, graph: &DependencyGraph, index: &ProviderIndex) -> Resolution {
        let mut resolved = ResolvedGraph::default();
        let mut diagnostics = Vec::new();

        for package in graph.packages() {
            let mut dependencies = Vec::with_capacity(package.dependencies.len());

            for raw in &package.dependencies {
                match self.resolve_spec(raw, graph, index) {
                    Ok(target) => dependencies.push(Dependency::Package(target)),
                    Err(kind) => {
                        let diagnostic = Diagnostic::new(kind, &package.name, raw);
                        debug!("{}", diagnostic);
                        diagnostics.push(diagnostic);
                        dependencies.push(Dependency::Unresolved(raw.clone()));
                    }
                }
            }

            resolved.insert(ResolvedPackage {
                name: package.name.clone(),
                version: package.version.clone(),
                provides: package.provides.clone(),
                dependencies,
            });
        }

        debug!(
            "Resolved {} packages with {} diagnostics",
            resolved.len(),
            diagnostics.len()
        );

        Resolution {
            graph: resolved,
            diagnostics,
        }
    }

    /// Resolve one raw dependency string to an installed package name
    pub fn resolve_spec(
        &self,
        raw: &str,
        graph: &DependencyGraph,
        index: &ProviderIndex,
    ) -> std::result::Result<String, DiagnosticKind> {
        let spec = DependencySpec::parse(raw).map_err(|_| DiagnosticKind::MalformedSyntax)?;

        // An installed package name wins outright; a version constraint on
        // it is not re-checked.
        if graph.contains(&spec.target) {
            return Ok(spec.target);
        }

        match spec.requirement {
            None => self
                .select_by_name(&spec.target, index)
                .ok_or(DiagnosticKind::Unrecognized),
            Some(ref requirement) => {
                if !index.contains(&spec.target) {
                    return Err(DiagnosticKind::Unrecognized);
                }
                self.select_by_version(&spec.target, requirement, index)
                    .ok_or(DiagnosticKind::Unsatisfiable)
            }
        }
    }

    fn select_by_name(&self, name: &str, index: &ProviderIndex) -> Option<String> {
        if let Some(owner) = index.unversioned(name) {
            return Some(owner.to_string());
        }

        index
            .providers(name)?
            .iter()
            .max_by(|(a, _), (b, _)| self.comparator.compare(a, b))
            .map(|(_, owner)| owner.clone())
    }

    fn select_by_version(
        &self,
        name: &str,
        requirement: &VersionRequirement,
        index: &ProviderIndex,
    ) -> Option<String> {
        let mut candidates: Vec<(&String, &String)> = index
            .providers(name)?
            .iter()
            .filter(|(version, _)| version.as_str() != UNVERSIONED)
            .collect();
        candidates.sort_by(|(a, _), (b, _)| self.descending(a, b));

        candidates
            .into_iter()
            .find(|(version, _)| {
                requirement
                    .op
                    .satisfied_by(&self.comparator, version, &requirement.version)
            })
            .map(|(_, owner)| owner.clone())
    }

    fn descending(&self, a: &str, b: &str) -> Ordering {
        self.comparator.compare(b, a)
    }
}

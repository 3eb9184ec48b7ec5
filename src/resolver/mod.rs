// src/resolver/mod.rs

//! Dependency resolution over the installed package universe
//!
//! The pipeline is a sequence of pure graph-in/graph-out steps:
//! - [`DependencyGraph`] holds raw metadata keyed by package name
//! - [`ProviderIndex`] maps provided names to the packages supplying them
//! - [`Resolver`] rewrites every dependency string to an installed package
//!   name (or an unresolved marker) and reports [`Diagnostic`]s
//! - [`compute_closure`] collects everything the declared packages need

mod closure;
mod conflict;
mod engine;
mod graph;
mod provider;
mod spec;

pub use closure::{Closure, compute_closure};
pub use conflict::{Diagnostic, DiagnosticKind, MissingDependency};
pub use engine::{Resolution, Resolver};
pub use graph::{
    Dependency, DependencyGraph, GraphStats, PackageRecord, ResolvedGraph, ResolvedPackage,
};
pub use provider::{ProviderIndex, UNVERSIONED, split_provide};
pub use spec::{DependencySpec, MalformedSpec, VersionRequirement};

// src/lib.rs

//! Spacman: declarative package sets for pacman
//!
//! Given the packages installed on a system and a list of the packages the
//! user actually wants, compute what can be removed and what still has to be
//! installed.
//!
//! # Architecture
//!
//! - Metadata sources: installed packages come from `pacman -Qi`, a saved
//!   snapshot of its output, or any [`MetadataSource`]
//! - Resolution: every dependency string is mapped to the installed package
//!   that satisfies it, through provided names and version constraints
//! - Closure: the wanted packages plus everything they transitively need
//! - Reconciliation: installed minus closure is removed, unknown wants are
//!   installed

mod error;
pub mod executor;
pub mod model;
pub mod packages;
pub mod resolver;
pub mod version;

pub use error::{Error, Result};
pub use executor::{DEFAULT_PACKAGE_MANAGER, PackageManager};
pub use model::{
    SyncFailure, SyncPlan, SyncReport, SyncSession, WantList, compute_plan, plan_sync,
};
pub use packages::{MetadataSource, PackageMetadata, PacmanQuery, SnapshotFile};
pub use resolver::{
    Closure, Dependency, DependencyGraph, Diagnostic, DiagnosticKind, MissingDependency,
    ProviderIndex, Resolution, ResolvedGraph, Resolver, compute_closure,
};
pub use version::{AlpmComparator, ConstraintOp, VersionComparator, vercmp};

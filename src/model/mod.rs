// src/model/mod.rs

//! Declarative package set reconciliation
//!
//! A want list names the packages that should be installed. Everything else
//! on the system must be a dependency of one of them, directly or through a
//! provided name; anything that is not gets removed.
//!
//! A [`SyncSession`] loads the installed universe once, resolves it, and can
//! then plan against any want list:
//!
//! ```no_run
//! use spacman::{AlpmComparator, PacmanQuery, SyncSession, WantList};
//!
//! let wants = WantList::parse("base\nvim\n");
//! let session = SyncSession::load(&PacmanQuery::new(), AlpmComparator)?;
//! for diagnostic in session.diagnostics() {
//!     eprintln!("{}", diagnostic);
//! }
//! let report = session.plan(&wants)?;
//! println!("{} to remove", report.plan.to_remove.len());
//! # Ok::<(), spacman::Error>(())
//! ```

pub mod parser;
mod diff;

pub use diff::{SyncPlan, compute_plan};
pub use parser::{DEFAULT_WANT_LIST, MODEL_VERSION, WantList, default_want_list_path};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::packages::MetadataSource;
use crate::resolver::{
    Closure, DependencyGraph, Diagnostic, MissingDependency, ResolvedGraph, Resolver,
};
use crate::version::VersionComparator;

/// Result of planning a want list against the installed system
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub plan: SyncPlan,
    /// Non-fatal resolution problems anywhere in the installed universe
    pub diagnostics: Vec<Diagnostic>,
    pub installed_count: usize,
    /// Number of installed packages the want list requires
    pub closure_size: usize,
}

/// Why planning failed, with everything the resolver found along the way
///
/// Serialized in place of a [`SyncReport`] when JSON output is requested,
/// so the diagnostics are not lost on a fatal error.
#[derive(Debug, Clone, Serialize)]
pub struct SyncFailure<'a> {
    pub error: String,
    /// Unresolved dependencies inside the closure; empty for other errors
    pub missing: &'a [MissingDependency],
    pub diagnostics: &'a [Diagnostic],
}

/// A resolved installed universe, ready to plan against
#[derive(Debug, Clone)]
pub struct SyncSession {
    resolved: ResolvedGraph,
    diagnostics: Vec<Diagnostic>,
}

impl SyncSession {
    /// Read installed packages from `source` and resolve their dependencies
    pub fn load<S, C>(source: &S, comparator: C) -> Result<Self>
    where
        S: MetadataSource + ?Sized,
        C: VersionComparator,
    {
        let graph = DependencyGraph::from_source(source)?;
        Ok(Self::from_graph(&graph, comparator))
    }

    /// Resolve an already built graph
    pub fn from_graph<C: VersionComparator>(graph: &DependencyGraph, comparator: C) -> Self {
        let stats = graph.stats();
        info!(
            "Resolving {} installed packages ({} provides, {} dependencies)",
            stats.total_packages, stats.total_provides, stats.total_dependencies
        );

        let resolution = Resolver::new(comparator).resolve(graph);
        Self {
            resolved: resolution.graph,
            diagnostics: resolution.diagnostics,
        }
    }

    /// Resolution problems found while loading
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn graph(&self) -> &ResolvedGraph {
        &self.resolved
    }

    /// Packages required by `wants`, without the missing-dependency check
    pub fn closure(&self, wants: &WantList) -> Closure {
        self.resolved.closure(wants.iter())
    }

    /// Compute what to remove and install so the system matches `wants`
    pub fn plan(&self, wants: &WantList) -> Result<SyncReport> {
        let closure = self.closure(wants);
        let plan = compute_plan(self.resolved.names(), &closure)?;

        debug!(
            "Plan: {} to remove, {} to install",
            plan.to_remove.len(),
            plan.to_install.len()
        );

        Ok(SyncReport {
            plan,
            diagnostics: self.diagnostics.clone(),
            installed_count: self.resolved.len(),
            closure_size: closure.packages.len(),
        })
    }

    /// Describe a failed [`plan`](Self::plan) together with the load diagnostics
    pub fn failure<'a>(&'a self, err: &'a Error) -> SyncFailure<'a> {
        let missing: &[MissingDependency] = match err {
            Error::MissingDependencies(missing) => missing.as_slice(),
            _ => &[],
        };

        SyncFailure {
            error: err.to_string(),
            missing,
            diagnostics: &self.diagnostics,
        }
    }
}

/// Load, resolve and plan in one step
pub fn plan_sync<S, C>(source: &S, comparator: C, wants: &WantList) -> Result<SyncReport>
where
    S: MetadataSource + ?Sized,
    C: VersionComparator,
{
    SyncSession::load(source, comparator)?.plan(wants)
}

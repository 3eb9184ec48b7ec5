// src/resolver/closure.rs

//! Transitive closure of required packages
//!
//! Starting from the declared package names, follow resolved dependencies
//! depth-first until every reachable installed package is collected. Each
//! package is expanded once, so dependency cycles terminate naturally.

use std::collections::BTreeSet;
use tracing::debug;

use super::conflict::MissingDependency;
use super::graph::{Dependency, ResolvedGraph};

/// Packages required by a set of seeds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    /// Installed packages reachable from the seeds, seeds included
    pub packages: BTreeSet<String>,
    /// Seeds that are not installed packages
    pub unknown_seeds: BTreeSet<String>,
    /// Unresolved dependencies of packages inside the closure
    pub missing: Vec<MissingDependency>,
}

impl Closure {
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains(name)
    }

    /// Whether every dependency inside the closure resolved
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compute the closure of `seeds` over a resolved graph
pub fn compute_closure<I, S>(graph: &ResolvedGraph, seeds: I) -> Closure
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut closure = Closure::default();
    let mut stack: Vec<&str> = Vec::new();

    for seed in seeds {
        let seed = seed.as_ref();
        if closure.packages.contains(seed) {
            continue;
        }

        let Some(package) = graph.get(seed) else {
            debug!("Declared package {} is not installed", seed);
            closure.unknown_seeds.insert(seed.to_string());
            continue;
        };

        closure.packages.insert(package.name.clone());
        stack.push(&package.name);

        while let Some(name) = stack.pop() {
            let Some(package) = graph.get(name) else {
                continue;
            };

            for dep in &package.dependencies {
                match dep {
                    Dependency::Package(target) => match graph.get(target) {
                        Some(next) => {
                            if closure.packages.insert(next.name.clone()) {
                                stack.push(&next.name);
                            }
                        }
                        None => closure
                            .missing
                            .push(MissingDependency::new(target.clone(), name)),
                    },
                    Dependency::Unresolved(spec) => {
                        closure.missing.push(MissingDependency::new(spec.clone(), name));
                    }
                }
            }
        }
    }

    closure.missing.sort();
    closure.missing.dedup();

    debug!(
        "Closure: {} packages, {} unknown seeds, {} missing dependencies",
        closure.packages.len(),
        closure.unknown_seeds.len(),
        closure.missing.len()
    );
    closure
}

impl ResolvedGraph {
    /// Compute the closure of `seeds` over this graph
    pub fn closure<I, S>(&self, seeds: I) -> Closure
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        compute_closure(self, seeds)
    }
}

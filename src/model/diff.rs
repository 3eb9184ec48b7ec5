// src/model/diff.rs

//! Diff computation between the required closure and the installed set.
//!
//! Installed packages outside the closure are removed; declared packages
//! that are not installed are installed.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::resolver::Closure;

/// The actions needed to reach the declared state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncPlan {
    /// Installed packages nothing declared requires
    pub to_remove: BTreeSet<String>,
    /// Declared packages that are not installed
    pub to_install: BTreeSet<String>,
}

impl SyncPlan {
    /// Whether the system already matches the declaration
    pub fn is_empty(&self) -> bool {
        self.to_remove.is_empty() && self.to_install.is_empty()
    }
}

impl fmt::Display for SyncPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Following {} packages need to be uninstalled:",
            self.to_remove.len()
        )?;
        writeln!(f, "{}", join(&self.to_remove))?;
        writeln!(f)?;
        writeln!(
            f,
            "Following {} packages need to be installed:",
            self.to_install.len()
        )?;
        write!(f, "{}", join(&self.to_install))
    }
}

fn join(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// Compute the plan for a closure
///
/// Fails with [`Error::MissingDependencies`] if any package inside the
/// closure has a dependency that no installed package satisfies.
pub fn compute_plan<I, S>(installed: I, closure: &Closure) -> Result<SyncPlan>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if !closure.is_complete() {
        return Err(Error::MissingDependencies(closure.missing.clone()));
    }

    let to_remove = installed
        .into_iter()
        .filter(|name| !closure.contains(name.as_ref()))
        .map(|name| name.as_ref().to_string())
        .collect();

    Ok(SyncPlan {
        to_remove,
        to_install: closure.unknown_seeds.clone(),
    })
}

// src/resolver/conflict.rs

//! Resolution problems
//!
//! [`Diagnostic`]s are collected while resolving every installed package and
//! never stop resolution. A [`MissingDependency`] is an unresolved
//! dependency that the declared packages actually need; those abort the run.

use serde::Serialize;
use std::fmt;

/// Why a dependency specification could not be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Target is neither an installed package nor provided by one
    Unrecognized,
    /// Target is provided, but at no version satisfying the constraint
    Unsatisfiable,
    /// Operator present but the string does not split into name, operator, version
    MalformedSyntax,
}

impl DiagnosticKind {
    fn reason(self) -> &'static str {
        match self {
            DiagnosticKind::Unrecognized => "can't be recognized",
            DiagnosticKind::Unsatisfiable => "can't be satisfied",
            DiagnosticKind::MalformedSyntax => "has unrecognizable syntax",
        }
    }
}

/// A problem found while resolving one dependency of one package
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Package whose dependency list contains the spec
    pub package: String,
    /// The raw dependency string
    pub spec: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, package: impl Into<String>, spec: impl Into<String>) -> Self {
        Self {
            kind,
            package: package.into(),
            spec: spec.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ":: {} : The dependency {} {}.",
            self.package,
            self.spec,
            self.kind.reason()
        )
    }
}

/// An unresolved dependency reachable from the declared packages
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MissingDependency {
    /// The raw dependency string that could not be resolved
    pub name: String,
    /// The package that requires it
    pub required_by: String,
}

impl MissingDependency {
    pub fn new(name: impl Into<String>, required_by: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_by: required_by.into(),
        }
    }
}

impl fmt::Display for MissingDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (required by {})", self.name, self.required_by)
    }
}

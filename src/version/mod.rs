// src/version/mod.rs

//! Version comparison for dependency constraints
//!
//! The resolver never orders versions itself. It asks a [`VersionComparator`]
//! for a three-way answer and maps that answer through a [`ConstraintOp`].
//! [`AlpmComparator`] is the default comparator. It calls libalpm's
//! `alpm_pkg_vercmp` through the `alpm` crate, or a port of it when the
//! `alpm` feature is disabled.

use std::cmp::Ordering;
use std::fmt;

#[cfg(not(feature = "alpm"))]
mod fallback;

/// Three-way version comparison supplied to the resolver
pub trait VersionComparator {
    /// Compare version `a` against version `b`
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> VersionComparator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Comparator using pacman's `vercmp` ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlpmComparator;

impl VersionComparator for AlpmComparator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        vercmp(a, b)
    }
}

/// Compare two full version strings the way pacman does
#[cfg(feature = "alpm")]
pub fn vercmp(a: &str, b: &str) -> Ordering {
    // libalpm takes C strings; pacman versions never contain NUL
    if a.contains('\0') || b.contains('\0') {
        return a.cmp(b);
    }
    alpm::vercmp(a, b)
}

/// Compare two full version strings the way pacman does
#[cfg(not(feature = "alpm"))]
pub fn vercmp(a: &str, b: &str) -> Ordering {
    fallback::vercmp(a, b)
}

/// Comparison operators accepted in dependency specifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOp {
    LessOrEqual,
    GreaterOrEqual,
    Less,
    Greater,
    Equal,
}

impl ConstraintOp {
    /// Operators in matching order: two-character operators first
    pub const ALL: [ConstraintOp; 5] = [
        ConstraintOp::LessOrEqual,
        ConstraintOp::GreaterOrEqual,
        ConstraintOp::Less,
        ConstraintOp::Greater,
        ConstraintOp::Equal,
    ];

    /// The operator as written in a dependency string
    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintOp::LessOrEqual => "<=",
            ConstraintOp::GreaterOrEqual => ">=",
            ConstraintOp::Less => "<",
            ConstraintOp::Greater => ">",
            ConstraintOp::Equal => "=",
        }
    }

    /// Match the operator at the start of `s`, longest symbol first
    pub fn match_prefix(s: &str) -> Option<ConstraintOp> {
        Self::ALL.into_iter().find(|op| s.starts_with(op.symbol()))
    }

    /// Whether a comparison result (`candidate` vs `required`) satisfies the operator
    pub fn accepts(self, ord: Ordering) -> bool {
        match self {
            ConstraintOp::LessOrEqual => ord != Ordering::Greater,
            ConstraintOp::GreaterOrEqual => ord != Ordering::Less,
            ConstraintOp::Less => ord == Ordering::Less,
            ConstraintOp::Greater => ord == Ordering::Greater,
            ConstraintOp::Equal => ord == Ordering::Equal,
        }
    }

    /// Check `candidate <op> required` using the given comparator
    pub fn satisfied_by<C>(self, comparator: &C, candidate: &str, required: &str) -> bool
    where
        C: VersionComparator + ?Sized,
    {
        self.accepts(comparator.compare(candidate, required))
    }
}

impl fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// src/resolver/spec.rs

//! Dependency specification parsing
//!
//! A dependency string is either a bare name (`glibc`, `sh`) or a name
//! followed by one comparison operator and a version (`glibc>=2.39`).
//! Operators are matched as whole tokens, so `<=` never reads as `<`.

use crate::version::ConstraintOp;
use thiserror::Error;

const OPERATOR_CHARS: [char; 3] = ['<', '>', '='];

/// The version half of a versioned dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRequirement {
    pub op: ConstraintOp,
    pub version: String,
}

/// A parsed dependency specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Provider name to look up
    pub target: String,
    /// Version constraint, absent for exact-name specs
    pub requirement: Option<VersionRequirement>,
}

/// The spec has an operator but does not split into target, operator and version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognizable dependency syntax: '{0}'")]
pub struct MalformedSpec(pub String);

impl DependencySpec {
    /// Parse a raw dependency string
    ///
    /// Examples:
    /// - "glibc" → exact name
    /// - "glibc>=2.39" → glibc, GreaterOrEqual, 2.39
    /// - "java=17" → java, Equal, 17
    /// - "foo<>1.0" → malformed (operator characters left in the version)
    pub fn parse(raw: &str) -> Result<Self, MalformedSpec> {
        let raw = raw.trim();

        let Some(pos) = raw.find(OPERATOR_CHARS) else {
            return Ok(Self {
                target: raw.to_string(),
                requirement: None,
            });
        };

        let target = &raw[..pos];
        let rest = &raw[pos..];
        let op = ConstraintOp::match_prefix(rest).ok_or_else(|| MalformedSpec(raw.to_string()))?;
        let version = &rest[op.symbol().len()..];

        if target.is_empty() || version.is_empty() || version.contains(OPERATOR_CHARS) {
            return Err(MalformedSpec(raw.to_string()));
        }

        Ok(Self {
            target: target.to_string(),
            requirement: Some(VersionRequirement {
                op,
                version: version.to_string(),
            }),
        })
    }
}

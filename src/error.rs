// src/error.rs

//! Error types for spacman

use crate::resolver::MissingDependency;
use thiserror::Error;

/// Result type alias using the spacman error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a planning or apply run
///
/// Resolver diagnostics (unrecognized or unsatisfiable dependencies) are not
/// errors; they are returned alongside the results as
/// [`Diagnostic`](crate::resolver::Diagnostic) values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed package metadata: {0}")]
    MetadataFormatError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Package query failed: {0}")]
    QueryError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{}", format_missing(.0))]
    MissingDependencies(Vec<MissingDependency>),

    #[error("Package manager command failed: {0}")]
    CommandError(String),
}

fn format_missing(missing: &[MissingDependency]) -> String {
    let mut out = format!(
        "{} required {} cannot be satisfied by any installed package:",
        missing.len(),
        if missing.len() == 1 { "dependency" } else { "dependencies" }
    );
    for dep in missing {
        out.push_str(&format!("\n  {}", dep));
    }
    out.push_str("\nInstall the missing packages and try again.");
    out
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependencies_lists_every_pair() {
        let err = Error::MissingDependencies(vec![
            MissingDependency::new("libfoo", "app"),
            MissingDependency::new("libbar>=2", "tool"),
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("2 required dependencies"));
        assert!(msg.contains("libfoo (required by app)"));
        assert!(msg.contains("libbar>=2 (required by tool)"));
    }
}

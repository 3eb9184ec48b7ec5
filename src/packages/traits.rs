// src/packages/traits.rs

//! Common types for installed-package metadata sources

use crate::error::Result;

/// Raw metadata for one installed package
///
/// `provides` entries are either a bare name or `name=version`;
/// `depends` entries are a name optionally followed by an operator and a
/// version. Neither list is interpreted at this stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub provides: Vec<String>,
    pub depends: Vec<String>,
}

impl PackageMetadata {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            provides: Vec::new(),
            depends: Vec::new(),
        }
    }

    /// Add a raw provides entry
    pub fn provides(mut self, entry: impl Into<String>) -> Self {
        self.provides.push(entry.into());
        self
    }

    /// Add a raw dependency entry
    pub fn depends(mut self, entry: impl Into<String>) -> Self {
        self.depends.push(entry.into());
        self
    }
}

/// Anything that can enumerate the installed package universe
pub trait MetadataSource {
    /// Return one record per installed package, in source order
    fn installed_packages(&self) -> Result<Vec<PackageMetadata>>;
}

impl MetadataSource for Vec<PackageMetadata> {
    fn installed_packages(&self) -> Result<Vec<PackageMetadata>> {
        Ok(self.clone())
    }
}

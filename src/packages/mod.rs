// src/packages/mod.rs

//! Installed-package metadata sources
//!
//! The resolver only needs name, version, provides and depends for every
//! installed package. This module gets them from pacman, either live or from
//! a saved `pacman -Qi` snapshot.

pub mod pacman_query;
pub mod traits;

pub use pacman_query::{PacmanQuery, SnapshotFile, parse_query_output};
pub use traits::{MetadataSource, PackageMetadata};

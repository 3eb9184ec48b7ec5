// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::PathBuf;

use spacman::SnapshotFile;
use tempfile::TempDir;

/// One installed package as it appears in `pacman -Qi` output
pub struct Pkg {
    pub name: &'static str,
    pub version: &'static str,
    pub provides: Vec<&'static str>,
    pub depends: Vec<&'static str>,
}

pub fn pkg(name: &'static str, version: &'static str) -> Pkg {
    Pkg {
        name,
        version,
        provides: Vec::new(),
        depends: Vec::new(),
    }
}

impl Pkg {
    pub fn provides(mut self, entries: &[&'static str]) -> Self {
        self.provides.extend_from_slice(entries);
        self
    }

    pub fn depends(mut self, entries: &[&'static str]) -> Self {
        self.depends.extend_from_slice(entries);
        self
    }
}

fn list(entries: &[&str]) -> String {
    if entries.is_empty() {
        "None".to_string()
    } else {
        entries.join("  ")
    }
}

/// Render packages the way `LANG=C pacman -Qi` prints them
pub fn render_query_output(packages: &[Pkg]) -> String {
    let mut out = String::new();
    for p in packages {
        writeln!(out, "Name            : {}", p.name).unwrap();
        writeln!(out, "Version         : {}", p.version).unwrap();
        writeln!(out, "Description     : Test package {}", p.name).unwrap();
        writeln!(out, "Architecture    : x86_64").unwrap();
        writeln!(out, "Licenses        : GPL").unwrap();
        writeln!(out, "Provides        : {}", list(&p.provides)).unwrap();
        writeln!(out, "Depends On      : {}", list(&p.depends)).unwrap();
        writeln!(out, "Optional Deps   : None").unwrap();
        writeln!(out, "Install Reason  : Explicitly installed").unwrap();
        writeln!(out).unwrap();
    }
    out
}

/// Temporary directory holding a snapshot and a want list
pub struct Fixture {
    pub dir: TempDir,
    pub snapshot: PathBuf,
    pub want_list: PathBuf,
}

impl Fixture {
    pub fn new(packages: &[Pkg], wants: &str) -> Self {
        Self::with_want_file(packages, "spacman.conf", wants)
    }

    pub fn with_want_file(packages: &[Pkg], file_name: &str, wants: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = dir.path().join("installed.txt");
        let want_list = dir.path().join(file_name);
        std::fs::write(&snapshot, render_query_output(packages)).unwrap();
        std::fs::write(&want_list, wants).unwrap();
        Self {
            dir,
            snapshot,
            want_list,
        }
    }

    pub fn source(&self) -> SnapshotFile {
        SnapshotFile::new(&self.snapshot)
    }
}

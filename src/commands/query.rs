// src/commands/query.rs

//! Print the declared want list

use std::path::Path;

use anyhow::Result;
use spacman::WantList;

/// Print every wanted package, sorted, one per line
pub fn cmd_query(config: &Path) -> Result<()> {
    let wants = WantList::load(config)?;
    for name in wants.iter() {
        println!("{}", name);
    }
    Ok(())
}

// src/commands/mod.rs

//! Command handlers for the spacman CLI

mod query;
mod sync;
mod system;

pub use query::cmd_query;
pub use sync::{SyncOptions, cmd_sync};
pub use system::cmd_completions;

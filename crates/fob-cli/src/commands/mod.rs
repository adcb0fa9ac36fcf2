//! Command implementations.
//!
//! Every command writes its result to the given writer (stdout from the
//! binary) and reports per-module problems on stderr.

mod generate;
mod hash;
mod hot_update;
mod session;

pub use generate::{execute as generate_execute, run as run_generate};
pub use hash::{execute as hash_execute, run as run_hash};
pub use hot_update::{execute as hot_update_execute, run as run_hot_update};
pub use session::Session;

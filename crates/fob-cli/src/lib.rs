//! fob-codegen CLI.
//!
//! Drives [`fob_codegen`] from a JSON manifest standing in for the parser
//! and resolver.
//!
//! - [`cli`] - argument parsing with clap
//! - [`commands`] - `generate`, `hash` and `hot-update`
//! - [`manifest`] - manifest format and graph construction
//! - [`error`] - CLI errors and their miette rendering
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages
//!
//! # Example
//!
//! ```rust,no_run
//! use fob_cli::cli::{GenerateArgs, ManifestArgs};
//! use fob_cli::commands;
//!
//! # fn main() -> fob_cli::Result<()> {
//! let args = GenerateArgs {
//!     input: ManifestArgs {
//!         manifest: "manifest.json".into(),
//!         config: None,
//!         pathinfo: false,
//!         sequential: false,
//!     },
//!     json: true,
//! };
//!
//! let mut out = Vec::new();
//! commands::run_generate(&args, &mut out)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod manifest;
pub mod ui;

pub use error::{CliError, Result};
pub use manifest::{Manifest, ManifestConnection};

//! Command-line interface definition.
//!
//! - `fob-codegen generate` - generate every module of a manifest
//! - `fob-codegen hash` - module hashes and the hot-update template hash
//! - `fob-codegen hot-update` - render a hot-update chunk

mod commands;
#[cfg(test)]
mod tests;

use clap::Parser;

pub use commands::{Command, GenerateArgs, HashArgs, HotUpdateArgs, ManifestArgs};

/// Per-module JavaScript code generation
#[derive(Parser, Debug)]
#[command(
    name = "fob-codegen",
    version,
    about = "Generate module code from a JSON module manifest",
    long_about = "Rewrites each module of a manifest through its dependency templates,\n\
                  hoists init fragments, and packs generated modules into hot-update chunks."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

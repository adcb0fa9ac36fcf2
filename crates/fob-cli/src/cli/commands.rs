use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate every module of a manifest
    ///
    /// Prints each generated module to stdout and its warnings to stderr.
    /// Modules that fail do not stop the others.
    Generate(GenerateArgs),

    /// Print module hashes and the hot-update template hash
    Hash(HashArgs),

    /// Render the generated modules as one hot-update chunk
    HotUpdate(HotUpdateArgs),
}

/// Options shared by every command reading a manifest
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// JSON module manifest
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Config file (defaults to ./fob-codegen.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Annotate runtime calls with their request
    #[arg(long)]
    pub pathinfo: bool,

    /// Generate modules one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: ManifestArgs,

    /// Print a JSON object mapping module ids to generated code
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the hash command
#[derive(Args, Debug, Clone)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: ManifestArgs,
}

/// Arguments for the hot-update command
#[derive(Args, Debug, Clone)]
pub struct HotUpdateArgs {
    #[command(flatten)]
    pub input: ManifestArgs,

    /// Compilation hash handed to render hooks
    #[arg(long, default_value = "")]
    pub hash: String,
}

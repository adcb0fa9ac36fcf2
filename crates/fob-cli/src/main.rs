//! fob-codegen entry point: argument parsing, logging and command dispatch.

use clap::Parser;
use fob_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(!args.no_color && logger::should_use_colors());

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Hash(hash_args) => commands::hash_execute(hash_args),
        cli::Command::HotUpdate(hot_update_args) => commands::hot_update_execute(hot_update_args),
    };

    result.map_err(error::cli_error_to_miette)
}

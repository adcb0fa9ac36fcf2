use super::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn parses_generate_with_flags() {
    let cli = Cli::parse_from([
        "fob-codegen",
        "generate",
        "manifest.json",
        "--pathinfo",
        "--json",
        "-c",
        "custom.toml",
    ]);

    let Command::Generate(args) = cli.command else {
        panic!("expected generate command");
    };
    assert_eq!(args.input.manifest, PathBuf::from("manifest.json"));
    assert_eq!(args.input.config, Some(PathBuf::from("custom.toml")));
    assert!(args.input.pathinfo);
    assert!(!args.input.sequential);
    assert!(args.json);
}

#[test]
fn global_flags_follow_subcommand() {
    let cli = Cli::parse_from(["fob-codegen", "hash", "m.json", "--verbose", "--no-color"]);
    assert!(cli.verbose);
    assert!(cli.no_color);
    assert!(matches!(cli.command, Command::Hash(_)));
}

#[test]
fn verbose_conflicts_with_quiet() {
    let result = Cli::try_parse_from(["fob-codegen", "-v", "-q", "hash", "m.json"]);
    assert!(result.is_err());
}

#[test]
fn hot_update_hash_defaults_to_empty() {
    let cli = Cli::parse_from(["fob-codegen", "hot-update", "m.json"]);
    let Command::HotUpdate(args) = cli.command else {
        panic!("expected hot-update command");
    };
    assert_eq!(args.hash, "");
}

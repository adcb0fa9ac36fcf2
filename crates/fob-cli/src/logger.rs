//! Logging setup for the fob-codegen CLI.
//!
//! Output goes to stderr so generated code on stdout can be piped.
//!
//! The level is picked in this order:
//! 1. `--verbose`: debug for the fob crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. warnings for the fob crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "fob_graph=debug,fob_codegen=debug,fob_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "fob_graph=warn,fob_codegen=warn,fob_cli=info";

/// Filter directives for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the global tracing subscriber.
///
/// Should be called once at startup; a second subscriber is silently
/// ignored.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug() {
        let filter = filter_for(true, false).to_string();
        assert!(filter.contains("fob_codegen=debug"));
    }

    #[test]
    fn quiet_keeps_errors_only() {
        assert_eq!(filter_for(false, true).to_string(), "error");
    }
}

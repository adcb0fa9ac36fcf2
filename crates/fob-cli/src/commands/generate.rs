use std::collections::BTreeMap;
use std::io::{self, Write};

use fob_codegen::Source;
use tracing::info;

use super::Session;
use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Run `generate`, writing to stdout.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

pub fn run(args: &GenerateArgs, out: &mut dyn Write) -> Result<()> {
    let session = Session::load(&args.input)?;
    session.report_warnings();

    let results = session.generate();
    let total = results.len();
    let mut failed = 0;
    let mut generated = BTreeMap::new();

    for (id, result) in results {
        match result {
            Ok(source) if args.json => {
                generated.insert(id.to_string(), source.source().into_owned());
            }
            Ok(source) => {
                writeln!(out, "// {id}")?;
                writeln!(out, "{}", source.source())?;
            }
            Err(err) => {
                failed += 1;
                ui::error(&format!("{id}: {err}"));
            }
        }
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &generated)?;
        writeln!(out)?;
    }

    if failed > 0 {
        return Err(CliError::GenerationFailed { failed, total });
    }

    info!(modules = total, "generated modules");
    Ok(())
}

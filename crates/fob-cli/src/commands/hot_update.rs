use std::io::{self, Write};
use std::sync::Arc;

use fob_codegen::{ChunkModule, HotUpdateChunkTemplate, RenderContext, Source};

use super::Session;
use crate::cli::HotUpdateArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Run `hot-update`, writing to stdout.
pub fn execute(args: HotUpdateArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

/// Render one hot-update chunk holding every generated module.
///
/// Modules that fail to generate are left out of the chunk and make the
/// command fail after the chunk is written.
pub fn run(args: &HotUpdateArgs, out: &mut dyn Write) -> Result<()> {
    let session = Session::load(&args.input)?;
    session.report_warnings();

    let results = session.generate();
    let total = results.len();
    let mut failed = 0;

    let modules: Vec<ChunkModule> = results
        .into_iter()
        .map(|(id, result)| {
            let source = match result {
                Ok(source) => Some(Arc::new(source) as Arc<dyn Source>),
                Err(err) => {
                    failed += 1;
                    ui::error(&format!("{id}: {err}"));
                    None
                }
            };
            ChunkModule::new(id, source)
        })
        .collect();

    let template = HotUpdateChunkTemplate::new(session.options.runtime.clone());
    let rendered = template.render(&RenderContext::new(modules), &args.hash);
    writeln!(out, "{}", rendered.source())?;

    if failed > 0 {
        return Err(CliError::GenerationFailed { failed, total });
    }
    Ok(())
}

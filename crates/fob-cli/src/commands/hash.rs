use std::io::{self, Write};

use fob_codegen::{HotUpdateChunkTemplate, Source};
use fob_graph::ContentHasher;

use super::Session;
use crate::cli::HashArgs;
use crate::error::Result;

/// Run `hash`, writing to stdout.
pub fn execute(args: HashArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)
}

/// Print `<sha256>  <module id>` per module, then the hot-update template
/// hash.
///
/// A module hash covers its dependencies' resolutions followed by its
/// generated code. The first module that fails to generate aborts the
/// command.
pub fn run(args: &HashArgs, out: &mut dyn Write) -> Result<()> {
    let session = Session::load(&args.input)?;

    for (module, (id, result)) in session.modules.iter().zip(session.generate()) {
        let generated = result?;

        let mut hasher = ContentHasher::new();
        module.update_hash(&mut hasher, &session.graph)?;
        generated.update_hash(&mut hasher);
        writeln!(out, "{}  {id}", hasher.digest_hex())?;
    }

    let template = HotUpdateChunkTemplate::new(session.options.runtime.clone());
    let mut hasher = ContentHasher::new();
    template.update_hash(&mut hasher);
    writeln!(out, "{}  HotUpdateChunkTemplate", hasher.digest_hex())?;

    Ok(())
}

use std::sync::Arc;

use fob_codegen::{
    CodegenOptions, DependencyTemplates, GenerateContext, GeneratedSource, JavascriptGenerator,
    RuntimeTemplate,
};
use fob_graph::{Module, ModuleGraph, ModuleId};
use tracing::debug;

use crate::cli::ManifestArgs;
use crate::error::Result;
use crate::manifest::Manifest;

/// Everything a command needs to generate the modules of one manifest.
pub struct Session {
    pub options: CodegenOptions,
    pub modules: Vec<Arc<Module>>,
    pub graph: ModuleGraph,
    pub runtime: RuntimeTemplate,
    pub templates: DependencyTemplates,
}

impl Session {
    /// Load options (command-line flags win over config) and the manifest.
    pub fn load(args: &ManifestArgs) -> Result<Self> {
        let mut options = CodegenOptions::load(args.config.as_deref())?;
        if args.pathinfo {
            options.runtime.pathinfo = true;
        }
        if args.sequential {
            options.parallel = false;
        }
        debug!(?options, "resolved codegen options");

        let manifest = Manifest::from_path(&args.manifest)?;
        let graph = manifest.build_graph()?;

        Ok(Self {
            runtime: RuntimeTemplate::new(options.runtime.clone()),
            templates: DependencyTemplates::with_defaults(),
            modules: manifest.shared_modules(),
            graph,
            options,
        })
    }

    /// Generate every module, in manifest order.
    pub fn generate(&self) -> Vec<(ModuleId, fob_codegen::Result<GeneratedSource>)> {
        let ctx = GenerateContext::new(&self.runtime, &self.templates, &self.graph);
        JavascriptGenerator::new()
            .with_parallel(self.options.parallel)
            .generate_modules(&self.modules, &ctx)
    }

    /// Print the warnings of every module.
    pub fn report_warnings(&self) {
        for module in &self.modules {
            for warning in module.warnings(&self.graph) {
                crate::ui::warning(&format!("{}: {warning}", module.id));
            }
        }
    }
}

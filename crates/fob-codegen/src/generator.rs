//! Per-module code generation.
//!
//! [`JavascriptGenerator::generate`] walks a module's dependency tree, lets
//! the registered template of every dependency edit the source and collect
//! init fragments, then prepends the merged fragments to the edited source.

use std::borrow::Cow;
use std::cell::RefCell;
use std::sync::Arc;

use fob_graph::{DependenciesBlock, Dependency, HashUpdate, Module, ModuleGraph, ModuleId};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::error::{CodegenError, Result};
use crate::init_fragment::{InitFragment, merge_init_fragments};
use crate::registry::DependencyTemplates;
use crate::runtime::RuntimeTemplate;
use crate::source::{ConcatSource, RawSource, ReplaceSource, Source};
use crate::template::TemplateContext;

/// Stub body emitted for modules without original source.
pub const NO_SOURCE_STUB: &str = "throw new Error('No source available');";

/// Shared inputs of every generation.
///
/// Everything here is read-only, so one context can serve many modules
/// generated in parallel.
#[derive(Debug, Clone, Copy)]
pub struct GenerateContext<'a> {
    pub runtime_template: &'a RuntimeTemplate,
    pub dependency_templates: &'a DependencyTemplates,
    pub module_graph: &'a ModuleGraph,
}

impl<'a> GenerateContext<'a> {
    pub fn new(
        runtime_template: &'a RuntimeTemplate,
        dependency_templates: &'a DependencyTemplates,
        module_graph: &'a ModuleGraph,
    ) -> Self {
        Self {
            runtime_template,
            dependency_templates,
            module_graph,
        }
    }
}

/// Result of generating one module.
#[derive(Debug)]
pub enum GeneratedSource {
    /// Module without original source.
    Raw(RawSource),
    /// Edited source, no init fragments.
    Replace(ReplaceSource),
    /// Init fragments followed by the edited source.
    Concat(ConcatSource),
}

impl Source for GeneratedSource {
    fn source(&self) -> Cow<'_, str> {
        match self {
            Self::Raw(source) => source.source(),
            Self::Replace(source) => source.source(),
            Self::Concat(source) => source.source(),
        }
    }

    fn size(&self) -> usize {
        match self {
            Self::Raw(source) => source.size(),
            Self::Replace(source) => source.size(),
            Self::Concat(source) => source.size(),
        }
    }

    fn update_hash(&self, hash: &mut dyn HashUpdate) {
        match self {
            Self::Raw(source) => source.update_hash(hash),
            Self::Replace(source) => source.update_hash(hash),
            Self::Concat(source) => source.update_hash(hash),
        }
    }
}

/// Generator for JavaScript modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavascriptGenerator {
    parallel: bool,
}

impl JavascriptGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate batches on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Generate the final source of one module.
    ///
    /// Fails when a dependency has no registered template or a template
    /// fails; nothing is returned for the module in that case.
    pub fn generate(&self, module: &Module, ctx: &GenerateContext<'_>) -> Result<GeneratedSource> {
        let Some(original) = &module.original_source else {
            debug!(module = %module.id, "no original source, emitting stub");
            return Ok(GeneratedSource::Raw(RawSource::from(NO_SOURCE_STUB)));
        };

        let mut source = ReplaceSource::new(Arc::clone(original));
        let mut fragments = Vec::new();
        let emitted_imports = RefCell::new(FxHashSet::default());
        let template_ctx = TemplateContext::new(
            ctx.runtime_template,
            ctx.dependency_templates,
            ctx.module_graph,
            module,
            &emitted_imports,
        );

        self.source_block(&module.block, &mut source, &mut fragments, &template_ctx)?;

        debug!(
            module = %module.id,
            edits = source.edit_count(),
            fragments = fragments.len(),
            "generated module"
        );

        if fragments.is_empty() {
            return Ok(GeneratedSource::Replace(source));
        }

        let mut output = ConcatSource::new();
        for fragment in merge_init_fragments(fragments) {
            output.add_str(fragment.content);
        }
        output.add(source);
        Ok(GeneratedSource::Concat(output))
    }

    /// Generate many modules, isolating each module's result.
    ///
    /// Results keep the order of `modules`.
    pub fn generate_modules(
        &self,
        modules: &[Arc<Module>],
        ctx: &GenerateContext<'_>,
    ) -> Vec<(ModuleId, Result<GeneratedSource>)> {
        let generate_one = |module: &Arc<Module>| (module.id.clone(), self.generate(module, ctx));

        if self.parallel {
            modules.par_iter().map(generate_one).collect()
        } else {
            modules.iter().map(generate_one).collect()
        }
    }

    fn source_block(
        &self,
        block: &DependenciesBlock,
        source: &mut ReplaceSource,
        fragments: &mut Vec<InitFragment>,
        ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        for dependency in &block.dependencies {
            self.source_dependency(dependency, source, fragments, ctx)?;
        }

        for child in &block.blocks {
            self.source_block(child, source, fragments, ctx)?;
        }

        Ok(())
    }

    fn source_dependency(
        &self,
        dependency: &Dependency,
        source: &mut ReplaceSource,
        fragments: &mut Vec<InitFragment>,
        ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        let dependency_type = dependency.dependency_type();
        let template = ctx
            .dependency_templates
            .get(dependency_type)
            .ok_or_else(|| CodegenError::missing_template(dependency_type))?;

        trace!(id = %dependency.id, kind = %dependency_type, "applying template");
        template.apply(dependency, source, ctx)?;

        if let Some(produced) = template.init_fragments(dependency, ctx)? {
            fragments.extend(produced);
        }

        Ok(())
    }
}

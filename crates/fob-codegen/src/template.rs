//! Per-dependency template contract.

use std::cell::RefCell;

use fob_graph::{Dependency, DependencyId, Module, ModuleGraph};
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::init_fragment::InitFragment;
use crate::registry::DependencyTemplates;
use crate::runtime::{ResolvedModule, RuntimeTemplate};
use crate::source::ReplaceSource;

/// Handler applying one dependency variant to a module's source.
///
/// Templates are shared by every generation running in parallel, so they
/// hold no per-module state. Anything a template needs to remember across
/// dependencies of one module goes through [`TemplateContext`].
pub trait DependencyTemplate: Send + Sync {
    /// Edit the source in place at the dependency's range(s).
    fn apply(
        &self,
        dependency: &Dependency,
        source: &mut ReplaceSource,
        ctx: &TemplateContext<'_>,
    ) -> Result<()>;

    /// Fragments to hoist ahead of the module body.
    fn init_fragments(
        &self,
        _dependency: &Dependency,
        _ctx: &TemplateContext<'_>,
    ) -> Result<Option<Vec<InitFragment>>> {
        Ok(None)
    }
}

/// Everything a template may read while generating one module.
pub struct TemplateContext<'a> {
    pub runtime_template: &'a RuntimeTemplate,
    pub dependency_templates: &'a DependencyTemplates,
    pub module_graph: &'a ModuleGraph,
    /// Module being generated.
    pub module: &'a Module,
    emitted_imports: &'a RefCell<FxHashSet<String>>,
}

impl<'a> TemplateContext<'a> {
    pub fn new(
        runtime_template: &'a RuntimeTemplate,
        dependency_templates: &'a DependencyTemplates,
        module_graph: &'a ModuleGraph,
        module: &'a Module,
        emitted_imports: &'a RefCell<FxHashSet<String>>,
    ) -> Self {
        Self {
            runtime_template,
            dependency_templates,
            module_graph,
            module,
            emitted_imports,
        }
    }

    /// Module a dependency resolved to, with its exports type when the
    /// module is part of the graph.
    pub fn resolve(&self, dependency: DependencyId) -> Result<Option<ResolvedModule>> {
        let Some(id) = self.module_graph.get_module(dependency)? else {
            return Ok(None);
        };
        let exports_type = self
            .module_graph
            .module(&id)?
            .and_then(|module| module.build_meta.exports_type);
        Ok(Some(ResolvedModule::new(id, exports_type)))
    }

    /// Key identifying an import of a module: the resolved id, or the request
    /// for unresolved imports.
    pub fn import_key(&self, dependency: DependencyId, request: &str) -> Result<String> {
        Ok(self
            .module_graph
            .get_module(dependency)?
            .map_or_else(|| request.to_string(), |id| id.as_str().to_string()))
    }

    /// Record that an import statement was emitted for the current module.
    pub fn mark_import_emitted(&self, key: impl Into<String>) {
        self.emitted_imports.borrow_mut().insert(key.into());
    }

    pub fn is_import_emitted(&self, key: &str) -> bool {
        self.emitted_imports.borrow().contains(key)
    }
}

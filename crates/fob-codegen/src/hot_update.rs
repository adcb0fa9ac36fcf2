//! Hot-update chunk rendering.
//!
//! Downstream of the generator: collects generated module sources into one
//! hot-update payload through three hooks, `modules`, `render` and `hash`.

use std::sync::Arc;

use fob_graph::{HashUpdate, ModuleId};
use tracing::debug;

use crate::config::RuntimeOptions;
use crate::hooks::{SyncHook, SyncWaterfallHook};
use crate::source::{BoxSource, ConcatSource, Source};

/// Version of the hot-update hashing scheme.
const HASH_VERSION: &str = "1";

/// One module of the chunk being rendered.
#[derive(Debug, Clone)]
pub struct ChunkModule {
    pub id: ModuleId,
    /// Generated source; modules without one are skipped.
    pub source: Option<Arc<dyn Source>>,
}

impl ChunkModule {
    pub fn new(id: ModuleId, source: Option<Arc<dyn Source>>) -> Self {
        Self { id, source }
    }
}

/// Modules of one hot-update chunk.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub modules: Vec<ChunkModule>,
}

impl RenderContext {
    pub fn new(modules: Vec<ChunkModule>) -> Self {
        Self { modules }
    }
}

/// Arguments of the `render` hook.
#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub context: RenderContext,
    /// Hash of the compilation being updated.
    pub hash: String,
}

#[derive(Debug, Default)]
pub struct HotUpdateChunkTemplateHooks {
    /// Folds the collected module sources.
    pub modules: SyncWaterfallHook<BoxSource, RenderContext>,
    /// Folds the core source into the final payload.
    pub render: SyncWaterfallHook<BoxSource, RenderArgs>,
    /// Extra contributions to the template hash.
    pub hash: SyncHook<dyn HashUpdate>,
}

/// Renders hot-update chunks.
#[derive(Debug, Default)]
pub struct HotUpdateChunkTemplate {
    options: RuntimeOptions,
    pub hooks: HotUpdateChunkTemplateHooks,
}

impl HotUpdateChunkTemplate {
    pub fn new(options: RuntimeOptions) -> Self {
        Self {
            options,
            hooks: HotUpdateChunkTemplateHooks::default(),
        }
    }

    /// Render the chunk: module sources, then the `modules` and `render`
    /// hooks.
    pub fn render(&self, context: &RenderContext, hash: &str) -> BoxSource {
        let modules_source = self.render_chunk_modules(context);
        let core = self.hooks.modules.call(Box::new(modules_source), context);

        let args = RenderArgs {
            context: context.clone(),
            hash: hash.to_string(),
        };
        self.hooks.render.call(core, &args)
    }

    /// Feed the template identity into a hash, then every `hash` tap.
    pub fn update_hash<H: HashUpdate + 'static>(&self, hash: &mut H) {
        hash.update("HotUpdateChunkTemplate");
        hash.update(HASH_VERSION);
        self.hooks.hash.call(hash);
    }

    /// Object literal mapping module ids to module factories, ordered by id.
    fn render_chunk_modules(&self, context: &RenderContext) -> ConcatSource {
        let mut modules: Vec<(&ModuleId, &Arc<dyn Source>)> = context
            .modules
            .iter()
            .filter_map(|module| module.source.as_ref().map(|source| (&module.id, source)))
            .collect();
        modules.sort_by(|a, b| a.0.cmp(b.0));

        debug!(
            modules = modules.len(),
            skipped = context.modules.len() - modules.len(),
            "rendering hot update chunk"
        );

        let require = &self.options.require_function;
        let mut output = ConcatSource::new();
        output.add_str("{\n");
        for (id, source) in modules {
            output.add_str(format!(
                "/***/ {}:\n/***/ (function(module, exports, {require}) {{\n\n",
                serde_json::Value::String(id.to_string())
            ));
            output.add(SharedSource(Arc::clone(source)));
            output.add_str("\n\n/***/ }),\n");
        }
        output.add_str("}");
        output
    }
}

/// Adapter letting a shared source join a concatenation.
#[derive(Debug)]
struct SharedSource(Arc<dyn Source>);

impl Source for SharedSource {
    fn source(&self) -> std::borrow::Cow<'_, str> {
        self.0.source()
    }

    fn size(&self) -> usize {
        self.0.size()
    }

    fn update_hash(&self, hash: &mut dyn HashUpdate) {
        self.0.update_hash(hash);
    }
}

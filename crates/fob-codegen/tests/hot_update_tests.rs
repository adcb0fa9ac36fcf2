//! Hot-update chunks assembled from generated modules.

use std::sync::Arc;

use fob_codegen::{
    BoxSource, ChunkModule, ConcatSource, DependencyTemplates, GenerateContext,
    HotUpdateChunkTemplate, JavascriptGenerator, RenderContext, RuntimeOptions, RuntimeTemplate,
    Source,
};
use fob_graph::{
    ConstDependency, ContentHasher, Dependency, DependencyId, DependencyKind, HashUpdate, Module,
    ModuleGraph, ModuleId, SourceRange,
};

fn chunk_from(modules: &[Arc<Module>], graph: &ModuleGraph) -> RenderContext {
    let runtime = RuntimeTemplate::default();
    let templates = DependencyTemplates::with_defaults();
    let ctx = GenerateContext::new(&runtime, &templates, graph);

    let chunk_modules = JavascriptGenerator::new()
        .generate_modules(modules, &ctx)
        .into_iter()
        .map(|(id, result)| {
            let source = result.ok().map(|source| Arc::new(source) as Arc<dyn Source>);
            ChunkModule::new(id, source)
        })
        .collect();
    RenderContext::new(chunk_modules)
}

#[test]
fn renders_generated_modules() {
    let graph = ModuleGraph::new().unwrap();
    let modules = vec![
        Arc::new(
            Module::builder(ModuleId::new_virtual("b.js"))
                .source("if (DEBUG) b();")
                .dependency(Dependency::new(
                    DependencyId::new(1),
                    DependencyKind::Const(ConstDependency::new("false", SourceRange::new(4, 9))),
                ))
                .build(),
        ),
        Arc::new(
            Module::builder(ModuleId::new_virtual("a.js"))
                .source("a();")
                .build(),
        ),
    ];

    let template = HotUpdateChunkTemplate::default();
    let rendered = template.render(&chunk_from(&modules, &graph), "deadbeef");
    assert_eq!(
        rendered.source(),
        "{\n\
         /***/ \"virtual:a.js\":\n/***/ (function(module, exports, __webpack_require__) {\n\na();\n\n/***/ }),\n\
         /***/ \"virtual:b.js\":\n/***/ (function(module, exports, __webpack_require__) {\n\nif (false) b();\n\n/***/ }),\n\
         }"
    );
}

#[test]
fn custom_require_function_names_factory_argument() {
    let template = HotUpdateChunkTemplate::new(RuntimeOptions {
        require_function: "__fob_require__".to_string(),
        ..RuntimeOptions::default()
    });
    let context = RenderContext::new(vec![ChunkModule::new(
        ModuleId::new_virtual("a.js"),
        Some(Arc::new(fob_codegen::RawSource::from("a();"))),
    )]);

    let rendered = template.render(&context, "h");
    assert!(
        rendered
            .source()
            .contains("(function(module, exports, __fob_require__) {")
    );
}

#[test]
fn render_hook_wraps_payload_with_hash() {
    let mut template = HotUpdateChunkTemplate::default();
    template.hooks.render.tap("JsonpHotUpdate", |source: BoxSource, args| {
        let mut wrapped = ConcatSource::new();
        wrapped.add_str(format!("webpackHotUpdate({:?},", args.hash));
        wrapped.add(source);
        wrapped.add_str(")");
        Box::new(wrapped) as BoxSource
    });

    let rendered = template.render(&RenderContext::default(), "0a1b");
    assert_eq!(rendered.source(), "webpackHotUpdate(\"0a1b\",{\n})");
}

#[test]
fn hash_is_versioned_and_extensible() {
    let plain = HotUpdateChunkTemplate::default();
    let mut extended = HotUpdateChunkTemplate::default();
    extended
        .hooks
        .hash
        .tap("JsonpHotUpdate", |hash| hash.update("JsonpHotUpdate"));

    let mut expected = ContentHasher::new();
    expected.update("HotUpdateChunkTemplate");
    expected.update("1");

    let mut plain_hash = ContentHasher::new();
    plain.update_hash(&mut plain_hash);
    let mut extended_hash = ContentHasher::new();
    extended.update_hash(&mut extended_hash);

    let plain_digest = plain_hash.digest_hex();
    assert_eq!(plain_digest, expected.digest_hex());
    assert_ne!(plain_digest, extended_hash.digest_hex());
}

//! Smoke tests for fob-graph.
//!
//! Fast, deterministic tests over the graph API as a whole. Single-type
//! behaviour is tested next to the type.

use crate::{
    ContentHasher, ContextDependency, ContextOptions, ContextRegExp, Dependency, DependencyId,
    DependenciesBlock, DependencyKind, DependencyWarning, Error,
    HarmonyImportDependency, HashUpdate, ImportDependency, Module, ModuleDecoratorDependency,
    ModuleGraph, ModuleId, SourceRange, WebAssemblyExportImportedDependency,
};

fn import(id: u32, request: &str) -> Dependency {
    Dependency::new(
        DependencyId::new(id),
        DependencyKind::Import(ImportDependency::new(request, SourceRange::new(0, 10))),
    )
}

#[test]
fn set_resolved_module_records_connection() {
    let graph = ModuleGraph::new().expect("Failed to create graph");
    let origin = ModuleId::new_virtual("a.js");
    let target = ModuleId::new_virtual("b.js");
    let dep = import(1, "./b");

    graph
        .set_resolved_module(Some(origin.clone()), &dep, target.clone())
        .unwrap();

    let connection = graph.connection(dep.id).unwrap().expect("connection");
    assert_eq!(connection.origin_module(), Some(&origin));
    assert_eq!(connection.dependency(), Some(dep.id));
    assert_eq!(connection.resolved_module(), &target);
    assert_eq!(graph.get_module(dep.id).unwrap(), Some(target.clone()));

    assert_eq!(graph.outgoing_connections(&origin).unwrap().len(), 1);
    assert_eq!(graph.incoming_connections(&target).unwrap().len(), 1);
    assert!(graph.incoming_connections(&origin).unwrap().is_empty());
}

#[test]
fn explanations_accumulate_on_dependency_edge() {
    let graph = ModuleGraph::new().unwrap();
    let dep = import(3, "./b");
    graph
        .set_resolved_module(None, &dep, ModuleId::new_virtual("b.js"))
        .unwrap();

    graph.add_explanation(dep.id, "x").unwrap();
    graph.add_explanation(dep.id, "y").unwrap();
    graph.add_explanation(dep.id, "x").unwrap();

    let connection = graph.connection(dep.id).unwrap().unwrap();
    assert_eq!(connection.explanation(), "x y");
}

#[test]
fn re_resolving_replaces_connection() {
    let graph = ModuleGraph::new().unwrap();
    let dep = import(4, "./b");
    graph
        .set_resolved_module(None, &dep, ModuleId::new_virtual("b.js"))
        .unwrap();
    graph.add_explanation(dep.id, "first").unwrap();

    graph
        .set_resolved_module(None, &dep, ModuleId::new_virtual("c.js"))
        .unwrap();

    let connection = graph.connection(dep.id).unwrap().unwrap();
    assert_eq!(connection.resolved_module().as_str(), "virtual:c.js");
    assert_eq!(connection.explanation(), "");
}

#[test]
fn explanation_for_unknown_dependency_fails() {
    let graph = ModuleGraph::new().unwrap();
    let err = graph
        .add_explanation(DependencyId::new(99), "why")
        .unwrap_err();

    assert!(matches!(err, Error::UnknownDependency(id) if id.as_u32() == 99));
    assert_eq!(err.to_string(), "No connection recorded for dependency 99");
}

#[test]
fn entry_connections_have_no_origin() {
    let graph = ModuleGraph::new().unwrap();
    let main = ModuleId::new_virtual("main.js");
    graph
        .add_entry_connection(main.clone(), Some("entry".to_string()))
        .unwrap();

    let entries = graph.entry_connections().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].origin_module().is_none());
    assert!(entries[0].dependency().is_none());
    assert_eq!(entries[0].explanation(), "entry");
    assert_eq!(graph.incoming_connections(&main).unwrap().len(), 1);
}

#[test]
fn clones_share_state() {
    let graph = ModuleGraph::new().unwrap();
    let other = graph.clone();

    let id = ModuleId::new("src/index.js").unwrap();
    other.add_module(Module::builder(id.clone()).build()).unwrap();

    assert!(graph.contains(&id).unwrap());
    assert_eq!(graph.len().unwrap(), 1);
    assert!(!graph.is_empty().unwrap());
}

#[test]
fn wasm_reference_waits_for_resolution() {
    let graph = ModuleGraph::new().unwrap();
    let wasm = WebAssemblyExportImportedDependency::new("add", "./math.js", "sum");
    let dep = Dependency::new(
        DependencyId::new(5),
        DependencyKind::WebAssemblyExportImported(wasm.clone()),
    );

    assert_eq!(wasm.reference(dep.id, &graph).unwrap(), None);

    graph
        .set_resolved_module(None, &dep, ModuleId::new_virtual("math.js"))
        .unwrap();
    let reference = wasm.reference(dep.id, &graph).unwrap().unwrap();
    assert_eq!(reference.module.as_str(), "virtual:math.js");
    assert_eq!(reference.imported_names, vec!["sum".to_string()]);
    assert!(!reference.weak);
}

#[test]
fn module_collects_warnings_from_nested_blocks() {
    let graph = ModuleGraph::new().unwrap();
    let context = Dependency::new(
        DependencyId::new(1),
        DependencyKind::Context(ContextDependency::new(ContextOptions {
            request: "./locale".to_string(),
            reg_exp: Some(ContextRegExp::new("json$", "g")),
            ..Default::default()
        })),
    );

    let module = Module::builder(ModuleId::new_virtual("a.js"))
        .source("require('./locale/' + name)")
        .nested_block(DependenciesBlock::new().with_dependency(context))
        .build();

    assert_eq!(
        module.warnings(&graph),
        vec![DependencyWarning::critical(
            "Contexts can't use RegExps with the 'g' or 'y' flags."
        )]
    );
}

#[test]
fn module_hash_feeds_resolved_ids_in_order() {
    let graph = ModuleGraph::new().unwrap();
    let origin = ModuleId::new_virtual("a.js");
    let decorator = Dependency::new(
        DependencyId::new(1),
        DependencyKind::ModuleDecorator(ModuleDecoratorDependency::new(
            "webpack/buildin/harmony-module.js",
            origin.clone(),
        )),
    );
    let harmony = Dependency::new(
        DependencyId::new(2),
        DependencyKind::HarmonyImport(HarmonyImportDependency::new(
            "./b",
            0,
            SourceRange::new(0, 20),
        )),
    );
    let unresolved = import(3, "./missing");

    graph
        .set_resolved_module(
            Some(origin.clone()),
            &decorator,
            ModuleId::new_virtual("harmony-module.js"),
        )
        .unwrap();
    graph
        .set_resolved_module(Some(origin.clone()), &harmony, ModuleId::new_virtual("b.js"))
        .unwrap();

    let module = Module::builder(origin)
        .dependency(decorator)
        .dependency(harmony)
        .dependency(unresolved)
        .build();

    let mut updates: Vec<String> = Vec::new();
    module.update_hash(&mut updates, &graph).unwrap();
    assert_eq!(
        updates,
        vec![
            "virtual:harmony-module.js",
            "module decorator",
            "virtual:b.js",
        ]
    );

    let mut first = ContentHasher::new();
    let mut second = ContentHasher::new();
    module.update_hash(&mut first, &graph).unwrap();
    module.update_hash(&mut second, &graph).unwrap();
    assert_eq!(first.digest_hex(), second.digest_hex());
}

#[test]
fn hash_update_records_into_vec() {
    let mut updates: Vec<String> = Vec::new();
    HashUpdate::update(&mut updates, "a");
    assert_eq!(updates, vec!["a"]);
}

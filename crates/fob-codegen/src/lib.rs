//! # fob-codegen
//!
//! Per-module JavaScript code generation on top of [`fob_graph`].
//!
//! ## Overview
//!
//! A module's original source is never rewritten directly. Instead:
//!
//! 1. a [`ReplaceSource`] records edits in original-source coordinates
//! 2. each dependency of the module is dispatched to the
//!    [`DependencyTemplate`] registered for its variant
//! 3. templates edit the source and may emit [`InitFragment`]s
//! 4. fragments are merged (sorted by stage and position, deduplicated by
//!    key) and prepended to the edited source
//!
//! Generated module sources can then be packed into a hot-update payload by
//! [`HotUpdateChunkTemplate`], whose `modules`, `render` and `hash` hooks
//! let extensions wrap the output.
//!
//! ## Quick Start
//!
//! ```rust
//! use fob_codegen::{
//!     DependencyTemplates, GenerateContext, JavascriptGenerator, RuntimeTemplate, Source,
//! };
//! use fob_graph::{
//!     ConstDependency, Dependency, DependencyId, DependencyKind, Module, ModuleGraph, ModuleId,
//!     SourceRange,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let module = Module::builder(ModuleId::new_virtual("entry.js"))
//!     .source("if (DEBUG) log();")
//!     .dependency(Dependency::new(
//!         DependencyId::new(1),
//!         DependencyKind::Const(ConstDependency::new("false", SourceRange::new(4, 9))),
//!     ))
//!     .build();
//!
//! let graph = ModuleGraph::new()?;
//! let runtime = RuntimeTemplate::default();
//! let templates = DependencyTemplates::with_defaults();
//! let ctx = GenerateContext::new(&runtime, &templates, &graph);
//!
//! let generated = JavascriptGenerator::new().generate(&module, &ctx)?;
//! assert_eq!(generated.source(), "if (false) log();");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Templates and the registry are immutable once built and shared across
//! threads. Per-module state (the set of emitted imports) lives for a single
//! [`JavascriptGenerator::generate`] call, so
//! [`JavascriptGenerator::generate_modules`] can run modules in parallel.
//!
//! ## Logging
//!
//! The crate only emits `tracing` events: debug per generated module, trace
//! per dependency template. Applications install their own subscriber, as the
//! `fob-codegen` binary does.

pub mod config;
pub mod error;
pub mod generator;
pub mod hooks;
pub mod hot_update;
pub mod init_fragment;
pub mod registry;
pub mod runtime;
pub mod source;
pub mod template;
pub mod templates;

pub use config::{CodegenOptions, RuntimeOptions};
pub use error::{CodegenError, Result};
pub use generator::{GenerateContext, GeneratedSource, JavascriptGenerator, NO_SOURCE_STUB};
pub use hooks::{SyncHook, SyncWaterfallHook};
pub use hot_update::{
    ChunkModule, HotUpdateChunkTemplate, HotUpdateChunkTemplateHooks, RenderArgs, RenderContext,
};
pub use init_fragment::{FragmentKey, InitFragment, InitFragmentStage, merge_init_fragments};
pub use registry::{DependencyTemplates, DependencyTemplatesBuilder};
pub use runtime::{ResolvedModule, RuntimeTemplate};
pub use source::{Anchor, BoxSource, ConcatSource, RawSource, ReplaceSource, Source};
pub use template::{DependencyTemplate, TemplateContext};

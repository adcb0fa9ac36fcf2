//! # fob-graph
//!
//! Data model for per-module code generation: modules, their dependency trees,
//! and the edges of the module graph together with the reasons they exist.
//!
//! ## Overview
//!
//! `fob-graph` holds everything the code generator reads but never mutates:
//!
//! - **Modules**: original source text, build metadata and the root
//!   [`DependenciesBlock`]
//! - **Dependencies**: a closed set of variants ([`DependencyKind`]) that
//!   expose capabilities through small traits ([`HasRequest`], [`HasRange`],
//!   [`ProducesWarnings`]) instead of a class hierarchy
//! - **Connections**: [`ModuleGraphConnection`] records one directed edge and
//!   an insertion-ordered, deduplicated set of explanations
//! - **Graph**: [`ModuleGraph`], an `Arc`-shared in-memory store resolving
//!   dependencies to the modules they reference
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    ModuleGraph                              │
//! │  (Arc<RwLock>, cheap to clone, safe to read concurrently)   │
//! └────────────────────┬────────────────────────────────────────┘
//!                      │
//!          ┌───────────┴───────────┐
//!          ▼                       ▼
//!    ┌──────────┐        ┌───────────────────────┐
//!    │  Module  │        │ ModuleGraphConnection │
//!    │  (Node)  │        │ (Edge + explanations) │
//!    └────┬─────┘        └───────────────────────┘
//!         │
//!         ▼
//!   DependenciesBlock ──► Dependency { id, kind }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use fob_graph::{
//!     Dependency, DependencyId, DependencyKind, ImportDependency, Module, ModuleGraph,
//!     ModuleId, SourceRange,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ModuleGraph::new()?;
//!
//! let lazy = ModuleId::new_virtual("lazy.js");
//! let import = Dependency::new(
//!     DependencyId::new(1),
//!     DependencyKind::Import(ImportDependency::new("./lazy", SourceRange::new(10, 24))),
//! );
//!
//! let entry = Module::builder(ModuleId::new_virtual("entry.js"))
//!     .source("const load = import('./lazy');")
//!     .dependency(import.clone())
//!     .build();
//!
//! graph.add_module(entry.clone())?;
//! graph.set_resolved_module(Some(entry.id.clone()), &import, lazy.clone())?;
//! graph.add_explanation(import.id, "import() in entry.js")?;
//!
//! assert_eq!(graph.get_module(import.id)?, Some(lazy));
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! `ModuleGraph` uses `Arc<RwLock<_>>` internally. Multiple threads can read
//! from the graph concurrently while modules are generated in parallel.

// Core graph types and primitives
pub mod block;
pub mod connection;
pub mod dependency;
pub mod hash;
pub mod identifier;
pub mod module;
pub mod module_id;
pub mod span;
pub mod warning;

// ModuleGraph implementation
// In-memory implementation
mod memory;

pub use memory::ModuleGraph;

pub use block::DependenciesBlock;
pub use connection::ModuleGraphConnection;
pub use dependency::{
    ConstDependency, ContextDependency, ContextMode, ContextOptions, ContextRegExp, Dependency,
    DependencyId, DependencyKind, DependencyReference, DependencyType, HarmonyAcceptDependency,
    HarmonyAcceptImportDependency, HarmonyImportDependency, HasRange, HasRequest,
    ImportDependency, ModuleDecoratorDependency, ProducesWarnings,
    WebAssemblyExportImportedDependency, validate_reg_exp,
};
pub use hash::{ContentHasher, HashUpdate};
pub use module::{BuildMeta, ExportsType, Module, ModuleBuilder};
pub use module_id::{ModuleId, ModuleIdError};
pub use span::SourceRange;
pub use warning::DependencyWarning;

/// Error types for graph operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dependency was referenced that has no connection in the graph.
    #[error("No connection recorded for dependency {0}")]
    UnknownDependency(DependencyId),

    /// Module identifier could not be constructed.
    #[error("Invalid module id: {0}")]
    InvalidModuleId(#[from] ModuleIdError),

    /// Graph operation error.
    #[error("Operation error: {0}")]
    Operation(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;

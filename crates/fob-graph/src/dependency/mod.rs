//! Dependency variants.
//!
//! A dependency is one reference from a module to something else: another
//! module, a dynamic import, an export binding. Dependencies are created by
//! the parser and are read-only afterwards.
//!
//! Instead of a class hierarchy, every dependency is a [`Dependency`] record
//! holding an id and a [`DependencyKind`] payload. Shared behaviour is exposed
//! through small capability traits:
//!
//! - [`HasRequest`] - the request string, when the variant references a module
//! - [`HasRange`] - the primary byte range into the original source
//! - [`ProducesWarnings`] - warnings surfaced through the module
//!
//! The payload-free [`DependencyType`] tag is what template registries are
//! keyed by, so adding a variant forces every exhaustive `match` to handle it.

mod constant;
mod context;
mod decorator;
mod harmony;
mod import;
mod wasm;

pub use constant::ConstDependency;
pub use context::{ContextDependency, ContextMode, ContextOptions, ContextRegExp, validate_reg_exp};
pub use decorator::ModuleDecoratorDependency;
pub use harmony::{HarmonyAcceptDependency, HarmonyAcceptImportDependency, HarmonyImportDependency};
pub use import::ImportDependency;
pub use wasm::{DependencyReference, WebAssemblyExportImportedDependency};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::HashUpdate;
use crate::memory::ModuleGraph;
use crate::span::SourceRange;
use crate::warning::DependencyWarning;
use crate::Result;

/// Identity of a dependency inside the module graph.
///
/// Assigned by whoever produces the dependency tree; the graph resolves
/// dependencies to modules by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyId(u32);

impl DependencyId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload-free tag of a dependency variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyType {
    Context,
    Import,
    ModuleDecorator,
    HarmonyImport,
    HarmonyAccept,
    HarmonyAcceptImport,
    WebAssemblyExportImported,
    Const,
}

impl DependencyType {
    /// Every variant tag, in declaration order.
    pub const ALL: [DependencyType; 8] = [
        Self::Context,
        Self::Import,
        Self::ModuleDecorator,
        Self::HarmonyImport,
        Self::HarmonyAccept,
        Self::HarmonyAcceptImport,
        Self::WebAssemblyExportImported,
        Self::Const,
    ];

    /// Human readable dependency type as shown in stats and explanations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Import => "import()",
            Self::ModuleDecorator => "module decorator",
            Self::HarmonyImport => "harmony import",
            Self::HarmonyAccept => "accepted harmony modules",
            Self::HarmonyAcceptImport => "harmony accept",
            Self::WebAssemblyExportImported => "wasm export import",
            Self::Const => "const",
        }
    }

    /// Variant name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Context => "ContextDependency",
            Self::Import => "ImportDependency",
            Self::ModuleDecorator => "ModuleDecoratorDependency",
            Self::HarmonyImport => "HarmonyImportDependency",
            Self::HarmonyAccept => "HarmonyAcceptDependency",
            Self::HarmonyAcceptImport => "HarmonyAcceptImportDependency",
            Self::WebAssemblyExportImported => "WebAssemblyExportImportedDependency",
            Self::Const => "ConstDependency",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload of a dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DependencyKind {
    Context(ContextDependency),
    Import(ImportDependency),
    ModuleDecorator(ModuleDecoratorDependency),
    HarmonyImport(HarmonyImportDependency),
    HarmonyAccept(HarmonyAcceptDependency),
    HarmonyAcceptImport(HarmonyAcceptImportDependency),
    #[serde(rename = "wasm_export_imported")]
    WebAssemblyExportImported(WebAssemblyExportImportedDependency),
    Const(ConstDependency),
}

/// One reference from a module, as produced by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: DependencyId,
    #[serde(flatten)]
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn new(id: DependencyId, kind: DependencyKind) -> Self {
        Self { id, kind }
    }

    /// Tag used for template dispatch.
    pub fn dependency_type(&self) -> DependencyType {
        match &self.kind {
            DependencyKind::Context(_) => DependencyType::Context,
            DependencyKind::Import(_) => DependencyType::Import,
            DependencyKind::ModuleDecorator(_) => DependencyType::ModuleDecorator,
            DependencyKind::HarmonyImport(_) => DependencyType::HarmonyImport,
            DependencyKind::HarmonyAccept(_) => DependencyType::HarmonyAccept,
            DependencyKind::HarmonyAcceptImport(_) => DependencyType::HarmonyAcceptImport,
            DependencyKind::WebAssemblyExportImported(_) => {
                DependencyType::WebAssemblyExportImported
            }
            DependencyKind::Const(_) => DependencyType::Const,
        }
    }

    /// Identifier under which otherwise identical dependencies may be merged.
    ///
    /// Only context dependencies participate in merging.
    pub fn resource_identifier(&self) -> Option<String> {
        match &self.kind {
            DependencyKind::Context(dep) => Some(dep.resource_identifier()),
            _ => None,
        }
    }

    /// Whether the dependency disables optimisations that need static analysis.
    pub fn is_critical(&self) -> bool {
        match &self.kind {
            DependencyKind::Context(dep) => dep.is_critical(),
            _ => false,
        }
    }

    /// Feed this dependency's contribution into a build hash.
    ///
    /// Every dependency contributes the id of the module it resolved to (if
    /// any); some variants add a fixed marker on top.
    pub fn update_hash(&self, hash: &mut dyn HashUpdate, graph: &ModuleGraph) -> Result<()> {
        if let Some(module) = graph.get_module(self.id)? {
            hash.update(module.as_str());
        }

        if let DependencyKind::ModuleDecorator(_) = &self.kind {
            hash.update("module decorator");
        }

        Ok(())
    }
}

/// Dependencies that reference another module by request string.
pub trait HasRequest {
    fn request(&self) -> Option<&str>;
}

/// Dependencies that own a byte range into the original source.
pub trait HasRange {
    fn range(&self) -> Option<SourceRange>;
}

/// Dependencies that report warnings through their module.
pub trait ProducesWarnings {
    fn warnings(&self, _graph: &ModuleGraph) -> Vec<DependencyWarning> {
        Vec::new()
    }
}

impl HasRequest for Dependency {
    fn request(&self) -> Option<&str> {
        match &self.kind {
            DependencyKind::Context(dep) => dep.request(),
            DependencyKind::Import(dep) => dep.request(),
            DependencyKind::ModuleDecorator(dep) => dep.request(),
            DependencyKind::HarmonyImport(dep) => dep.request(),
            DependencyKind::HarmonyAccept(_) => None,
            DependencyKind::HarmonyAcceptImport(dep) => dep.request(),
            DependencyKind::WebAssemblyExportImported(dep) => dep.request(),
            DependencyKind::Const(_) => None,
        }
    }
}

impl HasRange for Dependency {
    fn range(&self) -> Option<SourceRange> {
        match &self.kind {
            DependencyKind::Context(dep) => dep.range(),
            DependencyKind::Import(dep) => dep.range(),
            DependencyKind::ModuleDecorator(_) => None,
            DependencyKind::HarmonyImport(dep) => dep.range(),
            DependencyKind::HarmonyAccept(dep) => dep.range(),
            DependencyKind::HarmonyAcceptImport(_) => None,
            DependencyKind::WebAssemblyExportImported(_) => None,
            DependencyKind::Const(dep) => dep.range(),
        }
    }
}

impl ProducesWarnings for Dependency {
    fn warnings(&self, graph: &ModuleGraph) -> Vec<DependencyWarning> {
        match &self.kind {
            DependencyKind::Context(dep) => dep.warnings(graph),
            _ => Vec::new(),
        }
    }
}

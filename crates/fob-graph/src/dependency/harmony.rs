use serde::{Deserialize, Serialize};

use super::{Dependency, DependencyKind, HasRange, HasRequest};
use crate::identifier::to_identifier;
use crate::span::SourceRange;

fn import_var(request: &str, source_order: u32) -> String {
    format!(
        "{}__WEBPACK_IMPORTED_MODULE_{}__",
        to_identifier(request),
        source_order
    )
}

/// Static `import` declaration.
///
/// `source_order` is the declaration's position among the module's imports;
/// it orders the hoisted import statements and names the import variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyImportDependency {
    pub request: String,
    pub source_order: u32,
    pub range: SourceRange,
}

impl HarmonyImportDependency {
    pub fn new(request: impl Into<String>, source_order: u32, range: SourceRange) -> Self {
        Self {
            request: request.into(),
            source_order,
            range,
        }
    }

    /// Variable the imported module's exports are bound to.
    pub fn import_var(&self) -> String {
        import_var(&self.request, self.source_order)
    }
}

impl HasRequest for HarmonyImportDependency {
    fn request(&self) -> Option<&str> {
        Some(&self.request)
    }
}

impl HasRange for HarmonyImportDependency {
    fn range(&self) -> Option<SourceRange> {
        Some(self.range)
    }
}

/// A module listed in a `module.hot.accept(...)` call.
///
/// Shares `source_order` with the matching import so that the re-import on
/// update rebinds the same variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyAcceptImportDependency {
    pub request: String,
    pub source_order: u32,
}

impl HarmonyAcceptImportDependency {
    pub fn new(request: impl Into<String>, source_order: u32) -> Self {
        Self {
            request: request.into(),
            source_order,
        }
    }

    pub fn import_var(&self) -> String {
        import_var(&self.request, self.source_order)
    }
}

impl HasRequest for HarmonyAcceptImportDependency {
    fn request(&self) -> Option<&str> {
        Some(&self.request)
    }
}

/// A `module.hot.accept(...)` call accepting updates of imported modules.
///
/// `dependencies` holds the accept-import dependencies to re-execute on
/// update. `has_callback` is true when `range` wraps a user callback; when
/// false `range` covers the whole call and a callback is synthesised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyAcceptDependency {
    pub range: SourceRange,
    pub dependencies: Vec<Dependency>,
    pub has_callback: bool,
}

impl HarmonyAcceptDependency {
    pub fn new(range: SourceRange, dependencies: Vec<Dependency>, has_callback: bool) -> Self {
        Self {
            range,
            dependencies,
            has_callback,
        }
    }

    /// Accepted imports paired with their dependency, skipping other kinds.
    pub fn accepted_imports(
        &self,
    ) -> impl Iterator<Item = (&Dependency, &HarmonyAcceptImportDependency)> {
        self.dependencies.iter().filter_map(|dep| match &dep.kind {
            DependencyKind::HarmonyAcceptImport(import) => Some((dep, import)),
            _ => None,
        })
    }
}

impl HasRange for HarmonyAcceptDependency {
    fn range(&self) -> Option<SourceRange> {
        Some(self.range)
    }
}

use serde::{Deserialize, Serialize};

use super::{DependencyId, HasRequest};
use crate::memory::ModuleGraph;
use crate::module_id::ModuleId;
use crate::Result;

/// Resolved target of a dependency together with the names it uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReference {
    pub module: ModuleId,
    pub imported_names: Vec<String>,
    pub weak: bool,
}

/// A WebAssembly module export that is re-exported from an imported JS module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAssemblyExportImportedDependency {
    pub export_name: String,
    pub request: String,
    pub name: String,
}

impl WebAssemblyExportImportedDependency {
    pub fn new(
        export_name: impl Into<String>,
        request: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            export_name: export_name.into(),
            request: request.into(),
            name: name.into(),
        }
    }

    /// The referenced module and binding.
    ///
    /// Returns `Ok(None)` while the dependency has not been resolved. That is
    /// a normal state during graph construction, not an error.
    pub fn reference(
        &self,
        id: DependencyId,
        graph: &ModuleGraph,
    ) -> Result<Option<DependencyReference>> {
        let Some(module) = graph.get_module(id)? else {
            return Ok(None);
        };

        Ok(Some(DependencyReference {
            module,
            imported_names: vec![self.name.clone()],
            weak: false,
        }))
    }
}

impl HasRequest for WebAssemblyExportImportedDependency {
    fn request(&self) -> Option<&str> {
        Some(&self.request)
    }
}

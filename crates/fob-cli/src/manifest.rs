//! JSON module manifest.
//!
//! A manifest stands in for the parser and resolver: it lists modules with
//! their dependency trees, and the connections recording what each
//! dependency resolved to.
//!
//! ```json
//! {
//!   "modules": [
//!     {
//!       "id": "virtual:entry.js",
//!       "original_source": "const lazy = import('./lazy');",
//!       "block": {
//!         "dependencies": [
//!           { "id": 1, "type": "import", "request": "./lazy",
//!             "block_range": { "start": 13, "end": 29 } }
//!         ]
//!       }
//!     }
//!   ],
//!   "connections": [
//!     { "dependency": 1, "module": "virtual:lazy.js", "explanations": ["import()"] }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use fob_graph::{Dependency, DependencyId, DependencyKind, Module, ModuleGraph, ModuleId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, Result};

/// Resolution of one dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestConnection {
    pub dependency: DependencyId,
    pub module: ModuleId,
    #[serde(default)]
    pub explanations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub connections: Vec<ManifestConnection>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::ManifestNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let manifest: Self =
            serde_json::from_str(&content).map_err(|source| CliError::InvalidManifest {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            path = %path.display(),
            modules = manifest.modules.len(),
            connections = manifest.connections.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Build the module graph: every module, then every connection with its
    /// explanations.
    ///
    /// The origin of a connection is the module declaring the dependency.
    /// Imports listed inside a hot-accept call count as declared by the
    /// module holding the call.
    pub fn build_graph(&self) -> Result<ModuleGraph> {
        let graph = ModuleGraph::from_modules(self.modules.iter().cloned())?;

        let mut declared: HashMap<DependencyId, (&ModuleId, &Dependency)> = HashMap::new();
        for module in &self.modules {
            for dependency in module.dependencies() {
                declared.insert(dependency.id, (&module.id, dependency));
                if let DependencyKind::HarmonyAccept(accept) = &dependency.kind {
                    for accepted in &accept.dependencies {
                        declared.insert(accepted.id, (&module.id, accepted));
                    }
                }
            }
        }

        for connection in &self.connections {
            let (origin, dependency) = declared
                .get(&connection.dependency)
                .copied()
                .ok_or(CliError::UnknownDependency(connection.dependency))?;

            graph.set_resolved_module(Some(origin.clone()), dependency, connection.module.clone())?;
            for explanation in &connection.explanations {
                graph.add_explanation(dependency.id, explanation)?;
            }
        }

        Ok(graph)
    }

    /// Modules in manifest order, shared for batch generation.
    pub fn shared_modules(&self) -> Vec<Arc<Module>> {
        self.modules.iter().cloned().map(Arc::new).collect()
    }
}

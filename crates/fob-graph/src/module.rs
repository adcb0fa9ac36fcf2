use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::block::DependenciesBlock;
use super::dependency::{Dependency, ProducesWarnings};
use super::hash::HashUpdate;
use super::memory::ModuleGraph;
use super::warning::DependencyWarning;
use super::ModuleId;
use crate::Result;

/// Shape of a module's exports as determined at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportsType {
    /// ECMAScript module namespace object
    Namespace,
    /// Object with named exports but no namespace semantics (e.g. JSON)
    Named,
}

/// Build metadata consulted by templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildMeta {
    /// The module is an ES module that must not receive CommonJS interop.
    #[serde(default)]
    pub strict_harmony_module: bool,
    #[serde(default)]
    pub exports_type: Option<ExportsType>,
}

/// A module as seen by code generation.
///
/// The original source is shared through `Arc<str>` so cloning a module to
/// hand it to another thread stays cheap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    #[serde(default)]
    pub original_source: Option<Arc<str>>,
    #[serde(default)]
    pub build_meta: BuildMeta,
    /// Name of the `module` parameter inside the generated module factory.
    #[serde(default = "default_module_argument")]
    pub module_argument: String,
    /// Name of the `exports` parameter inside the generated module factory.
    #[serde(default = "default_exports_argument")]
    pub exports_argument: String,
    /// Root of the dependency tree.
    #[serde(default)]
    pub block: DependenciesBlock,
}

fn default_module_argument() -> String {
    "module".to_string()
}

fn default_exports_argument() -> String {
    "exports".to_string()
}

impl Module {
    /// Create a new module builder with sensible defaults.
    pub fn builder(id: ModuleId) -> ModuleBuilder {
        ModuleBuilder {
            module: Self {
                id,
                original_source: None,
                build_meta: BuildMeta::default(),
                module_argument: default_module_argument(),
                exports_argument: default_exports_argument(),
                block: DependenciesBlock::default(),
            },
        }
    }

    /// Original source text, if the module has one.
    pub fn original_source(&self) -> Option<&str> {
        self.original_source.as_deref()
    }

    /// Iterate every dependency of the module, pre-order.
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.block.iter_dependencies()
    }

    /// Collect the warnings of every dependency in the tree.
    pub fn warnings(&self, graph: &ModuleGraph) -> Vec<DependencyWarning> {
        self.dependencies()
            .flat_map(|dependency| dependency.warnings(graph))
            .collect()
    }

    /// Feed every dependency's hash contribution, in traversal order.
    pub fn update_hash(&self, hash: &mut dyn HashUpdate, graph: &ModuleGraph) -> Result<()> {
        for dependency in self.dependencies() {
            dependency.update_hash(hash, graph)?;
        }
        Ok(())
    }
}

/// Builder for `Module` to avoid long argument lists in constructors.
pub struct ModuleBuilder {
    module: Module,
}

impl ModuleBuilder {
    pub fn source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.module.original_source = Some(source.into());
        self
    }

    pub fn build_meta(mut self, build_meta: BuildMeta) -> Self {
        self.module.build_meta = build_meta;
        self
    }

    pub fn strict_harmony_module(mut self, strict: bool) -> Self {
        self.module.build_meta.strict_harmony_module = strict;
        self
    }

    pub fn exports_type(mut self, exports_type: Option<ExportsType>) -> Self {
        self.module.build_meta.exports_type = exports_type;
        self
    }

    pub fn module_argument(mut self, argument: impl Into<String>) -> Self {
        self.module.module_argument = argument.into();
        self
    }

    pub fn exports_argument(mut self, argument: impl Into<String>) -> Self {
        self.module.exports_argument = argument.into();
        self
    }

    pub fn block(mut self, block: DependenciesBlock) -> Self {
        self.module.block = block;
        self
    }

    /// Append a dependency to the root block.
    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.module.block.add_dependency(dependency);
        self
    }

    /// Append a nested block to the root block.
    pub fn nested_block(mut self, block: DependenciesBlock) -> Self {
        self.module.block.add_block(block);
        self
    }

    pub fn build(self) -> Module {
        self.module
    }
}

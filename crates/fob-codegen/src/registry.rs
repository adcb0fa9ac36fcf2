//! Template registry keyed by dependency type.

use std::fmt;
use std::sync::Arc;

use fob_graph::DependencyType;
use rustc_hash::FxHashMap;

use crate::template::DependencyTemplate;
use crate::templates::{
    ConstDependencyTemplate, HarmonyAcceptDependencyTemplate, HarmonyImportDependencyTemplate,
    ImportDependencyTemplate, ModuleDecoratorDependencyTemplate, NullDependencyTemplate,
};

/// Read-only mapping from [`DependencyType`] to its template.
///
/// Built once through [`DependencyTemplates::builder`] and shared by every
/// generation afterwards.
#[derive(Clone, Default)]
pub struct DependencyTemplates {
    templates: FxHashMap<DependencyType, Arc<dyn DependencyTemplate>>,
}

impl DependencyTemplates {
    pub fn builder() -> DependencyTemplatesBuilder {
        DependencyTemplatesBuilder::default()
    }

    /// Registry with a template for every dependency type.
    pub fn with_defaults() -> Self {
        Self::builder().register_defaults().build()
    }

    pub fn get(&self, dependency_type: DependencyType) -> Option<&dyn DependencyTemplate> {
        self.templates.get(&dependency_type).map(|template| &**template)
    }

    pub fn contains(&self, dependency_type: DependencyType) -> bool {
        self.templates.contains_key(&dependency_type)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl fmt::Debug for DependencyTemplates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.templates.keys().map(DependencyType::name).collect();
        types.sort_unstable();
        f.debug_struct("DependencyTemplates")
            .field("types", &types)
            .finish()
    }
}

/// Builder for [`DependencyTemplates`].
#[derive(Default)]
pub struct DependencyTemplatesBuilder {
    templates: FxHashMap<DependencyType, Arc<dyn DependencyTemplate>>,
}

impl DependencyTemplatesBuilder {
    /// Register a template, replacing any earlier one for the same type.
    pub fn register(
        mut self,
        dependency_type: DependencyType,
        template: impl DependencyTemplate + 'static,
    ) -> Self {
        self.templates.insert(dependency_type, Arc::new(template));
        self
    }

    /// Register an already shared template.
    pub fn register_shared(
        mut self,
        dependency_type: DependencyType,
        template: Arc<dyn DependencyTemplate>,
    ) -> Self {
        self.templates.insert(dependency_type, template);
        self
    }

    /// Register the built-in template of every dependency type.
    pub fn register_defaults(self) -> Self {
        DependencyType::ALL
            .into_iter()
            .fold(self, |builder, dependency_type| {
                builder.register_shared(dependency_type, default_template(dependency_type))
            })
    }

    pub fn build(self) -> DependencyTemplates {
        DependencyTemplates {
            templates: self.templates,
        }
    }
}

fn default_template(dependency_type: DependencyType) -> Arc<dyn DependencyTemplate> {
    match dependency_type {
        DependencyType::Context
        | DependencyType::HarmonyAcceptImport
        | DependencyType::WebAssemblyExportImported => Arc::new(NullDependencyTemplate),
        DependencyType::Import => Arc::new(ImportDependencyTemplate),
        DependencyType::ModuleDecorator => Arc::new(ModuleDecoratorDependencyTemplate),
        DependencyType::HarmonyImport => Arc::new(HarmonyImportDependencyTemplate),
        DependencyType::HarmonyAccept => Arc::new(HarmonyAcceptDependencyTemplate),
        DependencyType::Const => Arc::new(ConstDependencyTemplate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_type() {
        let templates = DependencyTemplates::with_defaults();
        assert_eq!(templates.len(), DependencyType::ALL.len());
        for dependency_type in DependencyType::ALL {
            assert!(templates.contains(dependency_type), "{dependency_type}");
        }
    }

    #[test]
    fn builder_registers_selected_types() {
        let templates = DependencyTemplates::builder()
            .register(DependencyType::Const, ConstDependencyTemplate)
            .build();

        assert!(templates.get(DependencyType::Const).is_some());
        assert!(templates.get(DependencyType::Import).is_none());
        assert_eq!(format!("{templates:?}"), r#"DependencyTemplates { types: ["ConstDependency"] }"#);
    }
}

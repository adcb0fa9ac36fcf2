use fob_graph::{Dependency, DependencyKind, DependencyType};

use super::expect_type;
use crate::error::{CodegenError, Result};
use crate::init_fragment::{InitFragment, InitFragmentStage};
use crate::source::ReplaceSource;
use crate::template::{DependencyTemplate, TemplateContext};

/// Passes the origin module through a decorator helper before its body runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleDecoratorDependencyTemplate;

impl DependencyTemplate for ModuleDecoratorDependencyTemplate {
    fn apply(
        &self,
        dependency: &Dependency,
        _source: &mut ReplaceSource,
        _ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        expect_type(dependency, DependencyType::ModuleDecorator)
    }

    fn init_fragments(
        &self,
        dependency: &Dependency,
        ctx: &TemplateContext<'_>,
    ) -> Result<Option<Vec<InitFragment>>> {
        let DependencyKind::ModuleDecorator(dep) = &dependency.kind else {
            return expect_type(dependency, DependencyType::ModuleDecorator).map(|()| None);
        };

        // The decorated module is usually the one being generated; anything
        // else has to be looked up for its module argument.
        let module_argument = if dep.origin_module == ctx.module.id {
            ctx.module.module_argument.clone()
        } else {
            ctx.module_graph
                .module(&dep.origin_module)?
                .ok_or_else(|| CodegenError::UnknownModule {
                    id: dep.origin_module.to_string(),
                })?
                .module_argument
                .clone()
        };

        let target = ctx.resolve(dependency.id)?;
        let exports = ctx
            .runtime_template
            .module_exports(target.as_ref(), &dep.request);

        Ok(Some(vec![InitFragment::new(
            format!("/* module decorator */ {module_argument} = {exports}({module_argument});\n"),
            InitFragmentStage::Provides,
            0,
            format!("module decorator {}", dep.origin_module),
        )]))
    }
}

use fob_graph::{Dependency, DependencyKind, DependencyType};

use super::expect_type;
use crate::error::Result;
use crate::init_fragment::{InitFragment, InitFragmentStage};
use crate::source::ReplaceSource;
use crate::template::{DependencyTemplate, TemplateContext};

/// Hoists a static import into an init fragment.
///
/// The original statement is left to the parser to strip (typically with a
/// const dependency); this template only emits the binding and records the
/// import as emitted so hot-accept handlers can re-run it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonyImportDependencyTemplate;

impl DependencyTemplate for HarmonyImportDependencyTemplate {
    fn apply(
        &self,
        dependency: &Dependency,
        _source: &mut ReplaceSource,
        _ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        expect_type(dependency, DependencyType::HarmonyImport)
    }

    fn init_fragments(
        &self,
        dependency: &Dependency,
        ctx: &TemplateContext<'_>,
    ) -> Result<Option<Vec<InitFragment>>> {
        let DependencyKind::HarmonyImport(dep) = &dependency.kind else {
            return expect_type(dependency, DependencyType::HarmonyImport).map(|()| None);
        };

        let key = ctx.import_key(dependency.id, &dep.request)?;
        ctx.mark_import_emitted(key.clone());

        let target = ctx.resolve(dependency.id)?;
        let statement = ctx.runtime_template.import_statement(
            false,
            target.as_ref(),
            &dep.request,
            &dep.import_var(),
            ctx.module.build_meta.strict_harmony_module,
        );
        let position = i32::try_from(dep.source_order).unwrap_or(i32::MAX);

        Ok(Some(vec![InitFragment::new(
            statement,
            InitFragmentStage::HarmonyImports,
            position,
            format!("harmony import {key}"),
        )]))
    }
}

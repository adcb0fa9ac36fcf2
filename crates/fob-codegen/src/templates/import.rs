use fob_graph::{Dependency, DependencyKind, DependencyType};
use tracing::trace;

use super::expect_type;
use crate::error::Result;
use crate::source::ReplaceSource;
use crate::template::{DependencyTemplate, TemplateContext};

/// Rewrites `import(...)` into a promise of the target's namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportDependencyTemplate;

impl DependencyTemplate for ImportDependencyTemplate {
    fn apply(
        &self,
        dependency: &Dependency,
        source: &mut ReplaceSource,
        ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        let DependencyKind::Import(dep) = &dependency.kind else {
            return expect_type(dependency, DependencyType::Import);
        };

        let target = ctx.resolve(dependency.id)?;
        let content = ctx.runtime_template.module_namespace_promise(
            target.as_ref(),
            &dep.request,
            ctx.module.build_meta.strict_harmony_module,
            "import()",
        );

        // The last byte of the block range is left in place.
        let range = dep.block_range;
        let end = range.end.saturating_sub(1).max(range.start);
        trace!(request = %dep.request, start = range.start, end, "rewriting import()");
        source.replace(range.start, end, content);
        Ok(())
    }
}

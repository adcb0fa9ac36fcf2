use fob_graph::{Dependency, DependencyKind, DependencyType};

use super::expect_type;
use crate::error::Result;
use crate::source::ReplaceSource;
use crate::template::{DependencyTemplate, TemplateContext};

/// Replaces the dependency range with a fixed expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstDependencyTemplate;

impl DependencyTemplate for ConstDependencyTemplate {
    fn apply(
        &self,
        dependency: &Dependency,
        source: &mut ReplaceSource,
        _ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        let DependencyKind::Const(dep) = &dependency.kind else {
            return expect_type(dependency, DependencyType::Const);
        };

        source.replace(dep.range.start, dep.range.end, dep.expression.clone());
        Ok(())
    }
}

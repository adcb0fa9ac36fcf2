use fob_graph::Dependency;

use crate::error::Result;
use crate::source::ReplaceSource;
use crate::template::{DependencyTemplate, TemplateContext};

/// Template for dependencies that leave the source untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDependencyTemplate;

impl DependencyTemplate for NullDependencyTemplate {
    fn apply(
        &self,
        _dependency: &Dependency,
        _source: &mut ReplaceSource,
        _ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        Ok(())
    }
}

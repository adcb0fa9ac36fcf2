use fob_graph::{Dependency, DependencyKind, DependencyType};

use super::expect_type;
use crate::error::Result;
use crate::source::{Anchor, ReplaceSource};
use crate::template::{DependencyTemplate, TemplateContext};

/// Re-imports accepted modules inside a `module.hot.accept(...)` handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonyAcceptDependencyTemplate;

impl DependencyTemplate for HarmonyAcceptDependencyTemplate {
    fn apply(
        &self,
        dependency: &Dependency,
        source: &mut ReplaceSource,
        ctx: &TemplateContext<'_>,
    ) -> Result<()> {
        let DependencyKind::HarmonyAccept(dep) = &dependency.kind else {
            return expect_type(dependency, DependencyType::HarmonyAccept);
        };

        let mut content = String::new();
        for (accepted, import) in dep.accepted_imports() {
            let key = ctx.import_key(accepted.id, &import.request)?;
            if !ctx.is_import_emitted(&key) {
                continue;
            }
            let target = ctx.resolve(accepted.id)?;
            content.push_str(&ctx.runtime_template.import_statement(
                true,
                target.as_ref(),
                &import.request,
                &import.import_var(),
                ctx.module.build_meta.strict_harmony_module,
            ));
        }

        let range = dep.range;
        if dep.has_callback {
            source.insert(
                range.start,
                format!("function(__WEBPACK_OUTDATED_DEPENDENCIES__) {{ {content}("),
            );
            source.insert(range.end, ")(__WEBPACK_OUTDATED_DEPENDENCIES__); }");
            return Ok(());
        }

        // Lands before the closing character of the range, after any other
        // insertion at that offset.
        source.insert_at(
            Anchor::Trailing(range.end.saturating_sub(1)),
            format!(", function() {{ {content} }}"),
        );
        Ok(())
    }
}

//! Built-in dependency templates.

mod constant;
mod decorator;
mod harmony_accept;
mod harmony_import;
mod import;
mod null;

pub use constant::ConstDependencyTemplate;
pub use decorator::ModuleDecoratorDependencyTemplate;
pub use harmony_accept::HarmonyAcceptDependencyTemplate;
pub use harmony_import::HarmonyImportDependencyTemplate;
pub use import::ImportDependencyTemplate;
pub use null::NullDependencyTemplate;

use fob_graph::{Dependency, DependencyType};

use crate::error::{CodegenError, Result};

/// Fail when a template is handed a dependency of another variant.
fn expect_type(dependency: &Dependency, expected: DependencyType) -> Result<()> {
    let found = dependency.dependency_type();
    if found == expected {
        Ok(())
    } else {
        Err(CodegenError::template_mismatch(expected, found))
    }
}

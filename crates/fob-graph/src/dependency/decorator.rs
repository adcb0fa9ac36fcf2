use serde::{Deserialize, Serialize};

use super::HasRequest;
use crate::module_id::ModuleId;

/// Wraps the origin module's exports through a decoration helper module
/// (e.g. the harmony or node module decorators).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDecoratorDependency {
    pub request: String,
    pub origin_module: ModuleId,
}

impl ModuleDecoratorDependency {
    pub fn new(request: impl Into<String>, origin_module: ModuleId) -> Self {
        Self {
            request: request.into(),
            origin_module,
        }
    }
}

impl HasRequest for ModuleDecoratorDependency {
    fn request(&self) -> Option<&str> {
        Some(&self.request)
    }
}

use serde::{Deserialize, Serialize};

use super::{HasRange, HasRequest};
use crate::span::SourceRange;

/// Dynamic `import()` expression.
///
/// `block_range` is the range of the async block created for the import,
/// i.e. the whole `import(...)` expression the template rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDependency {
    pub request: String,
    pub block_range: SourceRange,
}

impl ImportDependency {
    pub fn new(request: impl Into<String>, block_range: SourceRange) -> Self {
        Self {
            request: request.into(),
            block_range,
        }
    }
}

impl HasRequest for ImportDependency {
    fn request(&self) -> Option<&str> {
        Some(&self.request)
    }
}

impl HasRange for ImportDependency {
    fn range(&self) -> Option<SourceRange> {
        Some(self.block_range)
    }
}

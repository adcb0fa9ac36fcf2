use serde::{Deserialize, Serialize};

use super::HasRange;
use crate::span::SourceRange;

/// Replaces a range with a fixed expression.
///
/// Parsers use it to strip statements that other templates re-emit, such as
/// the original `import` declarations hoisted into init fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstDependency {
    pub expression: String,
    pub range: SourceRange,
}

impl ConstDependency {
    pub fn new(expression: impl Into<String>, range: SourceRange) -> Self {
        Self {
            expression: expression.into(),
            range,
        }
    }
}

impl HasRange for ConstDependency {
    fn range(&self) -> Option<SourceRange> {
        Some(self.range)
    }
}

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::ModuleId;
use super::dependency::DependencyId;

/// One directed edge of the module graph.
///
/// The connection records who references whom, through which dependency,
/// and every human-readable reason the edge exists. Reasons form an
/// insertion-ordered set: adding a reason twice keeps the first occurrence.
///
/// The resolved module is fixed at construction. When a dependency resolves
/// to a different module the graph replaces the whole connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGraphConnection {
    origin_module: Option<ModuleId>,
    dependency: Option<DependencyId>,
    resolved_module: ModuleId,
    #[serde(default)]
    explanations: IndexSet<String>,
}

impl ModuleGraphConnection {
    pub fn new(
        origin_module: Option<ModuleId>,
        dependency: Option<DependencyId>,
        resolved_module: ModuleId,
        explanation: Option<String>,
    ) -> Self {
        let mut explanations = IndexSet::new();
        if let Some(explanation) = explanation {
            explanations.insert(explanation);
        }

        Self {
            origin_module,
            dependency,
            resolved_module,
            explanations,
        }
    }

    /// Module holding the reference, `None` for entry edges.
    pub fn origin_module(&self) -> Option<&ModuleId> {
        self.origin_module.as_ref()
    }

    pub fn dependency(&self) -> Option<DependencyId> {
        self.dependency
    }

    pub fn resolved_module(&self) -> &ModuleId {
        &self.resolved_module
    }

    /// Alias of [`resolved_module`](Self::resolved_module) kept for callers
    /// that only know about "the module" of an edge.
    pub fn module(&self) -> &ModuleId {
        &self.resolved_module
    }

    /// Record a reason for this edge. Returns `false` if it was already known.
    pub fn add_explanation(&mut self, explanation: impl Into<String>) -> bool {
        self.explanations.insert(explanation.into())
    }

    pub fn explanations(&self) -> impl Iterator<Item = &str> {
        self.explanations.iter().map(String::as_str)
    }

    /// All reasons joined by a single space, in insertion order.
    pub fn explanation(&self) -> String {
        self.explanations
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

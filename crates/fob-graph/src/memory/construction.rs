//! Construction methods for ModuleGraph.

use super::super::Module;
use super::graph::{GraphInner, ModuleGraph};
use crate::Result;

impl ModuleGraph {
    /// Create a new empty graph.
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: std::sync::Arc::new(parking_lot::RwLock::new(GraphInner::default())),
        })
    }

    /// Construct a graph from an iterator of modules (without edges).
    pub fn from_modules<I>(modules: I) -> Result<Self>
    where
        I: IntoIterator<Item = Module>,
    {
        let graph = Self::new()?;
        for module in modules {
            graph.add_module(module)?;
        }
        Ok(graph)
    }
}

//! Query methods for ModuleGraph.

use std::sync::Arc;

use super::super::connection::ModuleGraphConnection;
use super::super::dependency::DependencyId;
use super::super::{Module, ModuleId};
use super::graph::ModuleGraph;
use crate::Result;

impl ModuleGraph {
    /// Retrieve a module by ID.
    ///
    /// # Example
    /// ```
    /// # use fob_graph::{Module, ModuleGraph, ModuleId};
    /// # fn example() -> fob_graph::Result<()> {
    /// let graph = ModuleGraph::new()?;
    /// let id = ModuleId::new_virtual("a.js");
    /// graph.add_module(Module::builder(id.clone()).source("1;").build())?;
    ///
    /// let module = graph.module(&id)?.unwrap();
    /// assert_eq!(module.original_source(), Some("1;"));
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn module(&self, id: &ModuleId) -> Result<Option<Arc<Module>>> {
        let inner = self.inner.read();
        Ok(inner.modules.get(id).cloned())
    }

    /// Get all modules, sorted by id.
    pub fn modules(&self) -> Result<Vec<Arc<Module>>> {
        let inner = self.inner.read();
        let mut modules: Vec<_> = inner.modules.values().cloned().collect();
        modules.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(modules)
    }

    pub fn contains(&self, id: &ModuleId) -> Result<bool> {
        Ok(self.inner.read().modules.contains_key(id))
    }

    /// Number of modules.
    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.read().modules.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Module a dependency resolved to, `None` while unresolved.
    pub fn get_module(&self, dependency: DependencyId) -> Result<Option<ModuleId>> {
        let inner = self.inner.read();
        Ok(inner
            .connections
            .get(&dependency)
            .map(|connection| connection.resolved_module().clone()))
    }

    /// Connection recorded for a dependency.
    pub fn connection(&self, dependency: DependencyId) -> Result<Option<ModuleGraphConnection>> {
        let inner = self.inner.read();
        Ok(inner.connections.get(&dependency).cloned())
    }

    /// Connections originating in a module, ordered by dependency id.
    pub fn outgoing_connections(&self, id: &ModuleId) -> Result<Vec<ModuleGraphConnection>> {
        let inner = self.inner.read();
        let mut connections: Vec<_> = inner
            .connections
            .values()
            .filter(|connection| connection.origin_module() == Some(id))
            .cloned()
            .collect();
        connections.sort_by_key(ModuleGraphConnection::dependency);
        Ok(connections)
    }

    /// Connections pointing at a module: entry edges first, then the rest
    /// ordered by dependency id.
    pub fn incoming_connections(&self, id: &ModuleId) -> Result<Vec<ModuleGraphConnection>> {
        let inner = self.inner.read();
        let mut resolved: Vec<_> = inner
            .connections
            .values()
            .filter(|connection| connection.resolved_module() == id)
            .cloned()
            .collect();
        resolved.sort_by_key(ModuleGraphConnection::dependency);

        let mut connections: Vec<_> = inner
            .entry_connections
            .iter()
            .filter(|connection| connection.resolved_module() == id)
            .cloned()
            .collect();
        connections.extend(resolved);
        Ok(connections)
    }

    /// Edges without an origin module, in insertion order.
    pub fn entry_connections(&self) -> Result<Vec<ModuleGraphConnection>> {
        Ok(self.inner.read().entry_connections.clone())
    }
}

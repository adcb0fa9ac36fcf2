//! Mutation methods for ModuleGraph.

use std::sync::Arc;

use super::super::connection::ModuleGraphConnection;
use super::super::dependency::{Dependency, DependencyId};
use super::super::{Module, ModuleId};
use super::graph::ModuleGraph;
use crate::{Error, Result};

impl ModuleGraph {
    /// Add a module into the graph, replacing any module with the same id.
    pub fn add_module(&self, module: Module) -> Result<()> {
        let mut inner = self.inner.write();
        inner.modules.insert(module.id.clone(), Arc::new(module));
        Ok(())
    }

    /// Record the module a dependency resolved to.
    ///
    /// An existing connection for the dependency is replaced by a fresh one,
    /// dropping its explanations: they described the old resolution.
    pub fn set_resolved_module(
        &self,
        origin: Option<ModuleId>,
        dependency: &Dependency,
        module: ModuleId,
    ) -> Result<()> {
        let connection = ModuleGraphConnection::new(origin, Some(dependency.id), module, None);

        let mut inner = self.inner.write();
        inner.connections.insert(dependency.id, connection);
        Ok(())
    }

    /// Add an edge that has neither origin module nor dependency.
    pub fn add_entry_connection(&self, module: ModuleId, explanation: Option<String>) -> Result<()> {
        let connection = ModuleGraphConnection::new(None, None, module, explanation);

        let mut inner = self.inner.write();
        inner.entry_connections.push(connection);
        Ok(())
    }

    /// Append a reason to the connection of a dependency.
    pub fn add_explanation(
        &self,
        dependency: DependencyId,
        explanation: impl Into<String>,
    ) -> Result<()> {
        let mut inner = self.inner.write();
        let connection = inner
            .connections
            .get_mut(&dependency)
            .ok_or(Error::UnknownDependency(dependency))?;
        connection.add_explanation(explanation);
        Ok(())
    }
}

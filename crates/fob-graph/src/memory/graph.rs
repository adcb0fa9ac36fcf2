//! Core ModuleGraph structure and inner state.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use super::super::connection::ModuleGraphConnection;
use super::super::dependency::DependencyId;
use super::super::{Module, ModuleId};

/// In-memory module graph.
///
/// Cloning is cheap and clones share state. All methods are synchronous.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    pub(super) inner: Arc<RwLock<GraphInner>>,
}

#[derive(Debug, Clone, Default)]
pub(super) struct GraphInner {
    /// All modules indexed by ID (wrapped in Arc for cheap cloning)
    pub modules: HashMap<ModuleId, Arc<Module>>,
    /// Connection of every resolved dependency
    pub connections: HashMap<DependencyId, ModuleGraphConnection>,
    /// Edges without an origin module, in insertion order
    pub entry_connections: Vec<ModuleGraphConnection>,
}

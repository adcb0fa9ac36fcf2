//! In-memory ModuleGraph implementation.
//!
//! Modules and connections live in hash maps behind one lock, so the graph
//! can be shared by every thread that generates code.

mod construction;
mod graph;
mod mutations;
mod queries;

pub use graph::ModuleGraph;

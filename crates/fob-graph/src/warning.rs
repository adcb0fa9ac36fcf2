//! Warnings reported by dependencies.
//!
//! Warnings never abort generation. They are collected per dependency and
//! surfaced through [`Module::warnings`](crate::Module::warnings).

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-fatal problem attached to one dependency.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic, Serialize, Deserialize)]
pub enum DependencyWarning {
    /// The dependency cannot be statically analysed or optimised.
    #[error("Critical dependency: {0}")]
    #[diagnostic(code(fob::graph::critical_dependency), severity(Warning))]
    CriticalDependency(String),
}

impl DependencyWarning {
    /// Create a critical dependency warning.
    pub fn critical(message: impl Into<String>) -> Self {
        Self::CriticalDependency(message.into())
    }

    /// The warning text without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::CriticalDependency(message) => message,
        }
    }
}

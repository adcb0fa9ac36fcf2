//! Error types for module code generation

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating a module
#[derive(Error, Debug, Diagnostic)]
pub enum CodegenError {
    /// A dependency variant has no registered template
    #[error("No template for dependency: {name}")]
    #[diagnostic(
        code(fob::codegen::missing_template),
        help("Register a template for this dependency type before generating")
    )]
    MissingTemplate { name: &'static str },

    /// A template received a dependency of a different variant
    #[error("Template for {expected} cannot handle {found}")]
    #[diagnostic(code(fob::codegen::template_mismatch))]
    TemplateMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A module referenced by id is not part of the graph
    #[error("Unknown module: {id}")]
    #[diagnostic(code(fob::codegen::unknown_module))]
    UnknownModule { id: String },

    /// Module graph query failed
    #[error(transparent)]
    #[diagnostic(code(fob::codegen::graph))]
    Graph(#[from] fob_graph::Error),

    /// Configuration could not be loaded
    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(fob::codegen::config),
        help("Check fob-codegen.toml syntax and FOB_CODEGEN_* environment variables")
    )]
    Config { message: String },
}

impl CodegenError {
    /// Create a MissingTemplate error for a dependency type
    pub fn missing_template(dependency_type: fob_graph::DependencyType) -> Self {
        Self::MissingTemplate {
            name: dependency_type.name(),
        }
    }

    /// Create a TemplateMismatch error
    pub fn template_mismatch(
        expected: fob_graph::DependencyType,
        found: fob_graph::DependencyType,
    ) -> Self {
        Self::TemplateMismatch {
            expected: expected.name(),
            found: found.name(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type for code generation operations
pub type Result<T> = std::result::Result<T, CodegenError>;

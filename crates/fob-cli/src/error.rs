//! Error handling for the fob-codegen CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`. At the binary
//! edge [`cli_error_to_miette`] keeps the codegen diagnostics (codes and
//! help text) intact and renders everything else as a plain report.

use std::path::PathBuf;

use fob_codegen::CodegenError;
use fob_graph::DependencyId;
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest file doesn't exist
    #[error("Manifest not found: {}\n\nHint: Pass the path of a JSON module manifest", .0.display())]
    ManifestNotFound(PathBuf),

    /// Manifest has invalid JSON or an unexpected shape
    #[error("Invalid manifest {}: {source}", .path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A connection names a dependency no module declares
    #[error("Connection references unknown dependency {0}\n\nHint: Every connection must name a dependency id declared by one of the modules")]
    UnknownDependency(DependencyId),

    /// Some modules failed to generate
    #[error("{failed} of {total} modules failed to generate")]
    GenerationFailed { failed: usize, total: usize },

    /// Code generation or configuration error
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// Module graph error
    #[error("Graph error: {0}")]
    Graph(#[from] fob_graph::Error),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert a CLI error into a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Codegen(e) => Report::new(e),
        CliError::Graph(e) => Report::new(CodegenError::from(e)),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codegen_errors_keep_their_diagnostic_code() {
        let err = CliError::from(CodegenError::config("bad value"));
        let report = cli_error_to_miette(err);

        let code = report.code().map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("fob::codegen::config"));
    }

    #[test]
    fn generation_failure_message() {
        let err = CliError::GenerationFailed {
            failed: 1,
            total: 3,
        };
        assert_eq!(err.to_string(), "1 of 3 modules failed to generate");
    }
}

//! Error types for YAML parsing.

use thiserror::Error;

/// Result type alias for remedy-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during YAML parsing.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input is not valid YAML.
    #[error("unable to parse yaml: {0}")]
    Parse(#[from] yaml_rust2::ScanError),
}

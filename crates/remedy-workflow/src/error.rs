//! Error types for workflow remediation.

use thiserror::Error;

/// Result type alias for remediation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while remediating a workflow.
///
/// Everything short of unparseable input degrades to a no-op rather than an
/// error: a document without jobs, a job without a runner field, or a label
/// map that matches nothing all return the input unchanged.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The workflow document is not valid YAML.
    #[error("{0}")]
    Yaml(#[from] remedy_yaml::Error),
}

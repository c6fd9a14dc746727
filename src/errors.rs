//! Error types for repodoc.

use std::path::PathBuf;

use crate::policy::PolicyError;

/// Top-level error type for repodoc operations.
#[derive(Debug, thiserror::Error)]
pub enum RepodocError {
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),
}

/// Map an error to its exit code.
pub fn exit_code(error: &RepodocError) -> i32 {
    match error {
        RepodocError::PathNotFound(_) => 3,
        RepodocError::Policy(_) => 2,
        RepodocError::Io(_) => 1,
    }
}

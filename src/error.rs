//! Error Types

use thiserror::Error;

use crate::models::TaskId;

/// Errors from task collection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Shown inline under the input, so the message is user-facing
    #[error("Please enter a task.")]
    EmptyText,

    #[error("No task with id {0}")]
    NotFound(TaskId),
}

/// Errors from reading or writing persisted tasks
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to encode tasks as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Browser storage failed: {0}")]
    Backend(String),
}

impl From<gloo_storage::errors::StorageError> for StorageError {
    fn from(err: gloo_storage::errors::StorageError) -> Self {
        match err {
            gloo_storage::errors::StorageError::SerdeError(source) => StorageError::Encode(source),
            other => StorageError::Backend(other.to_string()),
        }
    }
}

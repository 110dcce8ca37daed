//! Task Errors
//!
//! Local validation failures and remote store failures. Every variant is
//! shown to the user as a toast; none of them stops the component.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    /// Create submitted with a blank name
    #[error("Input form cannot be empty")]
    EmptyDraft,

    /// Update submitted with a blank name
    #[error("Empty Task cannot be added")]
    EmptyEdit,

    /// Update submitted while no task is being edited
    #[error("No task selected for editing")]
    NotEditing,

    /// Transport, URL or body decoding failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Store answered with a non-success status
    #[error("Request failed with status code {0}")]
    Status(u16),
}

impl TaskError {
    /// Rejected before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TaskError::EmptyDraft | TaskError::EmptyEdit | TaskError::NotEditing
        )
    }
}

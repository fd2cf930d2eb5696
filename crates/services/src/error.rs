//! Shared error types for the services crate.

use thiserror::Error;

use practice_core::model::SettingsError;

/// Errors emitted by quiz sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session has not been started")]
    NotStarted,
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

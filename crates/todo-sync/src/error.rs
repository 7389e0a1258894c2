//! Error types for the sync client

use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::{TodoId, UserId};

/// Result alias used across the crate
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised by the gateway or by local validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Request never produced a response
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server returned status {status}")]
    Status { status: u16 },

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Title was empty after trimming
    #[error("Todo title cannot be empty")]
    EmptyTitle,

    /// Selected user is not loaded
    #[error("Unknown user #{0}")]
    UnknownUser(UserId),

    /// Todo is not (or no longer) in the store
    #[error("Unknown todo #{0}")]
    UnknownTodo(TodoId),
}

impl SyncError {
    /// Text shown in the error overlay
    pub fn user_message(&self, config: &ClientConfig) -> String {
        match self {
            SyncError::Status { .. } => config.server_error_message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether the error should reach the overlay at all
    pub fn is_reported(&self) -> bool {
        !matches!(self, SyncError::EmptyTitle | SyncError::UnknownTodo(_))
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            SyncError::Status {
                status: status.as_u16(),
            }
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

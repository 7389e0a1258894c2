//! Client Configuration
//!
//! Where the remote collection lives and what the user sees when it misbehaves.

use serde::Deserialize;

use crate::error::{SyncError, SyncResult};

// jsonplaceholder answers every create with id 201 and persists nothing, so a
// second create replaces the first created row locally.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub const DEFAULT_SERVER_ERROR_MESSAGE: &str =
    "The server is not working correctly, please try again later.";

/// Sync client configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the REST collection, without trailing slash
    pub base_url: String,
    /// Overlay text for non-success responses
    pub server_error_message: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            server_error_message: DEFAULT_SERVER_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config; missing fields fall back to defaults
    pub fn from_json(json: &str) -> SyncResult<Self> {
        let config: ClientConfig =
            serde_json::from_str(json).map_err(|e| SyncError::Decode(e.to_string()))?;
        Ok(config.normalized())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }

    /// Absolute URL for a collection path such as `/todos/3`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

//! REST implementation of the gateway

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::TodoGateway;
use crate::config::ClientConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::{NewTodo, Todo, TodoId, User};

#[derive(Serialize)]
struct CompletedPatch {
    completed: bool,
}

/// Gateway backed by `GET/POST /todos`, `PATCH/DELETE /todos/{id}` and `GET /users`
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: ClientConfig,
}

impl HttpGateway {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        debug!(path, "GET");
        let response = self.client.get(self.config.url(path)).send().await?;
        decode(ensure_success(response)?).await
    }
}

/// Reject non-success responses before anything looks at the body
fn ensure_success(response: Response) -> SyncResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SyncError::Status {
            status: status.as_u16(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> SyncResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| SyncError::Transport(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| SyncError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TodoGateway for HttpGateway {
    async fn list_todos(&self) -> SyncResult<Vec<Todo>> {
        self.get_json("/todos").await
    }

    async fn list_users(&self) -> SyncResult<Vec<User>> {
        self.get_json("/users").await
    }

    async fn create(&self, todo: &NewTodo) -> SyncResult<Todo> {
        debug!(user_id = %todo.user_id, "POST /todos");
        let response = self
            .client
            .post(self.config.url("/todos"))
            .header("Content-type", "application/json")
            .json(todo)
            .send()
            .await?;
        decode(ensure_success(response)?).await
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> SyncResult<Todo> {
        debug!(completed, "PATCH /todos/{id}");
        let response = self
            .client
            .patch(self.config.url(&format!("/todos/{id}")))
            .header("Content-type", "application/json")
            .json(&CompletedPatch { completed })
            .send()
            .await?;
        decode(ensure_success(response)?).await
    }

    async fn delete(&self, id: TodoId) -> SyncResult<()> {
        debug!("DELETE /todos/{id}");
        let response = self
            .client
            .delete(self.config.url(&format!("/todos/{id}")))
            .send()
            .await?;
        ensure_success(response).map(|_| ())
    }
}

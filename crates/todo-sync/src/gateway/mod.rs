//! Remote Todo Gateway
//!
//! Abstract access to the remote todo collection.
//! `HttpGateway` talks REST; tests substitute in-memory fakes.

mod http;

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::models::{NewTodo, Todo, TodoId, User};

pub use http::HttpGateway;

/// Remote collection operations.
///
/// Futures are not required to be `Send`: in the browser every call runs on
/// the single event-loop thread.
#[async_trait(?Send)]
pub trait TodoGateway {
    /// Full todo list, in server order
    async fn list_todos(&self) -> SyncResult<Vec<Todo>>;

    /// Full user list, in server order
    async fn list_users(&self) -> SyncResult<Vec<User>>;

    /// Create a todo; the returned record carries the server-assigned id
    async fn create(&self, todo: &NewTodo) -> SyncResult<Todo>;

    /// Set the completion flag. A non-success status is an error even when a body came back.
    async fn set_completed(&self, id: TodoId, completed: bool) -> SyncResult<Todo>;

    /// Delete a todo. Success is decided by the response status alone.
    async fn delete(&self, id: TodoId) -> SyncResult<()>;
}

//! Todo Sync
//!
//! Keeps a remote todo collection, an in-memory store and a rendered list in
//! step:
//! - `gateway`: the remote collection (`TodoGateway`, REST via `HttpGateway`)
//! - `store`: ordered todos and users, the single source of truth
//! - `view`: the surface the controller patches (`TodoView`)
//! - `controller`: load/create/toggle/delete workflows and the error policy

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod models;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use controller::{Controller, LoadState, TodoPhase};
pub use error::{SyncError, SyncResult};
pub use gateway::{HttpGateway, TodoGateway};
pub use models::{NewTodo, Todo, TodoId, User, UserId};
pub use store::TodoStore;
pub use view::{Placement, TodoRow, TodoView, UserOption};

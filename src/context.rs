//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::sync::Arc;

use todo_sync::{Controller, HttpGateway};

use crate::store::{StoreView, ViewStore};

/// Controller wired to the REST gateway and the reactive view
pub type AppController = Controller<HttpGateway, StoreView>;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Reactive view state
    pub store: ViewStore,
    /// Owns the todo store; every workflow goes through it
    pub controller: Arc<AppController>,
}

impl AppContext {
    pub fn new(store: ViewStore, controller: Arc<AppController>) -> Self {
        Self { store, controller }
    }
}

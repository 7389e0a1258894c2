//! Todo Sync Frontend App
//!
//! Builds the controller, provides it via context and runs the initial load.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_sync::{ClientConfig, Controller, HttpGateway, LoadState};

use crate::components::{ErrorModal, NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::store::{StoreView, ViewState, ViewStateStoreFields};

/// Default config, with the base URL overridable at build time
fn client_config() -> ClientConfig {
    match option_env!("TODO_API_BASE_URL") {
        Some(url) => ClientConfig::default().with_base_url(url),
        None => ClientConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ViewState::default());
    let config = client_config();
    let controller = Arc::new(Controller::new(
        HttpGateway::new(config.clone()),
        StoreView::new(store),
        config,
    ));

    // Provide context to all children
    provide_context(AppContext::new(store, controller.clone()));

    // Load todos and users on mount
    Effect::new(move |_| {
        let controller = controller.clone();
        store.load_state().set(LoadState::Loading);
        spawn_local(async move {
            let _ = controller.load().await;
            store.load_state().set(controller.load_state());
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todo Sync"</h1>

            <NewTodoForm />

            <TodoList />

            <ErrorModal />
        </main>
    }
}

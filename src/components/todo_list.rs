//! Todo List Component
//!
//! Renders the view store's rows, keyed by id.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::AppContext;
use crate::store::{row_counts, ViewStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || store.rows().get()
                // state fields are part of the key so a patched row is rebuilt
                key=|row| (row.id, row.completed, row.pending)
                children=move |row| view! { <TodoItem row=row /> }
            />
        </ul>

        <p class="todo-count">
            {move || {
                let (total, completed) = store.rows().with(|rows| row_counts(rows));
                format!("{} todos, {} completed", total, completed)
            }}
        </p>
    }
}

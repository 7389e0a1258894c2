//! New Todo Form Component
//!
//! Title input plus user selection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{LoadState, UserId};

use crate::context::AppContext;
use crate::store::ViewStateStoreFields;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let controller = ctx.controller;

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = store.title().get_untracked();
        let Some(user_id) = store.selected_user().get_untracked() else {
            return;
        };
        let controller = controller.clone();
        spawn_local(async move {
            // the controller clears the input once the new row is rendered
            let _ = controller.create(user_id, &title).await;
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                id="new-todo"
                name="todo"
                type="text"
                placeholder="New todo..."
                prop:value=move || store.title().get()
                on:input=move |ev| store.title().set(event_target_value(&ev))
            />
            <select
                id="user-todo"
                name="user"
                prop:value=move || {
                    store.selected_user().get().map(|id| id.to_string()).unwrap_or_default()
                }
                on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                        store.selected_user().set(Some(UserId(id)));
                    }
                }
            >
                <For
                    each=move || store.user_options().get()
                    key=|option| option.value
                    children=move |option| {
                        view! { <option value=option.value.to_string()>{option.label}</option> }
                    }
                />
            </select>
            <button
                type="submit"
                disabled=move || store.load_state().get() != LoadState::Ready
            >
                "Add"
            </button>
        </form>
    }
}

//! Todo Item Component
//!
//! One list row: completion toggle, label and dismiss control.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::TodoRow;

use crate::context::AppContext;

/// A single todo row
#[component]
pub fn TodoItem(row: TodoRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toggle_controller = ctx.controller.clone();
    let delete_controller = ctx.controller;

    let id = row.id;
    let class = if row.pending { "todo-item pending" } else { "todo-item" };

    view! {
        <li class=class data-id=id.to_string()>
            // Checkbox
            <input
                type="checkbox"
                prop:checked=row.completed
                on:change=move |ev| {
                    let completed = event_target_checked(&ev);
                    let controller = toggle_controller.clone();
                    spawn_local(async move {
                        let _ = controller.toggle(id, completed).await;
                    });
                }
            />

            // Label
            <span>{row.title} " " <i>"by"</i> " " <b>{row.owner}</b></span>

            // Dismiss
            <span class="close" on:click=move |_| {
                let controller = delete_controller.clone();
                spawn_local(async move {
                    let _ = controller.delete(id).await;
                });
            }>"×"</span>
        </li>
    }
}

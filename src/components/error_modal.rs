//! Error Modal Component
//!
//! Overlay for failed operations. Any click outside the content panel closes it.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{dismiss_error, ViewStateStoreFields};

#[component]
pub fn ErrorModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    view! {
        <Show when=move || store.error().get().is_some()>
            <div
                class="modal"
                on:click=move |_| dismiss_error(store)
            >
                <div
                    class="modal-content"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <span>"Error:"</span>
                    <br />
                    <br />
                    {move || store.error().get().unwrap_or_default()}
                </div>
            </div>
        </Show>
    }
}

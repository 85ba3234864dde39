//! Snackbar Component
//!
//! Single-slot toast. The store owns the message and its auto-dismiss;
//! this component only renders the slot and wires the close button.

use leptos::prelude::*;

use crate::store::{store_dismiss_snackbar, use_app_store, AppStateStoreFields};

#[component]
pub fn Snackbar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.snackbar().read().is_some()>
            <div class="snackbar">
                <span class="snackbar-text">
                    {move || store.snackbar().get().unwrap_or_default()}
                </span>
                <button class="snackbar-close" on:click=move |_| store_dismiss_snackbar(&store)>
                    "✕"
                </button>
            </div>
        </Show>
    }
}

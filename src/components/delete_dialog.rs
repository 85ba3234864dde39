//! Delete Dialog Component
//!
//! Confirmation dialog for the client-only delete. Cancel (or a backdrop
//! click) leaves the list untouched; confirm removes the candidate and
//! announces it through the snackbar.

use leptos::prelude::*;

use crate::store::{
    store_cancel_delete, store_confirm_delete, use_app_store, AppStateStoreFields,
};

#[component]
pub fn DeleteDialog() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.delete_candidate().read().is_some()>
            <div
                class="dialog-backdrop"
                on:click=move |_| store_cancel_delete(&store)
            ></div>
            <div class="dialog" role="dialog">
                <h2 class="dialog-title">"Delete this post?"</h2>
                <p class="dialog-text">
                    "The post is only removed from this view. It will come back on the next load."
                </p>
                <div class="dialog-actions">
                    <button class="dialog-btn" on:click=move |_| store_cancel_delete(&store)>
                        "Cancel"
                    </button>
                    <button class="dialog-btn danger" on:click=move |_| store_confirm_delete(&store)>
                        "Delete"
                    </button>
                </div>
            </div>
        </Show>
    }
}

//! Error Banner Component
//!
//! Persistent banner for a failed initial load. Retry reloads the whole
//! page rather than re-running a single fetch.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    let retry = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="error-banner" role="alert">
            <span class="error-icon">"⚠"</span>
            <span class="error-message">
                {move || store.error().get().unwrap_or_default()}
            </span>
            <button class="retry-btn" on:click=retry>"Retry"</button>
        </div>
    }
}

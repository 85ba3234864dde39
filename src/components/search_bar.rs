//! Search Bar Component
//!
//! Free-text search over the gallery. Keystrokes land in the store
//! immediately; the pipeline only sees them after the debounce releases.

use leptos::prelude::*;

use crate::store::{store_set_search, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-bar">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                class="search-input"
                placeholder="Search posts..."
                prop:value=move || store.search().get()
                on:input=move |ev| store_set_search(&store, event_target_value(&ev))
            />
        </div>
    }
}

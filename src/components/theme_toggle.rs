//! Theme Toggle Component
//!
//! Dark mode switch. The store mirrors the flag onto `<body>` so the
//! stylesheet can restyle everything from one class.

use leptos::prelude::*;

use crate::store::{store_toggle_dark, use_app_store, AppStateStoreFields};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    view! {
        <button
            class="theme-btn"
            title=move || if store.dark_mode().get() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| store_toggle_dark(&store)
        >
            {move || if store.dark_mode().get() { "☀" } else { "🌙" }}
        </button>
    }
}

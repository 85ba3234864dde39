//! Sort Menu Component
//!
//! Dropdown for the three sort modes. Picking an option applies it and
//! closes the menu; clicking the backdrop closes it with no change.

use leptos::prelude::*;

use crate::models::SORT_MODES;
use crate::store::{store_set_sort, use_app_store, AppStateStoreFields};

#[component]
pub fn SortMenu() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="sort-menu-wrapper">
            <button
                class="sort-btn"
                title="Sort posts"
                on:click=move |_| store.sort_menu_open().update(|open| *open = !*open)
            >
                "⇅ "
                {move || store.sort().get().label()}
            </button>

            <Show when=move || store.sort_menu_open().get()>
                <div
                    class="menu-backdrop"
                    on:click=move |_| store.sort_menu_open().set(false)
                ></div>
                <div class="sort-menu">
                    {SORT_MODES.iter().map(|mode| {
                        let mode = *mode;
                        let is_active = move || store.sort().get() == mode;
                        view! {
                            <button
                                class=move || if is_active() { "sort-option active" } else { "sort-option" }
                                on:click=move |_| store_set_sort(&store, mode)
                            >
                                {mode.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

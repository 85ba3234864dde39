//! Pagination Component
//!
//! Previous/next controls with a "page x of y" readout. Hidden when the
//! match set fits on one page.

use leptos::prelude::*;

use crate::store::{store_set_page, use_app_store, AppStateStoreFields};

#[component]
pub fn Pagination(pages: Memo<usize>) -> impl IntoView {
    let store = use_app_store();
    let page = move || store.page().get();

    view! {
        <Show when=move || pages.get() > 1>
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=move || page() <= 1
                    on:click=move |_| store_set_page(&store, page().saturating_sub(1), pages.get_untracked())
                >
                    "‹ Prev"
                </button>
                <span class="page-label">
                    {move || format!("Page {} of {}", page(), pages.get())}
                </span>
                <button
                    class="page-btn"
                    disabled=move || page() >= pages.get()
                    on:click=move |_| store_set_page(&store, page() + 1, pages.get_untracked())
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}

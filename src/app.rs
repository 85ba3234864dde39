//! Postdeck App
//!
//! Root component: kicks off the joined fetch on mount, derives the
//! visible page from the store, and lays out the chrome around the grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    DeleteDialog, ErrorBanner, Pagination, PostGrid, ScrollTop, SearchBar, SkeletonCard, Snackbar,
    SortMenu, ThemeToggle,
};
use crate::enrich::enrich;
use crate::pipeline::{derive_page, PAGE_SIZE};
use crate::store::{store_set_error, store_set_loaded, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    // Initial load: both collections fetched together. Either failure is
    // terminal until the banner's Retry reloads the page.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_gallery(api::API_BASE).await {
                Ok((posts, users)) => {
                    web_sys::console::log_1(
                        &format!("[APP] loaded {} posts, {} users", posts.len(), users.len())
                            .into(),
                    );
                    store_set_loaded(&store, enrich(posts, users));
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[APP] load failed: {}", err).into());
                    store_set_error(&store, err.to_string());
                }
            }
        });
    });

    // Derived pipeline: recomputes when the posts, the debounced needle,
    // the sort mode, or the page change
    let derived = Memo::new(move |_| {
        let needle = store.debounced_search().get();
        let sort = store.sort().get();
        let page = store.page().get();
        store
            .posts()
            .with(|posts| derive_page(posts, &needle, sort, page))
    });
    let visible = Memo::new(move |_| derived.get().0);
    let pages = Memo::new(move |_| derived.get().1);

    let ready = move || !store.loading().get() && store.error().read().is_none();

    view! {
        <div class="app-shell">
            <header class="top-bar">
                <h1 class="app-title">"Postdeck"</h1>
                <SearchBar />
                <div class="top-bar-actions">
                    <SortMenu />
                    <ThemeToggle />
                </div>
            </header>

            <main class="content">
                <Show when=move || store.error().read().is_some()>
                    <ErrorBanner />
                </Show>

                <Show when=move || store.loading().get()>
                    <div class="card-grid">
                        {(0..PAGE_SIZE).map(|_| view! { <SkeletonCard /> }).collect_view()}
                    </div>
                </Show>

                <Show when=ready>
                    <PostGrid visible=visible />
                    <Pagination pages=pages />
                </Show>
            </main>

            <ScrollTop />
            <DeleteDialog />
            <Snackbar />
        </div>
    }
}

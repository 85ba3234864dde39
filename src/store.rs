//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the single source of truth: every UI event funnels through one of the
//! helper functions below, and components hold no list, dialog, or
//! snackbar state of their own.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use std::collections::HashSet;

use crate::models::{EnrichedPost, SortMode};
use crate::pipeline::{self, clamp_page, page_count};
use crate::storage;

/// Quiet period before a search keystroke reaches the pipeline
pub const DEBOUNCE_MS: u32 = 300;
/// Snackbar lifetime before auto-dismiss
pub const SNACKBAR_MS: u32 = 3000;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Enriched posts as loaded; client-side delete is the only mutation
    pub posts: Vec<EnrichedPost>,
    /// Initial load in flight
    pub loading: bool,
    /// Human-readable load failure, terminal until the page reloads
    pub error: Option<String>,
    /// Live search input
    pub search: String,
    /// Search text as last released by the debounce timer
    pub debounced_search: String,
    /// Debounce generation; a stale timer task sees a newer value and drops out
    pub search_epoch: u32,
    /// Current page, 1-based
    pub page: usize,
    pub sort: SortMode,
    pub sort_menu_open: bool,
    /// Favorited post ids, mirrored to localStorage on every toggle
    pub favorites: HashSet<u32>,
    pub dark_mode: bool,
    /// Post awaiting delete confirmation
    pub delete_candidate: Option<u32>,
    /// Single-slot snackbar message; a new message overwrites the old one
    pub snackbar: Option<String>,
    /// Snackbar generation for the auto-dismiss task
    pub snackbar_epoch: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            page: 1,
            favorites: storage::load_favorites(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Initial load finished with data
pub fn store_set_loaded(store: &AppStore, posts: Vec<EnrichedPost>) {
    store.posts().set(posts);
    store.loading().set(false);
}

/// Initial load failed; the message feeds the error banner
pub fn store_set_error(store: &AppStore, message: String) {
    store.error().set(Some(message));
    store.loading().set(false);
}

/// Record a keystroke and schedule its release to the pipeline. Each call
/// bumps the epoch, so earlier pending releases become no-ops and the
/// pipeline sees at most one update per quiet period.
pub fn store_set_search(store: &AppStore, text: String) {
    store.search().set(text.clone());
    let epoch = store.search_epoch().get_untracked() + 1;
    store.search_epoch().set(epoch);

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(DEBOUNCE_MS).await;
        if store.search_epoch().get_untracked() == epoch
            && store.debounced_search().get_untracked() != text
        {
            store.debounced_search().set(text);
            // Changing the needle always restarts at the first page
            store.page().set(1);
        }
    });
}

pub fn store_set_sort(store: &AppStore, mode: SortMode) {
    store.sort().set(mode);
    store.sort_menu_open().set(false);
}

/// Move to a page, clamped into `[1, pages]`
pub fn store_set_page(store: &AppStore, page: usize, pages: usize) {
    store.page().set(clamp_page(page, pages));
}

/// Flip membership in the set; `true` means the id is now a favorite
pub fn toggle_id(favorites: &mut HashSet<u32>, id: u32) -> bool {
    if favorites.remove(&id) {
        false
    } else {
        favorites.insert(id);
        true
    }
}

/// Toggle a favorite and persist the whole set immediately
pub fn store_toggle_favorite(store: &AppStore, id: u32) {
    let now_favorite = toggle_id(&mut store.favorites().write(), id);
    storage::save_favorites(&store.favorites().read_untracked());
    let message = if now_favorite {
        "Added to favorites"
    } else {
        "Removed from favorites"
    };
    store_show_snackbar(store, message);
}

pub fn store_request_delete(store: &AppStore, id: u32) {
    store.delete_candidate().set(Some(id));
}

pub fn store_cancel_delete(store: &AppStore) {
    store.delete_candidate().set(None);
}

/// Confirm the pending delete: drop the post from the in-memory list,
/// re-clamp the page in case the last card of the last page went away,
/// and announce it.
pub fn store_confirm_delete(store: &AppStore) {
    let Some(id) = store.delete_candidate().get_untracked() else {
        return;
    };
    store.posts().write().retain(|post| post.id != id);
    store.delete_candidate().set(None);

    let needle = store.debounced_search().get_untracked();
    let matched = store
        .posts()
        .read_untracked()
        .iter()
        .filter(|post| pipeline::matches(post, &needle))
        .count();
    let page = store.page().get_untracked();
    store.page().set(clamp_page(page, page_count(matched)));

    store_show_snackbar(store, "Post deleted");
}

/// Show a snackbar message, overwriting any visible one, and schedule the
/// auto-dismiss. The epoch check keeps an old timer from clearing a newer
/// message.
pub fn store_show_snackbar(store: &AppStore, message: &str) {
    let epoch = store.snackbar_epoch().get_untracked() + 1;
    store.snackbar_epoch().set(epoch);
    store.snackbar().set(Some(message.to_string()));

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(SNACKBAR_MS).await;
        if store.snackbar_epoch().get_untracked() == epoch {
            store.snackbar().set(None);
        }
    });
}

pub fn store_dismiss_snackbar(store: &AppStore) {
    store.snackbar().set(None);
}

/// Flip dark mode and mirror it as a class on `<body>` for the stylesheet
pub fn store_toggle_dark(store: &AppStore) {
    let dark = !store.dark_mode().get_untracked();
    store.dark_mode().set(dark);

    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let _ = if dark {
            body.class_list().add_1("dark")
        } else {
            body.class_list().remove_1("dark")
        };
    }
}

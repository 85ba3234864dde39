//! Favorites Persistence
//!
//! One localStorage key holding the favorited post ids as a JSON array.
//! The codec is split from the browser calls so the store tests never
//! touch the DOM. Write failures (quota, storage disabled) are swallowed;
//! the in-memory toggle must never fail.

use std::collections::HashSet;

const FAVORITES_KEY: &str = "favorites";

/// Serialize the set as a sorted JSON array of ids.
pub fn encode_favorites(favorites: &HashSet<u32>) -> String {
    let mut ids: Vec<u32> = favorites.iter().copied().collect();
    ids.sort_unstable();
    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a persisted payload; anything malformed loads as the empty set.
pub fn decode_favorites(raw: &str) -> HashSet<u32> {
    serde_json::from_str::<Vec<u32>>(raw)
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

/// Load the persisted set once at startup.
pub fn load_favorites() -> HashSet<u32> {
    let Some(storage) = local_storage() else {
        return HashSet::new();
    };
    match storage.get_item(FAVORITES_KEY) {
        Ok(Some(raw)) => decode_favorites(&raw),
        _ => HashSet::new(),
    }
}

/// Persist the whole set; called on every toggle.
pub fn save_favorites(favorites: &HashSet<u32>) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(FAVORITES_KEY, &encode_favorites(favorites));
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

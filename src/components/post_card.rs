//! Post Card Component
//!
//! One gallery card: title, body excerpt, byline with avatar initial,
//! derived date, tag chips, and the favorite / share / delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::models::EnrichedPost;
use crate::store::{
    store_request_delete, store_show_snackbar, store_toggle_favorite, use_app_store,
    AppStateStoreFields,
};

/// Longest body excerpt shown on a card
const EXCERPT_CHARS: usize = 140;

/// Cut the body down for the card, on a char boundary, with an ellipsis
fn excerpt(body: &str, max_chars: usize) -> String {
    if body.chars().count() <= max_chars {
        return body.to_string();
    }
    let cut: String = body.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[component]
pub fn PostCard(post: EnrichedPost) -> impl IntoView {
    let store = use_app_store();
    let id = post.id;

    let author = post
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    // Fallback glyph when the join found no owner
    let initial = author
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let date_label = post.date.format("%b %-d, %Y").to_string();
    let body_excerpt = excerpt(&post.body, EXCERPT_CHARS);

    let is_favorite = move || store.favorites().read().contains(&id);

    let share = move |_| {
        let url = format!("{}/posts/{}", api::API_BASE, id);
        spawn_local(async move {
            let Some(window) = web_sys::window() else { return };
            // Clipboard failures are ignored; the snackbar is optimistic
            let _ = JsFuture::from(window.navigator().clipboard().write_text(&url)).await;
            store_show_snackbar(&store, "Link copied");
        });
    };

    view! {
        <article class="post-card">
            <h2 class="card-title">{post.title.clone()}</h2>
            <p class="card-excerpt">{body_excerpt}</p>

            <div class="card-byline">
                <span class="avatar">{initial}</span>
                <div class="byline-text">
                    <span class="author-name">{author}</span>
                    <span class="card-date">{date_label}</span>
                </div>
            </div>

            <div class="tag-row">
                {post.tags.iter().map(|tag| view! {
                    <span class="tag-chip">{*tag}</span>
                }).collect_view()}
            </div>

            <div class="card-actions">
                <button
                    class=move || if is_favorite() { "icon-btn favorite active" } else { "icon-btn favorite" }
                    title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                    on:click=move |_| store_toggle_favorite(&store, id)
                >
                    {move || if is_favorite() { "♥" } else { "♡" }}
                </button>
                <button class="icon-btn share" title="Copy link" on:click=share>
                    "🔗"
                </button>
                <button
                    class="icon-btn delete"
                    title="Delete post"
                    on:click=move |_| store_request_delete(&store, id)
                >
                    "🗑"
                </button>
            </div>
        </article>
    }
}

//! Post Grid Component
//!
//! Responsive card grid over the derived page, with an empty state when
//! the filter matches nothing.

use leptos::prelude::*;

use crate::components::PostCard;
use crate::models::EnrichedPost;

#[component]
pub fn PostGrid(visible: Memo<Vec<EnrichedPost>>) -> impl IntoView {
    view! {
        <Show when=move || visible.read().is_empty()>
            <p class="empty-state">"No posts match your search."</p>
        </Show>
        <div class="card-grid">
            <For
                each=move || visible.get()
                key=|post| post.id
                children=move |post| view! { <PostCard post=post /> }
            />
        </div>
    }
}

//! Skeleton Card Component
//!
//! Shimmering placeholder shown while the initial load is in flight.

use leptos::prelude::*;

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="post-card skeleton-card">
            <div class="skeleton-line title"></div>
            <div class="skeleton-line"></div>
            <div class="skeleton-line"></div>
            <div class="skeleton-line short"></div>
            <div class="skeleton-byline">
                <div class="skeleton-avatar"></div>
                <div class="skeleton-line short"></div>
            </div>
        </div>
    }
}

//! Scroll-To-Top Component
//!
//! Floating action button that smooth-scrolls the window back to the top.

use leptos::prelude::*;

#[component]
pub fn ScrollTop() -> impl IntoView {
    let scroll = move |_| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    };

    view! {
        <button class="fab scroll-top" title="Back to top" on:click=scroll>
            "↑"
        </button>
    }
}

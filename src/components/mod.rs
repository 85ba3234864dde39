//! UI Components
//!
//! Reusable Leptos components.

mod search_bar;
mod sort_menu;
mod theme_toggle;
mod post_card;
mod post_grid;
mod skeleton_card;
mod error_banner;
mod pagination;
mod delete_dialog;
mod snackbar;
mod scroll_top;

pub use search_bar::SearchBar;
pub use sort_menu::SortMenu;
pub use theme_toggle::ThemeToggle;
pub use post_card::PostCard;
pub use post_grid::PostGrid;
pub use skeleton_card::SkeletonCard;
pub use error_banner::ErrorBanner;
pub use pagination::Pagination;
pub use delete_dialog::DeleteDialog;
pub use snackbar::Snackbar;
pub use scroll_top::ScrollTop;

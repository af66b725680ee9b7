//! UI Components
//!
//! Reusable Leptos components.

mod character_card;
mod error_banner;
mod pager_controls;

pub use character_card::CharacterCard;
pub use error_banner::ErrorBanner;
pub use pager_controls::PagerControls;

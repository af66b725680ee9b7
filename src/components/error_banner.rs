//! Error Banner Component
//!
//! Shown when a page fetch fails, with a retry action for the failed page.

use leptos::prelude::*;

/// Fetch-failure banner with a Retry button
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner">
            <span class="error-message">{message}</span>
            <button class="retry" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}

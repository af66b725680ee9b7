//! Pager Controls Component
//!
//! Previous / page number / Next row under the card grid.

use leptos::prelude::*;

use crate::pager::{has_next, has_prev};

/// Navigation row
///
/// Previous is disabled on page 1; Next is disabled when the current page came
/// back short of a full page.
#[component]
pub fn PagerControls(
    page: ReadSignal<u32>,
    character_count: Signal<usize>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="prev"
                disabled=move || !has_prev(page.get())
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="page-number">{move || page.get()}</span>
            <button
                class="next"
                disabled=move || !has_next(character_count.get())
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}

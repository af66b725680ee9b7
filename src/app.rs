//! Character Browser App
//!
//! Main application component: view state, page loading, render dispatch.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CharacterCard, ErrorBanner, PagerControls};
use crate::models::CharacterRecord;
use crate::pager::{self, PageCursor, Settlement};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (page, set_page) = signal(pager::FIRST_PAGE);
    let (characters, set_characters) = signal(Vec::<CharacterRecord>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    // Page tag of the most recent dispatch; settling fetches check against it
    let (requested, set_requested) = signal(pager::FIRST_PAGE);

    // Single entry point for the mount load, navigation and retry
    let load_page = move |target: u32| {
        set_requested.set(target);
        set_is_loading.set(true);
        set_error.set(None);
        web_sys::console::log_1(&format!("[App] Loading page {}", target).into());

        spawn_local(async move {
            let result = api::fetch_characters(target).await;

            let settlement = pager::settle(result, target, requested.get_untracked());
            set_is_loading.set(settlement.still_loading());

            match settlement {
                Settlement::Stale => {
                    web_sys::console::log_1(
                        &format!("[App] Discarding stale response for page {}", target).into(),
                    );
                }
                Settlement::Apply {
                    page: new_page,
                    characters: list,
                } => {
                    web_sys::console::log_1(
                        &format!("[App] Loaded {} characters for page {}", list.len(), new_page)
                            .into(),
                    );
                    set_characters.set(list);
                    set_page.set(new_page);
                }
                Settlement::Fail { message } => {
                    web_sys::console::error_1(
                        &format!("[App] Failed to load page {}: {}", target, message).into(),
                    );
                    set_error.set(Some(message));
                }
            }
        });
    };

    // Load the first page on mount
    Effect::new(move |_| {
        load_page(pager::FIRST_PAGE);
    });

    let handle_prev = move |_: ()| load_page(PageCursor(page.get_untracked()).prev());
    let handle_next = move |_: ()| load_page(PageCursor(page.get_untracked()).next());
    let handle_retry = move |_: ()| load_page(requested.get_untracked());

    view! {
        <div class="container">
            <div class="header">
                <div class="header-content">
                    <img src="logo.png" alt="logo" class="logo" />
                </div>
            </div>

            <Show when=move || is_loading.get()>
                <div class="loading">"Now Loading..."</div>
            </Show>

            <Show when=move || !is_loading.get()>
                <main>
                    {move || match error.get() {
                        Some(message) => {
                            view! { <ErrorBanner message=message on_retry=handle_retry /> }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="cards-container">
                                    <For
                                        each=move || characters.get()
                                        key=|character| character.id
                                        children=move |character| {
                                            view! { <CharacterCard character=character /> }
                                        }
                                    />
                                </div>
                                <PagerControls
                                    page=page
                                    character_count=Signal::derive(move || {
                                        characters.get().len()
                                    })
                                    on_prev=handle_prev
                                    on_next=handle_next
                                />
                            }
                                .into_any()
                        }
                    }}
                </main>
            </Show>
        </div>
    }
}

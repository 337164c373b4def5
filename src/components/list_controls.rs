//! List Controls Component
//!
//! Hide-completed toggle and the prefix search form.

use leptos::prelude::*;
use shopping_list_core::Action;

use crate::context::AppContext;
use crate::store::{store_dispatch, store_hide_completed, use_app_store};

#[component]
pub fn ListControls() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let submit_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let _ = store_dispatch(&store, Action::SubmitSearch(ctx.search_draft()));
    };

    let clear_search = move |_| {
        ctx.clear_search_draft();
        let _ = store_dispatch(&store, Action::ClearSearch);
    };

    view! {
        <div class="list-controls">
            <button
                type="button"
                class="hide-completed-toggle"
                on:click=move |_| {
                    let _ = store_dispatch(&store, Action::ToggleHideCompleted);
                }
            >
                {move || if store_hide_completed(&store) { "Show completed" } else { "Hide completed" }}
            </button>

            <form id="search-term-form" on:submit=submit_search>
                <input
                    type="text"
                    name="search-term"
                    class="search-term"
                    placeholder="Search by prefix"
                    prop:value=move || ctx.search_draft()
                    on:input=move |ev| ctx.set_search_draft(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
                <button type="button" id="search-form-clear" on:click=clear_search>"Clear"</button>
            </form>
        </div>
    }
}

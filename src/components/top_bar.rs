//! Top Bar Component
//!
//! Title, sidebar toggle and the active candidate.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{store_clear_candidate, use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar(
    #[prop(into)] collapsed: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let candidate_name = move || {
        store.candidate().with(|c| c.as_ref().map(|c| c.display_name().to_string()))
    };

    let clear = move |_| {
        store_clear_candidate(&store);
        ctx.navigate(Route::Upload);
    };

    view! {
        <header class="top-bar">
            <button
                class="icon-btn nav-toggle"
                aria-label=move || if collapsed.get() { "Expand navigation" } else { "Collapse navigation" }
                on:click=move |_| on_toggle.run(())
            >
                "☰"
            </button>
            <h1 class="top-bar-title">"Stealth Dash"</h1>
            <div class="top-bar-actions">
                {move || match candidate_name() {
                    Some(name) => view! {
                        <span class="candidate-chip" title="Active candidate">{name}</span>
                        <button class="btn btn-ghost" on:click=clear>"Clear"</button>
                    }.into_any(),
                    None => view! {
                        <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Upload)>
                            "Upload Resume"
                        </button>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}

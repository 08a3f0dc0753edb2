//! Loading Spinner

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner-wrap" role="status">
            <div class="spinner"></div>
            {label.map(|l| view! { <span class="spinner-label">{l}</span> })}
        </div>
    }
}

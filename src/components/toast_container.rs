//! Toast Container Component
//!
//! Fixed top-right stack rendering the toaster's current list.

use leptos::prelude::*;

use crate::toast::use_toaster;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-stack">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.variant.css_class() role="status" aria-live="polite">
                            <div class="toast-body">
                                <div class="toast-title">{toast.title.clone()}</div>
                                {toast.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                                    <div class="toast-description">{d}</div>
                                })}
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Close notification"
                                on:click=move |_| toaster.remove(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

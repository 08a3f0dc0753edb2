//! Bulk Toolbar Component
//!
//! Actions for the current job selection. Hidden when nothing is selected.

use leptos::prelude::*;

#[component]
pub fn BulkToolbar(
    #[prop(into)] selected_count: Signal<usize>,
    #[prop(into)] applying: Signal<bool>,
    on_apply: Callback<()>,
    on_email: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { selected_count.get() > 0 }>
            <div class="bulk-toolbar">
                <div class="bulk-count">{move || format!("{} selected", selected_count.get())}</div>
                <div class="bulk-actions">
                    <button
                        class="btn btn-primary"
                        aria-label="Apply to selected jobs"
                        disabled=move || applying.get()
                        on:click=move |_| on_apply.run(())
                    >
                        {move || if applying.get() { "Applying..." } else { "Apply" }}
                    </button>
                    <button
                        class="btn btn-secondary"
                        aria-label="Email selected jobs"
                        disabled=move || applying.get()
                        on:click=move |_| on_email.run(())
                    >
                        "Email"
                    </button>
                    <button
                        class="btn btn-danger"
                        aria-label="Clear selected jobs"
                        disabled=move || applying.get()
                        on:click=move |_| on_clear.run(())
                    >
                        "Clear"
                    </button>
                </div>
            </div>
        </Show>
    }
}

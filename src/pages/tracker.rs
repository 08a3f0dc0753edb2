//! Tracker Page
//!
//! Kanban board of tracked applications. A drop shows the new status at once
//! and rolls back if the backend rejects it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{list_applications, update_application_status};
use crate::components::{CardMove, KanbanBoard, Spinner};
use crate::context::use_app_context;
use crate::kanban::to_items;
use crate::models::Application;
use crate::status_move::StatusMove;

#[component]
pub fn TrackerPage() -> impl IntoView {
    let ctx = use_app_context();

    let applications = RwSignal::new(Vec::<Application>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let api = ctx.api();
    spawn_local(async move {
        match list_applications(&api).await {
            Ok(apps) => {
                log::info!("[TRACKER] Loaded {} application(s)", apps.len());
                applications.try_set(apps);
                set_load_error.try_set(None);
            }
            Err(err) => {
                ctx.report("Error", "Failed to load applications", &err);
                set_load_error.try_set(Some(err.detail()));
            }
        }
        set_loading.try_set(false);
    });

    let on_move = Callback::new(move |ev: CardMove| {
        let mv = StatusMove::begin(applications.get_untracked(), ev.item, ev.from, ev.to);
        applications.set(mv.optimistic());

        let api = ctx.api();
        spawn_local(async move {
            let outcome = update_application_status(&api, &mv.item_id, &mv.to).await;
            let settled = mv.settle(outcome);
            if let Some(previous) = settled.restore {
                applications.try_set(previous);
            }
            ctx.toaster.add(settled.toast);
        });
    });

    let items = Signal::derive(move || applications.with(|apps| to_items(apps)));

    view! {
        <div class="page tracker-page">
            <h2>"Application Tracker"</h2>
            {move || load_error.get().map(|detail| view! {
                <div class="error-banner" role="alert">
                    <strong>"Failed to load applications"</strong>
                    <span>{detail}</span>
                </div>
            })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner label="Loading applications..." /> }
            >
                <KanbanBoard items=items on_move=on_move />
            </Show>
        </div>
    }
}

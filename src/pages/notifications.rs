//! Notifications Page
//!
//! Backend activity log plus the records this session has written.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::fetch_logs;
use crate::components::{ActivityFeed, Spinner};
use crate::context::use_app_context;
use crate::logging::recent_records;
use crate::models::LogEvent;

#[component]
fn SessionLog() -> impl IntoView {
    let (lines, set_lines) = signal(recent_records());
    let refresh = move |_| set_lines.set(recent_records());

    view! {
        <details class="session-log">
            <summary on:click=refresh>"Session log"</summary>
            <ul>
                {move || lines.get().into_iter().rev().map(|line| view! {
                    <li class=format!("log-line {}", line.level.as_str().to_ascii_lowercase())>
                        <span class="log-level">{line.level.as_str()}</span>
                        <span class="log-target">{line.target}</span>
                        <span class="log-message">{line.message}</span>
                    </li>
                }).collect_view()}
            </ul>
        </details>
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let ctx = use_app_context();

    let events = RwSignal::new(Vec::<LogEvent>::new());
    let (loading, set_loading) = signal(true);

    let api = ctx.api();
    spawn_local(async move {
        match fetch_logs(&api).await {
            Ok(loaded) => {
                log::debug!("[NOTIFY] {} event(s)", loaded.len());
                events.try_set(loaded);
            }
            Err(err) => ctx.report("Error", "Failed to load notifications.", &err),
        }
        set_loading.try_set(false);
    });

    view! {
        <div class="page notifications-page">
            <h2>"Notifications"</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner label="Loading activity..." /> }
            >
                <ActivityFeed events=events />
            </Show>
            <SessionLog />
        </div>
    }
}

//! Activity Feed Component
//!
//! Backend events grouped by day, newest first.

use leptos::prelude::*;

use crate::feed::{group_by_day, time_label};
use crate::models::{EventKind, LogEvent};

#[component]
pub fn ActivityFeed(#[prop(into)] events: Signal<Vec<LogEvent>>) -> impl IntoView {
    let groups = move || events.with(|events| group_by_day(events));

    view! {
        <div class="activity-feed">
            <Show
                when=move || events.with(|e| !e.is_empty())
                fallback=|| view! { <p class="feed-empty">"No activity yet."</p> }
            >
                <ul>
                    {move || groups().into_iter().map(|group| {
                        let label = group.label();
                        view! {
                            <li class="feed-day">
                                <div class="feed-day-label">{label}</div>
                                <ul class="feed-events">
                                    {group.events.into_iter().map(|(at, event)| {
                                        let (icon, icon_class) = match event.kind {
                                            EventKind::Apply => ("✔", "feed-icon ok"),
                                            EventKind::Error => ("✖", "feed-icon err"),
                                        };
                                        view! {
                                            <li class="feed-event">
                                                <span class=icon_class>{icon}</span>
                                                <span class="feed-time">{time_label(at)}</span>
                                                <span class="feed-message">{event.message}</span>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

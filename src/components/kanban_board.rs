//! Kanban Board Component
//!
//! Application cards grouped into status columns. Cards are dragged between
//! columns with leptos-dragdrop; a drop on a different column is reported
//! through `on_move`.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::kanban::{column_of, group_by_column, Column, KanbanItem, COLUMNS};

/// Card moved from one status column to another
pub type CardMove = DropEvent<String, String>;

type BoardDnd = DndSignals<String, String>;

#[component]
fn KanbanCard(item: KanbanItem, dnd: BoardDnd) -> impl IntoView {
    let on_mousedown = make_on_mousedown(dnd, item.id.clone());
    let id = item.id.clone();
    let card_class = move || {
        if dnd.is_dragging(&id) { "kanban-card dragging" } else { "kanban-card" }
    };
    let aria = format!("Candidate {} for job {}", item.candidate, item.job);
    let url = item.url.clone();

    view! {
        <div class=card_class role="listitem" tabindex="0" aria-label=aria on:mousedown=on_mousedown>
            <div class="kanban-card-candidate">{item.candidate.clone()}</div>
            <div class="kanban-card-job">
                {item.job.clone()}
                {(!url.is_empty()).then(|| view! {
                    <a class="kanban-card-link" href=url target="_blank" rel="noopener noreferrer">"↗"</a>
                })}
            </div>
            <div class="kanban-card-updated">{item.updated_label()}</div>
        </div>
    }
}

#[component]
fn KanbanColumn(
    column: Column,
    cards: Signal<Vec<KanbanItem>>,
    dnd: BoardDnd,
) -> impl IntoView {
    let zone = column.id.to_string();
    let on_mouseenter = make_on_zone_mouseenter(dnd, zone.clone());
    let on_mouseleave = make_on_mouseleave(dnd);
    let column_class = move || {
        if dnd.is_drop_target(&zone) { "kanban-column drop-target" } else { "kanban-column" }
    };

    view! {
        <section
            class=column_class
            aria-label=column.title
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <h3 class="kanban-column-title">
                {column.title}
                <span class="kanban-count">{move || cards.with(|c| c.len())}</span>
            </h3>
            <div class="kanban-cards" role="list" aria-label=format!("{} items", column.title)>
                <For
                    each=move || cards.get()
                    key=|item| (item.id.clone(), item.status.clone(), item.updated_at.clone())
                    children=move |item| view! { <KanbanCard item=item dnd=dnd /> }
                />
            </div>
        </section>
    }
}

#[component]
pub fn KanbanBoard(
    #[prop(into)] items: Signal<Vec<KanbanItem>>,
    on_move: Callback<CardMove>,
) -> impl IntoView {
    let ctx = use_app_context();
    let dnd: BoardDnd = create_dnd_signals(ctx.config().drag_threshold_px);

    // Source column is looked up from current statuses when a drag starts
    let listeners = bind_global_handlers(
        dnd,
        move |id: &String| column_of(COLUMNS, &items.get_untracked(), id).map(str::to_string),
        move |ev: CardMove| {
            log::info!("[DND] Drop {} : {} -> {}", ev.item, ev.from, ev.to);
            on_move.run(ev);
        },
    );
    // Unbinds the document listeners when the board unmounts
    let _listeners = StoredValue::new_local(listeners);

    let grouped = Memo::new(move |_| {
        items.with(|items| {
            group_by_column(COLUMNS, items)
                .into_iter()
                .map(|(col, members)| (col, members.into_iter().cloned().collect::<Vec<_>>()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="kanban-board" role="list" aria-label="Kanban Columns">
            {COLUMNS.iter().map(|col| {
                let col = *col;
                let cards = Signal::derive(move || {
                    grouped.with(|g| {
                        g.iter()
                            .find(|(c, _)| c.id == col.id)
                            .map(|(_, members)| members.clone())
                            .unwrap_or_default()
                    })
                });
                view! { <KanbanColumn column=col cards=cards dnd=dnd /> }
            }).collect_view()}
        </div>
    }
}

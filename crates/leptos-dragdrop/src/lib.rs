//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Items are dragged between drop zones (e.g. kanban columns); the
//! transition rules live in [`machine`].

pub mod machine;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub use machine::{DragMachine, DragPhase, DropEvent, DEFAULT_THRESHOLD_PX};

/// DnD state signals
pub struct DndSignals<Id: 'static, Zone: 'static> {
    pub machine: RwSignal<DragMachine<Id, Zone>>,
}

impl<Id, Zone> Clone for DndSignals<Id, Zone> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id, Zone> Copy for DndSignals<Id, Zone> {}

pub fn create_dnd_signals<Id, Zone>(threshold_px: i32) -> DndSignals<Id, Zone>
where
    Id: Send + Sync + 'static,
    Zone: Send + Sync + 'static,
{
    DndSignals {
        machine: RwSignal::new(DragMachine::new(threshold_px)),
    }
}

impl<Id, Zone> DndSignals<Id, Zone>
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Zone: Clone + PartialEq + Send + Sync + 'static,
{
    /// Whether `item` is the one being dragged (tracked)
    pub fn is_dragging(&self, item: &Id) -> bool {
        self.machine.with(|m| m.dragging_item() == Some(item))
    }

    /// Whether `zone` is the current drop target (tracked)
    pub fn is_drop_target(&self, zone: &Zone) -> bool {
        self.machine
            .with(|m| m.hovered() == Some(zone) && m.source() != Some(zone))
    }
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<Id, Zone>(
    dnd: DndSignals<Id, Zone>,
    item: Id,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Zone: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is a control inside the card
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
        }
        let item = item.clone();
        dnd.machine
            .update(|m| m.press(item, ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for drop zones
pub fn make_on_zone_mouseenter<Id, Zone>(
    dnd: DndSignals<Id, Zone>,
    zone: Zone,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Zone: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.machine.with_untracked(|m| m.is_dragging()) {
            let zone = zone.clone();
            dnd.machine.update(|m| m.hover(zone));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<Id, Zone>(
    dnd: DndSignals<Id, Zone>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Zone: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.machine.with_untracked(|m| m.hovered().is_some()) {
            dnd.machine.update(|m| m.leave());
        }
    }
}

/// Document-level listeners; removed from the document when dropped
pub struct GlobalListeners {
    bound: Vec<(&'static str, Closure<dyn FnMut(web_sys::MouseEvent)>)>,
}

impl GlobalListeners {
    fn bind(&mut self, event: &'static str, listener: Closure<dyn FnMut(web_sys::MouseEvent)>) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            let _ = doc.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        self.bound.push((event, listener));
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            for (event, listener) in &self.bound {
                let _ = doc.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            }
        }
    }
}

/// Bind document mousemove/mouseup handlers.
///
/// `locate` answers which zone currently holds an item when a drag starts;
/// `on_drop` receives committed cross-zone moves. Keep the returned guard
/// alive for as long as the board is mounted.
pub fn bind_global_handlers<Id, Zone, L, F>(
    dnd: DndSignals<Id, Zone>,
    locate: L,
    on_drop: F,
) -> GlobalListeners
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Zone: Clone + PartialEq + Send + Sync + 'static,
    L: Fn(&Id) -> Option<Zone> + 'static,
    F: Fn(DropEvent<Id, Zone>) + 'static,
{
    let mut listeners = GlobalListeners { bound: Vec::new() };

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd
            .machine
            .try_with_untracked(|m| matches!(m.phase(), DragPhase::Pending { .. }))
            .unwrap_or(false);
        if pending {
            // Only notify once the press turns into a drag
            let started = dnd
                .machine
                .try_update_untracked(|m| m.motion(ev.client_x(), ev.client_y(), &locate))
                .unwrap_or(false);
            if started {
                dnd.machine.notify();
            }
        }
    });
    listeners.bind("mousemove", on_mousemove);

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let Some((idle, dragging)) = dnd.machine.try_with_untracked(|m| (m.is_idle(), m.is_dragging())) else {
            return;
        };
        if idle {
            return;
        }
        if !dragging {
            // Pressed but never moved: a plain click
            dnd.machine.update(|m| m.cancel());
            return;
        }
        let dropped = dnd.machine.try_update(|m| m.release()).flatten();
        if let Some(ev) = dropped {
            on_drop(ev);
        }
    });
    listeners.bind("mouseup", on_mouseup);

    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    type Board = DndSignals<&'static str, &'static str>;

    #[test]
    fn test_signals_follow_drag_to_drop() {
        let owner = Owner::new();
        owner.set();
        let dnd: Board = create_dnd_signals(DEFAULT_THRESHOLD_PX);

        dnd.machine.update(|m| {
            m.press("card-1", 0, 0);
            m.motion(40, 0, |_| Some("Applied"));
        });
        assert!(dnd.is_dragging(&"card-1"));
        assert!(!dnd.is_dragging(&"card-2"));

        // Hovering the source column is not a drop target
        dnd.machine.update(|m| m.hover("Applied"));
        assert!(!dnd.is_drop_target(&"Applied"));
        dnd.machine.update(|m| m.hover("Offer"));
        assert!(dnd.is_drop_target(&"Offer"));

        let dropped = dnd.machine.try_update(|m| m.release()).flatten();
        assert_eq!(dropped, Some(DropEvent { item: "card-1", from: "Applied", to: "Offer" }));
        assert!(!dnd.is_dragging(&"card-1"));
        assert!(!dnd.is_drop_target(&"Offer"));
    }

    #[test]
    fn test_press_without_travel_is_not_a_drag() {
        let owner = Owner::new();
        owner.set();
        let dnd: Board = create_dnd_signals(DEFAULT_THRESHOLD_PX);

        dnd.machine.update(|m| {
            m.press("card-1", 5, 5);
            m.motion(10, 12, |_| Some("Applied"));
        });
        assert!(!dnd.is_dragging(&"card-1"));
        assert_eq!(dnd.machine.try_update(|m| m.release()).flatten(), None);
        assert!(dnd.machine.with_untracked(|m| m.is_idle()));
    }
}

//! Toast Notifications
//!
//! Session-wide list of transient notifications. Each toast owns a timer
//! that removes it after its duration; removing a toast by hand cancels
//! that timer.

use std::collections::HashMap;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::DEFAULT_TOAST_MS;
use crate::timer::{Scheduler, TimerGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Success,
    Error,
    Info,
}

impl Variant {
    pub fn css_class(self) -> &'static str {
        match self {
            Variant::Success => "toast toast-success",
            Variant::Error => "toast toast-error",
            Variant::Info => "toast toast-info",
        }
    }
}

/// Request to show a toast
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
    /// Lifetime in ms; `None` or 0 means the configured default
    pub duration_ms: Option<u32>,
}

impl Notification {
    pub fn new(variant: Variant, title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, variant, duration_ms: None }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Variant::Success, title).with_description(description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Variant::Error, title).with_description(description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Variant::Info, title).with_description(description)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
    pub duration_ms: u32,
}

/// Active toasts in display order plus their pending timers
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    timers: HashMap<ToastId, TimerGuard>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Append a toast with a fresh id. Ids are never reused in a session.
    pub fn push(&mut self, notification: Notification, default_ms: u32) -> Toast {
        self.next_id += 1;
        let default_ms = if default_ms == 0 { DEFAULT_TOAST_MS } else { default_ms };
        let toast = Toast {
            id: ToastId(self.next_id),
            title: notification.title,
            description: notification.description,
            variant: notification.variant,
            duration_ms: notification.duration_ms.filter(|&ms| ms > 0).unwrap_or(default_ms),
        };
        self.toasts.push(toast.clone());
        toast
    }

    /// Attach the expiry timer for `id`. A timer for a toast that is
    /// already gone is cancelled on the spot.
    pub fn arm(&mut self, id: ToastId, timer: TimerGuard) {
        if self.contains(id) {
            self.timers.insert(id, timer);
        }
    }

    /// Remove a toast and cancel its timer. Unknown ids are ignored.
    pub fn remove(&mut self, id: ToastId) -> bool {
        self.timers.remove(&id);
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast and cancel every timer
    pub fn clear(&mut self) {
        self.timers.clear();
        self.toasts.clear();
    }
}

/// Reactive handle to the session toast queue, provided via context
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue, LocalStorage>,
    scheduler: StoredValue<Rc<dyn Scheduler>, LocalStorage>,
    default_ms: u32,
}

impl Toaster {
    pub fn new(scheduler: Rc<dyn Scheduler>, default_ms: u32) -> Self {
        Self {
            queue: RwSignal::new_local(ToastQueue::new()),
            scheduler: StoredValue::new_local(scheduler),
            default_ms,
        }
    }

    /// Show a toast and schedule its removal. Returns `None` once the
    /// owning scope has been torn down.
    pub fn add(&self, notification: Notification) -> Option<ToastId> {
        let toast = self.queue.try_update(|q| q.push(notification, self.default_ms))?;
        let id = toast.id;
        log::debug!("[TOAST] add {} {:?} '{}' for {}ms", id, toast.variant, toast.title, toast.duration_ms);

        let this = *self;
        let timer = self.scheduler.try_with_value(|s| {
            s.schedule(toast.duration_ms, Box::new(move || this.remove(id)))
        })?;
        self.queue.update_untracked(|q| q.arm(id, timer));
        Some(id)
    }

    pub fn success(&self, title: &str, description: &str) -> Option<ToastId> {
        self.add(Notification::success(title, description))
    }

    /// Dismiss a toast. Safe for ids that already expired.
    pub fn remove(&self, id: ToastId) {
        let present = self.queue.try_with_untracked(|q| q.contains(id)).unwrap_or(false);
        if present {
            log::debug!("[TOAST] remove {}", id);
            self.queue.try_update(|q| q.remove(id));
        }
    }

    /// Cancel all timers and drop all toasts
    pub fn clear(&self) {
        self.queue.try_update(|q| q.clear());
    }

    /// Current toasts in display order (tracked)
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    /// Number of timers still pending
    pub fn pending_timers(&self) -> usize {
        self.queue.try_with_untracked(|q| q.pending_timers()).unwrap_or(0)
    }
}

/// Get the toaster from context
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;

    fn note(title: &str) -> Notification {
        Notification::info(title, "")
    }

    fn titles(toasts: &[Toast]) -> Vec<&str> {
        toasts.iter().map(|t| t.title.as_str()).collect()
    }

    fn toaster(scheduler: &ManualScheduler) -> Toaster {
        Toaster::new(Rc::new(scheduler.clone()), DEFAULT_TOAST_MS)
    }

    #[test]
    fn test_ids_stay_unique_across_add_and_remove() {
        let mut q = ToastQueue::new();
        let a = q.push(note("a"), 4000).id;
        let b = q.push(note("b"), 4000).id;
        q.remove(a);
        let c = q.push(note("c"), 4000).id;
        assert_ne!(a, b);
        assert_ne!(c, a);
        assert_ne!(c, b);
        let mut ids: Vec<_> = q.toasts().iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), q.len());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut q = ToastQueue::new();
        q.push(note("a"), 4000);
        assert!(!q.remove(ToastId(999)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_removing_middle_keeps_order() {
        let mut q = ToastQueue::new();
        q.push(note("first"), 4000);
        let second = q.push(note("second"), 4000).id;
        q.push(note("third"), 4000);
        assert!(q.remove(second));
        assert_eq!(titles(q.toasts()), vec!["first", "third"]);
    }

    #[test]
    fn test_duration_defaults_and_zero_is_normalised() {
        let mut q = ToastQueue::new();
        assert_eq!(q.push(note("a"), 4000).duration_ms, 4000);
        assert_eq!(q.push(note("b").with_duration(0), 4000).duration_ms, 4000);
        assert_eq!(q.push(note("c").with_duration(1500), 4000).duration_ms, 1500);
        assert_eq!(q.push(note("d"), 0).duration_ms, DEFAULT_TOAST_MS);
    }

    #[test]
    fn test_arm_after_removal_cancels_timer() {
        let sched = ManualScheduler::new();
        let mut q = ToastQueue::new();
        let id = q.push(note("a"), 4000).id;
        q.remove(id);
        q.arm(id, sched.schedule(4000, Box::new(|| panic!("must not fire"))));
        assert_eq!(q.pending_timers(), 0);
        sched.advance(10_000);
        assert_eq!(sched.fired(), 0);
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let owner = Owner::new();
        owner.set();
        let sched = ManualScheduler::new();
        let toaster = toaster(&sched);

        toaster.add(note("saved").with_duration(1000));
        sched.advance(999);
        assert_eq!(toaster.toasts().len(), 1);
        sched.advance(1);
        assert!(toaster.toasts().is_empty());
        assert_eq!(toaster.pending_timers(), 0);
    }

    #[test]
    fn test_dismissed_toast_never_fires() {
        let owner = Owner::new();
        owner.set();
        let sched = ManualScheduler::new();
        let toaster = toaster(&sched);

        let id = toaster.add(note("bye")).unwrap();
        toaster.remove(id);
        assert_eq!(sched.live(), 0);
        sched.advance(60_000);
        assert_eq!(sched.fired(), 0);
        // Dismissing again is harmless
        toaster.remove(id);
        assert!(toaster.toasts().is_empty());
    }

    #[test]
    fn test_timers_are_independent() {
        let owner = Owner::new();
        owner.set();
        let sched = ManualScheduler::new();
        let toaster = toaster(&sched);

        let short = toaster.add(note("short").with_duration(500)).unwrap();
        toaster.add(note("long").with_duration(5000));
        toaster.remove(short);
        sched.advance(4999);
        assert_eq!(titles(&toaster.toasts()), vec!["long"]);
        sched.advance(1);
        assert!(toaster.toasts().is_empty());
        assert_eq!(sched.fired(), 1);
    }

    #[test]
    fn test_clear_cancels_everything() {
        let owner = Owner::new();
        owner.set();
        let sched = ManualScheduler::new();
        let toaster = toaster(&sched);

        for n in 0..3 {
            toaster.add(note(&format!("t{}", n)));
        }
        assert_eq!(sched.live(), 3);
        toaster.clear();
        assert_eq!(sched.live(), 0);
        sched.advance(10_000);
        assert_eq!(sched.fired(), 0);
        assert!(toaster.toasts().is_empty());
    }
}

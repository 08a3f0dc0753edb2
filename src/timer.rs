//! Timer Scheduling
//!
//! One-shot timers behind a trait so toast lifetimes can be driven by a
//! manual clock in tests.

use std::any::Any;

/// Handle to a scheduled callback. Dropping it cancels the callback; dropping
/// it after the callback ran is harmless.
pub struct TimerGuard {
    _inner: Box<dyn Any>,
}

impl TimerGuard {
    pub fn new<T: 'static>(inner: T) -> Self {
        Self { _inner: Box::new(inner) }
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TimerGuard")
    }
}

pub trait Scheduler {
    /// Run `callback` once after `delay_ms` unless the returned guard is
    /// dropped first.
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerGuard;
}

/// `setTimeout` via gloo-timers
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerGuard {
        TimerGuard::new(gloo_timers::callback::Timeout::new(delay_ms, callback))
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Deterministic clock for tests

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{Scheduler, TimerGuard};

    struct Entry {
        due_ms: u64,
        callback: Box<dyn FnOnce()>,
        cancelled: Rc<Cell<bool>>,
    }

    struct CancelOnDrop(Rc<Cell<bool>>);

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[derive(Default)]
    struct Clock {
        now_ms: u64,
        entries: Vec<Entry>,
        fired: usize,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Move time forward, running every live callback that falls due
        pub fn advance(&self, ms: u64) {
            let target = self.clock.borrow().now_ms + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    clock.entries.retain(|e| !e.cancelled.get());
                    let due = clock
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due_ms <= target)
                        .min_by_key(|(_, e)| e.due_ms)
                        .map(|(i, _)| i);
                    due.map(|i| {
                        let entry = clock.entries.remove(i);
                        clock.now_ms = clock.now_ms.max(entry.due_ms);
                        clock.fired += 1;
                        entry
                    })
                };
                match next {
                    // Run outside the borrow so the callback may schedule again
                    Some(entry) => (entry.callback)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now_ms = target;
        }

        pub fn fired(&self) -> usize {
            self.clock.borrow().fired
        }

        /// Timers neither fired nor cancelled
        pub fn live(&self) -> usize {
            self.clock.borrow().entries.iter().filter(|e| !e.cancelled.get()).count()
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerGuard {
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let due_ms = clock.now_ms + u64::from(delay_ms);
            clock.entries.push(Entry { due_ms, callback, cancelled: cancelled.clone() });
            TimerGuard::new(CancelOnDrop(cancelled))
        }
    }
}

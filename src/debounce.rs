//! Trailing-edge debounce over platform timers.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::platform::{Platform, TimerHandle};

/// Default debounce wait in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// A function wrapped so that bursts of calls collapse into the last one.
///
/// Every [`call`](Debounced::call) cancels the pending invocation, if any, and
/// schedules a new one `wait_ms` later with the latest arguments. Earlier calls
/// in the burst are discarded, not queued.
///
/// Clones share the same pending timer: they are the same debounced function.
pub struct Debounced<P: Platform, A> {
    platform: P,
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: Rc<Cell<Option<TimerHandle>>>,
}

impl<P: Platform, A: 'static> Debounced<P, A> {
    /// Schedules `callback(args)` after the wait, superseding any pending call.
    pub fn call(&self, args: A) {
        if let Some(handle) = self.pending.take() {
            self.platform.clear_timeout(handle);
        }
        let callback = Rc::clone(&self.callback);
        let pending = Rc::clone(&self.pending);
        let handle = self.platform.set_timeout(
            Box::new(move || {
                pending.set(None);
                callback(args);
            }),
            self.wait_ms,
        );
        self.pending.set(handle);
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }
}

impl<P: Platform, A> Clone for Debounced<P, A> {
    fn clone(&self) -> Self {
        Self {
            platform: self.platform.clone(),
            wait_ms: self.wait_ms,
            callback: Rc::clone(&self.callback),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<P: Platform, A> fmt::Debug for Debounced<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait_ms", &self.wait_ms)
            .field("pending", &self.pending.get())
            .finish()
    }
}

/// Wraps `callback` so it only runs once calls have stopped for `wait_ms`.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use outstanding_dom::{debounce, MemoryDom};
///
/// let dom = MemoryDom::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let search = debounce(&dom, move |query: String| sink.borrow_mut().push(query), 100);
///
/// search.call("r".into());
/// search.call("ru".into());
/// search.call("rust".into());
/// dom.advance(100);
///
/// assert_eq!(*seen.borrow(), vec!["rust".to_string()]);
/// ```
pub fn debounce<P, A, F>(platform: &P, callback: F, wait_ms: u32) -> Debounced<P, A>
where
    P: Platform,
    A: 'static,
    F: Fn(A) + 'static,
{
    Debounced {
        platform: platform.clone(),
        wait_ms,
        callback: Rc::new(callback),
        pending: Rc::new(Cell::new(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryDom;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (calls, move |n: u32| sink.borrow_mut().push(n))
    }

    #[test]
    fn test_debounce_collapses_burst() {
        let dom = MemoryDom::new();
        let (calls, record) = recorder();
        let debounced = debounce(&dom, record, 100);

        for n in 1..=5 {
            debounced.call(n);
            dom.advance(50);
        }
        assert!(calls.borrow().is_empty());

        dom.advance(50);
        assert_eq!(*calls.borrow(), vec![5]);
        assert_eq!(dom.pending_timers(), 0);
    }

    #[test]
    fn test_debounce_separate_windows() {
        let dom = MemoryDom::new();
        let (calls, record) = recorder();
        let debounced = debounce(&dom, record, DEFAULT_DEBOUNCE_MS);

        debounced.call(1);
        dom.advance(200);
        debounced.call(2);
        dom.advance(200);
        assert_eq!(*calls.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_debounce_waits_full_period_from_last_call() {
        let dom = MemoryDom::new();
        let (calls, record) = recorder();
        let debounced = debounce(&dom, record, 100);

        debounced.call(1);
        dom.advance(90);
        debounced.call(2);
        dom.advance(90);
        assert!(calls.borrow().is_empty());
        dom.advance(10);
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn test_debounce_clones_share_timer() {
        let dom = MemoryDom::new();
        let (calls, record) = recorder();
        let a = debounce(&dom, record, 100);
        let b = a.clone();

        a.call(1);
        b.call(2);
        assert_eq!(dom.pending_timers(), 1);
        dom.advance(100);
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn test_debounce_instances_independent() {
        let dom = MemoryDom::new();
        let (calls, record) = recorder();
        let record = Rc::new(record);
        let first = {
            let record = Rc::clone(&record);
            debounce(&dom, move |n: u32| record(n), 100)
        };
        let second = {
            let record = Rc::clone(&record);
            debounce(&dom, move |n: u32| record(n * 10), 100)
        };

        first.call(1);
        second.call(2);
        dom.advance(100);
        assert_eq!(*calls.borrow(), vec![1, 20]);
    }

    #[test]
    fn test_debounce_superseded_call_releases_arguments() {
        let dom = MemoryDom::new();
        let debounced = debounce(&dom, |_: Rc<()>| {}, 100);
        let first = Rc::new(());

        debounced.call(Rc::clone(&first));
        assert_eq!(Rc::strong_count(&first), 2);
        debounced.call(Rc::new(()));
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(dom.pending_timers(), 1);
    }

    #[test]
    fn test_debounce_without_document_still_schedules() {
        let dom = MemoryDom::detached();
        let (calls, record) = recorder();
        let debounced = debounce(&dom, record, 10);
        debounced.call(7);
        dom.advance(10);
        assert_eq!(*calls.borrow(), vec![7]);
    }
}

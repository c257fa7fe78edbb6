// ============================================================================
// Timers and Deferred Dispatch
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// One-shot timers an offstage instance can have pending
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Commit `actual_offstage = false` after `delay_before_show`
    ShowContent,
    /// Commit `actual_offstage = true` after `delay_before_hide`
    HideContent,
    /// Raise the loading indicator after `show_loading_after`
    ShowLoading,
}

/// A timer that came due
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub due: Instant,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    kind: TimerKind,
    /// `None` when the deadline lies beyond what `Instant` can represent
    due: Option<Instant>,
}

/// Per-instance queue of one-shot timers.
///
/// Each [`TimerKind`] has at most one pending entry: scheduling a kind that is
/// already pending replaces the old deadline.
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire `delay` after `now`.
    ///
    /// A delay too large to add to `now` leaves the timer pending forever.
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration) {
        self.cancel(kind);
        let due = now.checked_add(delay);
        if due.is_none() {
            log::debug!("{:?} delay of {:?} never elapses", kind, delay);
        }
        self.pending.push(Pending { kind, due });
        request_frame();
    }

    /// Drop a pending timer. Returns true if one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.kind != kind);
        before != self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    /// Earliest deadline, for hosts that sleep until the next wakeup
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().filter_map(|t| t.due).min()
    }

    /// Remove and return every timer due at or before `now`, earliest first
    pub fn drain_due(&mut self, now: Instant) -> Vec<Timer> {
        let mut fired = Vec::new();
        self.pending.retain(|t| match t.due {
            Some(due) if due <= now => {
                fired.push(Timer { kind: t.kind, due });
                false
            }
            _ => true,
        });
        fired.sort_by_key(|t| t.due);
        fired
    }
}

type DeferredFn = Box<dyn FnOnce()>;

thread_local! {
    /// Closures waiting for the next cycle. UI state is single-threaded, so the
    /// queue lives on the thread that owns the widgets.
    static DEFERRED: RefCell<VecDeque<DeferredFn>> = RefCell::new(VecDeque::new());

    /// Set when an animation or timer needs the host to keep ticking
    static FRAME_REQUESTED: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` on the next cycle instead of now.
///
/// Callbacks fire while an update is in progress; state changes made in
/// response should go through here so the host never sees a reentrant update.
pub fn defer(f: impl FnOnce() + 'static) {
    DEFERRED.with(|q| q.borrow_mut().push_back(Box::new(f)));
    request_frame();
}

/// Run everything deferred so far. Closures deferred while flushing run on
/// the following flush. Returns the number of closures run.
pub fn flush_deferred() -> usize {
    let batch = DEFERRED.with(|q| std::mem::take(&mut *q.borrow_mut()));
    let count = batch.len();
    for f in batch {
        f();
    }
    count
}

/// Request that the host process another frame
pub fn request_frame() {
    FRAME_REQUESTED.with(|f| f.set(true));
}

/// Check if a frame has been requested and clear the flag
pub fn take_frame_request() -> bool {
    FRAME_REQUESTED.with(|f| f.replace(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_schedule_replaces_same_kind() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::HideContent, t0, Duration::from_millis(300));
        q.schedule(TimerKind::HideContent, t0, Duration::from_millis(500));
        assert_eq!(q.next_deadline(), Some(t0 + Duration::from_millis(500)));
        assert!(q.drain_due(t0 + Duration::from_millis(300)).is_empty());
    }

    #[test]
    fn test_drain_due_in_order() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::ShowLoading, t0, Duration::from_millis(200));
        q.schedule(TimerKind::HideContent, t0, Duration::from_millis(100));
        q.schedule(TimerKind::ShowContent, t0, Duration::from_millis(900));

        let due = q.drain_due(t0 + Duration::from_millis(250));
        let kinds: Vec<_> = due.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TimerKind::HideContent, TimerKind::ShowLoading]);
        assert!(q.is_pending(TimerKind::ShowContent));
    }

    #[test]
    fn test_unrepresentable_delay_never_fires() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::HideContent, t0, Duration::MAX);
        assert!(q.is_pending(TimerKind::HideContent));
        assert_eq!(q.next_deadline(), None);
        assert!(q.drain_due(t0 + Duration::from_secs(3600)).is_empty());
        assert!(q.cancel(TimerKind::HideContent));
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::ShowLoading, t0, Duration::from_millis(200));
        assert!(q.cancel(TimerKind::ShowLoading));
        assert!(!q.cancel(TimerKind::ShowLoading));
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn test_deferred_runs_on_flush() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        defer(move || h.set(h.get() + 1));
        assert_eq!(hits.get(), 0);
        assert_eq!(flush_deferred(), 1);
        assert_eq!(hits.get(), 1);
        assert_eq!(flush_deferred(), 0);
    }

    #[test]
    fn test_frame_request_flag() {
        request_frame();
        assert!(take_frame_request());
        assert!(!take_frame_request());
    }
}

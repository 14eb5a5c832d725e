//! Host environment contract
//!
//! Everything the controller needs from the page goes through `PageHost`:
//! layout reads, scroll roots, event subscriptions, frame scheduling and the
//! URL fragment. The browser implementation lives in `folio-web`; tests use
//! an in-memory host.
//!
//! ```text
//! DOM scroll/resize ──► PageHost ──► ScrollSync ──► NavView
//!                                        │
//!                                        └──► ScrollRoot::scroll_to / replace_fragment
//! ```

use std::cell::Cell;
use std::rc::Rc;

use crate::root::{Extent, RootKind, ScrollRoot};

/// Handle for an active event listener.
///
/// Dropping it (or calling [`Subscription::unsubscribe`]) removes the
/// listener. Each subscription is released exactly once.
#[must_use = "dropping a Subscription removes the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Wrap an RAII listener guard (e.g. `gloo::events::EventListener`).
    pub fn from_guard<G: 'static>(guard: G) -> Self {
        Self::new(move || drop(guard))
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// The page as seen by the controller.
pub trait PageHost {
    /// Content and visible height of the designated container, if it exists.
    fn container_extent(&self) -> Option<Extent>;

    /// The concrete root for `kind`.
    ///
    /// Hosts without a container return the window root for either kind.
    fn root(&self, kind: RootKind) -> Box<dyn ScrollRoot>;

    /// Attach a passive scroll listener to the root of `kind`.
    fn subscribe_scroll(&self, kind: RootKind, handler: Rc<dyn Fn()>) -> Subscription;

    /// Run `callback` before the next repaint.
    fn request_frame(&self, callback: Box<dyn FnOnce()>);

    /// Replace the URL fragment without adding a history entry.
    fn replace_fragment(&self, fragment: &str);
}

/// One-shot "frame pending" flag.
///
/// Collapses a burst of events into a single piece of work per frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate. Returns false if work is already scheduled.
    pub fn try_arm(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Reopen the gate once the scheduled work has run.
    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_cancels_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        sub.unsubscribe();
        assert_eq!(count.get(), 1);

        let c = count.clone();
        {
            let _sub = Subscription::new(move || c.set(c.get() + 1));
        }
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_guard_is_dropped_on_unsubscribe() {
        struct Guard(Rc<Cell<bool>>);
        impl Drop for Guard {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let dropped = Rc::new(Cell::new(false));
        let sub = Subscription::from_guard(Guard(dropped.clone()));
        assert!(!dropped.get());
        drop(sub);
        assert!(dropped.get());
    }

    #[test]
    fn test_frame_gate() {
        let gate = FrameGate::new();
        assert!(gate.try_arm());
        assert!(!gate.try_arm());
        assert!(gate.is_pending());
        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.try_arm());
    }
}

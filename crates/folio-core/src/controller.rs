//! Scroll-sync controller
//!
//! Keeps the navigation highlight in step with the scroll position, owns
//! the choice of scroll root, and provides the one smooth-scroll primitive
//! every click-driven navigation goes through.
//!
//! # Lifecycle
//! - `ScrollSync::new` once at page load, then `initialize()`
//! - host forwards `resize` to `on_resize()` and clicks to `handle_click()`
//! - `land_on_home()` after the first layout and again on `load`
//! - `teardown()` (or dropping the last `Rc`) releases the scroll listener
//!
//! Scroll events never recompute synchronously: the first event in a frame
//! arms a `FrameGate` and schedules one recomputation, later events in the
//! same frame are dropped. Resize recomputes immediately.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::click::{nav_link_target, ClickOutcome, ClickTarget};
use crate::config::{find_cta, CtaBinding, FolioConfig};
use crate::host::{FrameGate, PageHost, Subscription};
use crate::nav::{NavBar, NavEntry};
use crate::root::{select_root, RootKind, ScrollBehavior, ScrollRoot};
use crate::section::{active_index, SectionId};

/// The root currently listened to and its listener.
struct BoundRoot {
    kind: RootKind,
    _subscription: Subscription,
}

pub struct ScrollSync<H: PageHost + 'static> {
    host: H,
    nav: RefCell<NavBar>,
    cta: Vec<CtaBinding>,
    home: SectionId,
    bound: RefCell<Option<BoundRoot>>,
    frame: FrameGate,
    this: Weak<Self>,
}

impl<H: PageHost + 'static> ScrollSync<H> {
    pub fn new(host: H, nav: NavBar, config: &FolioConfig) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            host,
            nav: RefCell::new(nav),
            cta: config.cta.clone(),
            home: SectionId::new(config.home_section.clone()),
            bound: RefCell::new(None),
            frame: FrameGate::new(),
            this: this.clone(),
        })
    }

    /// Bind the scroll listener and compute the initial highlight.
    pub fn initialize(&self) {
        self.bind_scroll_root();
        self.refresh_active_nav();
        tracing::info!(
            "ScrollSync: initialized ({} nav entries, root {:?})",
            self.nav.borrow().len(),
            self.bound_root()
        );
    }

    /// Release the scroll listener.
    pub fn teardown(&self) {
        let released = self.bound.borrow_mut().take();
        if let Some(bound) = released {
            tracing::debug!("ScrollSync: released {:?} listener", bound.kind);
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Snapshot of the navigation entries.
    pub fn nav_entries(&self) -> Vec<NavEntry> {
        self.nav.borrow().entries().to_vec()
    }

    pub fn active_nav(&self) -> Option<usize> {
        self.nav.borrow().active_index()
    }

    /// Root kind the scroll listener is attached to, if any.
    pub fn bound_root(&self) -> Option<RootKind> {
        self.bound.borrow().as_ref().map(|b| b.kind)
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame.is_pending()
    }

    /// Root kind for the current layout. Never cached.
    pub fn select_scroll_root(&self) -> RootKind {
        select_root(self.host.container_extent())
    }

    fn current_root(&self) -> Box<dyn ScrollRoot> {
        self.host.root(self.select_scroll_root())
    }

    /// Attach the scroll listener to the selected root.
    ///
    /// No-op when that root is already bound. Otherwise the previous
    /// listener is removed before the new one is attached. Returns true
    /// when the binding changed.
    pub fn bind_scroll_root(&self) -> bool {
        let kind = self.select_scroll_root();
        if self.bound_root() == Some(kind) {
            return false;
        }

        let previous = self.bound.borrow_mut().take();
        let previous_kind = previous.as_ref().map(|b| b.kind);
        drop(previous);

        let weak = self.this.clone();
        let handler: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(sync) = weak.upgrade() {
                sync.on_scroll();
            }
        });
        let subscription = self.host.subscribe_scroll(kind, handler);
        *self.bound.borrow_mut() = Some(BoundRoot {
            kind,
            _subscription: subscription,
        });

        tracing::debug!(
            "ScrollSync: scroll listener moved {:?} -> {:?}",
            previous_kind,
            kind
        );
        true
    }

    /// Scroll event handler: schedule at most one recomputation per frame.
    pub fn on_scroll(&self) {
        if !self.frame.try_arm() {
            tracing::trace!("ScrollSync: scroll coalesced into pending frame");
            return;
        }
        let weak = self.this.clone();
        self.host.request_frame(Box::new(move || {
            if let Some(sync) = weak.upgrade() {
                sync.refresh_active_nav();
                sync.frame.release();
            }
        }));
    }

    /// Resize handler: rebind if the root changed, then recompute right away.
    pub fn on_resize(&self) {
        self.bind_scroll_root();
        self.refresh_active_nav();
    }

    /// Index of the section under the middle of the visible area.
    pub fn compute_active_index(&self) -> usize {
        let root = self.current_root();
        active_index(root.reference_position(), &root.sections())
    }

    pub fn apply_active_nav(&self, index: usize) {
        let mut nav = self.nav.borrow_mut();
        let previous = nav.active_index();
        nav.apply_active(index);
        let current = nav.active_index();
        if previous != current {
            tracing::debug!("ScrollSync: active nav {:?} -> {:?}", previous, current);
        }
    }

    /// Recompute and apply the highlight. Returns the computed index.
    pub fn refresh_active_nav(&self) -> usize {
        let index = self.compute_active_index();
        self.apply_active_nav(index);
        index
    }

    /// Smooth-scroll to the element `id` and record `#id` in the URL.
    ///
    /// Returns false, without scrolling or touching the URL, when no such
    /// element exists.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        let root = self.current_root();
        let Some(top) = root.offset_of(id) else {
            tracing::debug!("ScrollSync: no section '{}', ignoring", id);
            return false;
        };
        tracing::debug!("ScrollSync: '{}' at {} in {:?}", id, top, root.kind());
        root.scroll_to(top, ScrollBehavior::Smooth);
        self.host.replace_fragment(&format!("#{}", id));
        true
    }

    /// Force the page onto the home section at offset 0, ignoring any
    /// restored scroll position or incoming fragment.
    pub fn land_on_home(&self) {
        self.host.replace_fragment(&self.home.fragment());
        self.current_root().scroll_to(0.0, ScrollBehavior::Instant);
        self.refresh_active_nav();
    }

    /// Route a click through in-page scrolling.
    pub fn handle_click(&self, target: ClickTarget<'_>) -> ClickOutcome {
        match target {
            ClickTarget::NavLink { href } => {
                self.scroll_to_section(&nav_link_target(href));
                ClickOutcome::Intercepted
            }
            ClickTarget::Button { label, href } => match find_cta(&self.cta, label) {
                Some(section) => {
                    self.scroll_to_section(section);
                    ClickOutcome::Intercepted
                }
                None => match href {
                    Some(href) => self.handle_click(ClickTarget::Anchor { href }),
                    None => ClickOutcome::PassThrough,
                },
            },
            ClickTarget::Anchor { href } => match SectionId::from_href(href) {
                Some(id) if self.scroll_to_section(id.as_str()) => ClickOutcome::Intercepted,
                _ => ClickOutcome::PassThrough,
            },
        }
    }
}

impl<H: PageHost + 'static> std::fmt::Debug for ScrollSync<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSync")
            .field("bound", &self.bound_root())
            .field("frame_pending", &self.frame.is_pending())
            .field("nav", &self.nav.borrow())
            .finish_non_exhaustive()
    }
}

//! Browser implementation of the core host traits
//!
//! `DomHost` answers layout queries from the live DOM. Scroll listeners are
//! `gloo` `EventListener`s wrapped in a `Subscription`, so dropping the
//! subscription removes the listener.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::Selectors;
use folio_core::{
    Extent, NavView, PageHost, RootKind, ScrollBehavior, ScrollRoot, Section, Subscription,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, ScrollToOptions, Window};

use crate::dom;

fn scroll_options(top: f64, behavior: ScrollBehavior) -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(match behavior {
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    });
    options
}

/// The window viewport as a scroll root.
pub struct WindowRoot {
    window: Window,
    document: Document,
    section_selector: String,
}

impl WindowRoot {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Document-relative top of `element`.
    fn top_of(&self, element: &Element) -> f64 {
        element.get_bounding_client_rect().top() + self.scroll_y()
    }
}

impl ScrollRoot for WindowRoot {
    fn kind(&self) -> RootKind {
        RootKind::Window
    }

    fn offset(&self) -> f64 {
        self.scroll_y()
    }

    fn visible_extent(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn sections(&self) -> Vec<Section> {
        dom::query_all(&self.document, &self.section_selector)
            .iter()
            .map(|el| Section::new(el.id().as_str(), self.top_of(el)))
            .collect()
    }

    fn offset_of(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| self.top_of(&el))
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.window
            .scroll_to_with_scroll_to_options(&scroll_options(top, behavior));
    }
}

/// The designated content container as a scroll root.
pub struct ContainerRoot {
    element: HtmlElement,
    document: Document,
    section_selector: String,
}

fn offset_top(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| f64::from(el.offset_top()))
}

impl ScrollRoot for ContainerRoot {
    fn kind(&self) -> RootKind {
        RootKind::Container
    }

    fn offset(&self) -> f64 {
        f64::from(self.element.scroll_top())
    }

    fn visible_extent(&self) -> f64 {
        f64::from(self.element.client_height())
    }

    fn sections(&self) -> Vec<Section> {
        dom::query_all(&self.document, &self.section_selector)
            .iter()
            .filter_map(|el| offset_top(el).map(|top| Section::new(el.id().as_str(), top)))
            .collect()
    }

    fn offset_of(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| offset_top(&el))
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        self.element
            .scroll_to_with_scroll_to_options(&scroll_options(top, behavior));
    }
}

/// The live page.
#[derive(Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
    container: Option<HtmlElement>,
    section_selector: String,
    /// Latest animation frame; dropping it cancels the callback if still pending.
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl DomHost {
    pub fn new(window: Window, document: Document, selectors: &Selectors) -> Self {
        let container = dom::query_html(&document, &selectors.container);
        if container.is_none() {
            tracing::debug!(
                "DomHost: no '{}' container, window scrolling only",
                selectors.container
            );
        }
        Self {
            window,
            document,
            container,
            section_selector: selectors.section.clone(),
            frame: Rc::new(RefCell::new(None)),
        }
    }

    pub fn container(&self) -> Option<&HtmlElement> {
        self.container.as_ref()
    }

    fn target(&self, kind: RootKind) -> EventTarget {
        match (kind, &self.container) {
            (RootKind::Container, Some(container)) => container.clone().into(),
            _ => self.window.clone().into(),
        }
    }
}

impl PageHost for DomHost {
    fn container_extent(&self) -> Option<Extent> {
        self.container.as_ref().map(|c| {
            Extent::new(f64::from(c.scroll_height()), f64::from(c.client_height()))
        })
    }

    fn root(&self, kind: RootKind) -> Box<dyn ScrollRoot> {
        match (kind, &self.container) {
            (RootKind::Container, Some(container)) => Box::new(ContainerRoot {
                element: container.clone(),
                document: self.document.clone(),
                section_selector: self.section_selector.clone(),
            }),
            _ => Box::new(WindowRoot {
                window: self.window.clone(),
                document: self.document.clone(),
                section_selector: self.section_selector.clone(),
            }),
        }
    }

    fn subscribe_scroll(&self, kind: RootKind, handler: Rc<dyn Fn()>) -> Subscription {
        let listener = EventListener::new_with_options(
            &self.target(kind),
            "scroll",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: true,
            },
            move |_event| handler(),
        );
        Subscription::from_guard(listener)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let handle = request_animation_frame(move |_timestamp| callback());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn replace_fragment(&self, fragment: &str) {
        let result = self.window.history().and_then(|history| {
            history.replace_state_with_url(&JsValue::NULL, "", Some(fragment))
        });
        if let Err(e) = result {
            tracing::warn!("DomHost: history.replaceState({}) failed: {:?}", fragment, e);
        }
    }
}

/// Navigation links styled with an `active` class.
pub struct DomNav {
    links: Vec<Element>,
}

impl DomNav {
    pub fn new(links: Vec<Element>) -> Self {
        Self { links }
    }
}

impl NavView for DomNav {
    fn set_active(&self, index: usize, active: bool) {
        if let Some(link) = self.links.get(index) {
            if active {
                dom::add_class(link, "active");
            } else {
                dom::remove_class(link, "active");
            }
        }
    }
}

//! Presentation effects
//!
//! Everything here tolerates missing markup: an absent element means the
//! effect is skipped. Handles returned from here stop their effect when
//! dropped; timer chains stop at their next step once the page's
//! [`Lifetime`] is gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::config::{
    DecorConfig, FolioConfig, GreetingConfig, LoadingConfig, RoleConfig, Selectors,
};
use folio_core::decor::{self, HoverLift};
use folio_core::{PageHost, Result, RoleRotator, RootKind, Subscription, Typewriter};
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{self, JsResultExt};
use crate::host::DomHost;

const STYLESHEET: &str = include_str!("../assets/folio.css");

/// Liveness of the mounted page.
#[derive(Debug, Default)]
pub struct Lifetime(Rc<()>);

impl Lifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&self) -> Watch {
        Watch(Rc::downgrade(&self.0))
    }
}

/// Observes a [`Lifetime`] without keeping it alive.
#[derive(Debug, Clone)]
pub struct Watch(Weak<()>);

impl Watch {
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

/// Inject the toast / float / reveal stylesheet.
pub fn inject_styles(document: &Document) -> Result<()> {
    let style = document.create_element("style").host_err("create style")?;
    style.set_text_content(Some(STYLESHEET));
    if let Some(head) = document.head() {
        head.append_child(&style).host_err("append style")?;
    }
    Ok(())
}

/// Remove the old in-sidebar hamburger if the markup still has one.
pub fn remove_legacy_menu(document: &Document, selectors: &Selectors) {
    for el in dom::query_all(document, &selectors.legacy_menu_toggle) {
        el.remove();
    }
}

// =============================================================================
// HOVER
// =============================================================================

pub fn install_hover_lifts(document: &Document, selectors: &Selectors) -> Vec<EventListener> {
    let targets = [
        (&selectors.skill_item, HoverLift::SkillItem),
        (&selectors.social_link, HoverLift::SocialLink),
        (&selectors.project_card, HoverLift::ProjectCard),
    ];

    let mut listeners = Vec::new();
    for (selector, lift) in targets {
        for el in dom::query_all(document, selector) {
            let target = el.clone();
            listeners.push(EventListener::new(&el, "mouseenter", move |_| {
                dom::set_style(&target, "transform", lift.enter_transform());
            }));
            let target = el.clone();
            listeners.push(EventListener::new(&el, "mouseleave", move |_| {
                dom::set_style(&target, "transform", lift.leave_transform());
            }));
        }
    }
    listeners
}

// =============================================================================
// TEXT
// =============================================================================

/// Type the greeting out after the start delay.
pub fn start_greeting(
    document: &Document,
    selectors: &Selectors,
    config: &GreetingConfig,
    watch: Watch,
) {
    let Some(element) = dom::query(document, &selectors.greeting) else {
        return;
    };
    let writer = Rc::new(RefCell::new(Typewriter::new(config.text.clone())));
    let interval = config.char_interval_ms;
    Timeout::new(config.start_delay_ms, move || {
        if watch.is_alive() {
            element.set_inner_html("");
            type_next(element, writer, interval, watch);
        }
    })
    .forget();
}

fn type_next(element: Element, writer: Rc<RefCell<Typewriter>>, interval: u32, watch: Watch) {
    if !watch.is_alive() {
        return;
    }
    let Some(visible) = writer.borrow_mut().step().map(str::to_string) else {
        return;
    };
    element.set_text_content(Some(&visible));
    Timeout::new(interval, move || type_next(element, writer, interval, watch)).forget();
}

/// Rotate the role line: fade out, swap, fade in. Rotation runs until the
/// returned `Interval` is dropped.
pub fn start_role_rotation(
    document: &Document,
    selectors: &Selectors,
    config: &RoleConfig,
    watch: Watch,
) -> Option<Interval> {
    let element = document.get_element_by_id(&selectors.role_rotator_id)?;
    let rotator = RoleRotator::new(config.entries.clone())?;
    let rotator = Rc::new(RefCell::new(rotator));
    let fade_ms = config.fade_ms;

    dom::add_class(&element, "fade-in");
    Some(Interval::new(config.interval_ms, move || {
        dom::remove_class(&element, "fade-in");
        dom::add_class(&element, "fade-out");

        let element = element.clone();
        let rotator = Rc::clone(&rotator);
        let watch = watch.clone();
        Timeout::new(fade_ms, move || {
            if !watch.is_alive() {
                return;
            }
            let next = rotator.borrow_mut().advance().to_string();
            element.set_text_content(Some(&next));
            dom::remove_class(&element, "fade-out");
            // Force a reflow so the fade-in animation restarts
            if let Some(el) = element.dyn_ref::<HtmlElement>() {
                let _ = el.offset_width();
            }
            dom::add_class(&element, "fade-in");
        })
        .forget();
    }))
}

// =============================================================================
// LOADING SCREEN
// =============================================================================

/// Fade the loading screen out once the page has loaded.
pub fn hide_loading_screen(document: &Document, selectors: &Selectors, config: LoadingConfig) {
    let Some(screen) = dom::query(document, &selectors.loading_screen) else {
        return;
    };
    Timeout::new(config.hold_ms, move || {
        dom::set_style(&screen, "opacity", "0");
        Timeout::new(config.fade_ms, move || {
            dom::set_style(&screen, "display", "none");
        })
        .forget();
    })
    .forget();
}

// =============================================================================
// OBSERVERS
// =============================================================================

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A connected `IntersectionObserver`; dropping it disconnects.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersecting(entries: &Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
        .map(|entry| entry.target())
        .collect()
}

/// Swap `data-src` into `src` when an image scrolls into view.
pub fn observe_lazy_images(
    document: &Document,
    selectors: &Selectors,
) -> Result<Option<Observer>> {
    let images = dom::query_all(document, &selectors.lazy_image);
    if images.is_empty() {
        return Ok(None);
    }

    let callback: ObserverCallback =
        Closure::new(|entries: Array, observer: IntersectionObserver| {
            for target in intersecting(&entries) {
                if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        img.set_src(&src);
                    }
                    dom::remove_class(img, "lazy");
                }
                observer.unobserve(&target);
            }
        });
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .host_err("create image observer")?;

    for img in &images {
        observer.observe(img);
    }
    tracing::debug!("Lazy loading {} images", images.len());
    Ok(Some(Observer {
        observer,
        _callback: callback,
    }))
}

/// Add `animate-in` to sections and cards as they come into view.
pub fn observe_reveals(
    document: &Document,
    selectors: &Selectors,
    config: &DecorConfig,
    root: Option<&Element>,
) -> Result<Observer> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(&config.reveal_root_margin);
    init.set_root(root);

    let callback: ObserverCallback =
        Closure::new(|entries: Array, _observer: IntersectionObserver| {
            for target in intersecting(&entries) {
                dom::set_style(&target, "animation-play-state", "running");
                dom::add_class(&target, "animate-in");
            }
        });
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .host_err("create reveal observer")?;

    let selector = format!(
        "{}, {}, {}",
        selectors.section, selectors.project_card, selectors.skill_item
    );
    for el in dom::query_all(document, &selector) {
        observer.observe(&el);
    }
    Ok(Observer {
        observer,
        _callback: callback,
    })
}

// =============================================================================
// FLOATING DECOR
// =============================================================================

/// Append floating blobs to the container and drive their parallax from
/// the scroll root in effect at startup.
pub fn spawn_floating_elements(
    document: &Document,
    host: &DomHost,
    config: &DecorConfig,
) -> Result<Option<Subscription>> {
    let Some(container) = host.container() else {
        return Ok(None);
    };

    let mut rng = rand::thread_rng();
    let mut elements = Vec::with_capacity(config.floating_elements);
    for blob in decor::floating_elements(&mut rng, config.floating_elements) {
        let el = document.create_element("div").host_err("create floating element")?;
        el.set_class_name("floating-element");
        el.set_attribute("style", &blob.css_text()).host_err("style floating element")?;
        container.append_child(&el).host_err("append floating element")?;
        elements.push(el);
    }

    let kind = folio_core::select_root(host.container_extent());
    let root = host.root(kind);
    let speed = config.parallax_speed;
    let handler: Rc<dyn Fn()> = Rc::new(move || {
        let scrolled = root.offset();
        for (i, el) in elements.iter().enumerate() {
            dom::set_style(el, "transform", &decor::parallax_transform(scrolled, i, speed));
        }
    });
    tracing::debug!("Parallax bound to {:?}", kind);
    Ok(Some(host.subscribe_scroll(kind, handler)))
}

/// Reveal observer and parallax listener; dropping stops both.
pub struct ScrollAnimations {
    _reveals: Observer,
    _parallax: Option<Subscription>,
}

/// Wire the optional scroll-linked animations.
pub fn install_scroll_animations(
    document: &Document,
    host: &DomHost,
    config: &FolioConfig,
) -> Result<ScrollAnimations> {
    let root = match folio_core::select_root(host.container_extent()) {
        RootKind::Container => host.container().map(|c| Element::from(c.clone())),
        RootKind::Window => None,
    };
    let reveals = observe_reveals(document, &config.selectors, &config.decor, root.as_ref())?;
    let parallax = spawn_floating_elements(document, host, &config.decor)?;
    Ok(ScrollAnimations {
        _reveals: reveals,
        _parallax: parallax,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_outlives_lifetime() {
        let lifetime = Lifetime::new();
        let watch = lifetime.watch();
        let copy = watch.clone();
        assert!(watch.is_alive());
        drop(lifetime);
        assert!(!watch.is_alive());
        assert!(!copy.is_alive());
    }
}

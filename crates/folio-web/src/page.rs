//! Page bootstrap
//!
//! `mount` wires the scroll controller and the presentation effects into
//! the live document and parks every listener, timer and observer in a
//! thread-local `Page`. Dropping the `Page` stops all of them.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::{CvConfig, Selectors};
use folio_core::{
    ClickOutcome, ClickTarget, FolioConfig, FolioError, NavBar, NavEntry, NotificationKind,
    Result, ScrollSync,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::dom::{self, JsResultExt};
use crate::effects::{self, Lifetime, Observer, ScrollAnimations};
use crate::host::{DomHost, DomNav};
use crate::toast::Toaster;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Everything the mounted page keeps alive.
struct Page {
    sync: Rc<ScrollSync<DomHost>>,
    toaster: Rc<Toaster>,
    _lifetime: Lifetime,
    _landing: Timeout,
    _listeners: Vec<EventListener>,
    _roles: Option<Interval>,
    _images: Option<Observer>,
    _animations: Option<ScrollAnimations>,
}

/// Mount now, or once the DOM has been parsed.
pub fn mount_when_ready(config: FolioConfig) -> Result<()> {
    let (_, document) = window_and_document()?;
    if document.ready_state() != "loading" {
        return mount(config);
    }
    EventListener::once(&document, "DOMContentLoaded", move |_| {
        if let Err(e) = mount(config) {
            tracing::error!("Mount failed: {}", e);
        }
    })
    .forget();
    Ok(())
}

/// Wire the page. Mounting twice replaces the previous page and stops its
/// listeners, timers and observers.
pub fn mount(config: FolioConfig) -> Result<()> {
    let (window, document) = window_and_document()?;
    let page = Page::build(window, document, &config)?;
    let previous = PAGE.with(|slot| slot.borrow_mut().replace(page));
    if let Some(previous) = previous {
        previous.sync.teardown();
    }
    Ok(())
}

/// Show a toast on the mounted page. False when nothing is mounted.
pub fn notify(message: &str, kind: NotificationKind) -> bool {
    let toaster = PAGE.with(|slot| slot.borrow().as_ref().map(|p| Rc::clone(&p.toaster)));
    match toaster {
        Some(toaster) => match toaster.notify(message, kind) {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Notification failed: {}", e);
                false
            }
        },
        None => false,
    }
}

fn window_and_document() -> Result<(Window, Document)> {
    let window = web_sys::window().ok_or_else(|| FolioError::missing("window"))?;
    let document = window
        .document()
        .ok_or_else(|| FolioError::missing("document"))?;
    Ok((window, document))
}

/// Click listener that may call `preventDefault`.
fn on_click(element: &Element, handler: impl Fn(&Event) + 'static) -> EventListener {
    EventListener::new_with_options(
        element,
        "click",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |event| handler(event),
    )
}

/// One listener per nav link, CTA button or fragment anchor, each routed
/// by its single classification.
fn install_click_routing(
    document: &Document,
    selectors: &Selectors,
    sync: &Rc<ScrollSync<DomHost>>,
) -> Vec<EventListener> {
    let selector = format!(
        "{}, {}, {}",
        selectors.nav_link, selectors.cta_button, selectors.anchor
    );
    dom::query_all(document, &selector)
        .into_iter()
        .map(|element| {
            let is_nav = element.matches(&selectors.nav_link).unwrap_or(false);
            let is_cta = element.matches(&selectors.cta_button).unwrap_or(false);
            let sync = Rc::clone(sync);
            let target = element.clone();
            on_click(&element, move |event| {
                let href = target.get_attribute("href");
                let label = target.text_content().unwrap_or_default();
                let Some(click) = ClickTarget::classify(is_nav, is_cta, href.as_deref(), &label)
                else {
                    return;
                };
                if sync.handle_click(click).prevents_default() {
                    event.prevent_default();
                }
            })
        })
        .collect()
}

impl Page {
    fn build(window: Window, document: Document, config: &FolioConfig) -> Result<Self> {
        let selectors = &config.selectors;
        let lifetime = Lifetime::new();

        if let Err(e) = effects::inject_styles(&document) {
            tracing::warn!("Stylesheet not injected: {}", e);
        }
        effects::remove_legacy_menu(&document, selectors);

        // Scroll controller
        let host = DomHost::new(window.clone(), document.clone(), selectors);
        let links = dom::query_all(&document, &selectors.nav_link);
        let entries = links
            .iter()
            .map(|link| NavEntry::from_href(&link.get_attribute("href").unwrap_or_default()))
            .collect();
        let nav = NavBar::new(entries, Box::new(DomNav::new(links.clone())));
        let sync = ScrollSync::new(host.clone(), nav, config);
        sync.initialize();

        let mut listeners = install_click_routing(&document, selectors, &sync);

        let resize_sync = Rc::clone(&sync);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            resize_sync.on_resize();
        }));

        // Land on home now and again after load, which may restore a
        // scroll position of its own.
        let landing_sync = Rc::clone(&sync);
        let landing = Timeout::new(0, move || landing_sync.land_on_home());

        let load_sync = Rc::clone(&sync);
        let load_document = document.clone();
        let load_selectors = selectors.clone();
        let loading = config.loading;
        listeners.push(EventListener::once(&window, "load", move |_| {
            load_sync.land_on_home();
            effects::hide_loading_screen(&load_document, &load_selectors, loading);
        }));

        // Toasts and CV download
        let toaster = Toaster::new(document.clone(), config.notifications);
        if let Some(button) = dom::query(&document, &selectors.cv_button) {
            let toaster = Rc::clone(&toaster);
            let cv_document = document.clone();
            let cv = config.cv.clone();
            listeners.push(on_click(&button, move |event| {
                let download = download_cv(&cv_document, &cv);
                if cv_click_outcome(&download).prevents_default() {
                    event.prevent_default();
                }
                let result = match download {
                    Ok(()) => toaster.notify("CV download started!", NotificationKind::Success),
                    Err(e) => {
                        tracing::warn!("CV download failed: {}", e);
                        toaster.notify(
                            "CV download functionality - Please add your CV file!",
                            NotificationKind::Error,
                        )
                    }
                };
                if let Err(e) = result {
                    tracing::warn!("Notification failed: {}", e);
                }
            }));
        }

        listeners.extend(effects::install_hover_lifts(&document, selectors));
        effects::start_greeting(&document, selectors, &config.greeting, lifetime.watch());
        let roles =
            effects::start_role_rotation(&document, selectors, &config.roles, lifetime.watch());
        let images = effects::observe_lazy_images(&document, selectors).unwrap_or_else(|e| {
            tracing::warn!("Lazy images disabled: {}", e);
            None
        });

        let animations = if config.scroll_animations {
            match effects::install_scroll_animations(&document, &host, config) {
                Ok(animations) => Some(animations),
                Err(e) => {
                    tracing::warn!("Scroll animations disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        tracing::info!(
            "Portfolio mounted: {} nav links, {} listeners, scroll root {:?}",
            links.len(),
            listeners.len(),
            sync.bound_root()
        );

        Ok(Self {
            sync,
            toaster,
            _lifetime: lifetime,
            _landing: landing,
            _listeners: listeners,
            _roles: roles,
            _images: images,
            _animations: animations,
        })
    }
}

/// The native click goes ahead unless the synthetic download started.
fn cv_click_outcome(download: &Result<()>) -> ClickOutcome {
    match download {
        Ok(()) => ClickOutcome::Intercepted,
        Err(_) => ClickOutcome::PassThrough,
    }
}

/// Trigger a download of the configured CV file through a temporary link.
fn download_cv(document: &Document, cv: &CvConfig) -> Result<()> {
    let body = document.body().ok_or_else(|| FolioError::missing("body"))?;
    let link = document.create_element("a").host_err("create link")?;
    link.set_attribute("href", &cv.path).host_err("set href")?;
    link.set_attribute("download", &cv.file_name).host_err("set download")?;
    body.append_child(&link).host_err("append link")?;
    if let Some(el) = link.dyn_ref::<HtmlElement>() {
        el.click();
    }
    link.remove();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_click_keeps_default_when_download_fails() {
        assert_eq!(cv_click_outcome(&Ok(())), ClickOutcome::Intercepted);
        assert_eq!(
            cv_click_outcome(&Err(FolioError::missing("body"))),
            ClickOutcome::PassThrough
        );
    }
}

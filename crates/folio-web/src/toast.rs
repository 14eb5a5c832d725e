//! Notification toasts rendered into the page
//!
//! Lifecycle bookkeeping is `NotificationCenter`'s job; this module only
//! builds the element, runs the timers and mirrors each transition as a
//! class change.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use folio_core::config::NotificationTimings;
use folio_core::{NotificationCenter, NotificationId, NotificationKind, Result};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom::{self, JsResultExt};

struct Toast {
    element: Element,
    _close: EventListener,
}

pub struct Toaster {
    document: Document,
    center: RefCell<NotificationCenter>,
    toasts: RefCell<HashMap<NotificationId, Toast>>,
    this: Weak<Self>,
}

impl Toaster {
    pub fn new(document: Document, timings: NotificationTimings) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            document,
            center: RefCell::new(NotificationCenter::new(timings)),
            toasts: RefCell::new(HashMap::new()),
            this: this.clone(),
        })
    }

    /// Show a toast. It slides in after the show delay and leaves on its
    /// own after the auto-dismiss delay, or earlier via its close button.
    pub fn notify(&self, message: &str, kind: NotificationKind) -> Result<NotificationId> {
        let element = self.build(message, kind)?;
        let body = self
            .document
            .body()
            .ok_or_else(|| folio_core::FolioError::missing("body"))?;
        body.append_child(&element).host_err("append notification")?;

        let timings = self.center.borrow().timings();
        let id = self.center.borrow_mut().push(message, kind);

        let close_button = element
            .query_selector(".notification-close")
            .ok()
            .flatten()
            .ok_or_else(|| folio_core::FolioError::missing(".notification-close"))?;
        let this = self.this.clone();
        let close = EventListener::new(&close_button, "click", move |_event| {
            if let Some(toaster) = this.upgrade() {
                toaster.dismiss(id);
            }
        });
        self.toasts.borrow_mut().insert(
            id,
            Toast {
                element: element.clone(),
                _close: close,
            },
        );

        let this = self.this.clone();
        Timeout::new(timings.show_delay_ms, move || {
            if let Some(toaster) = this.upgrade() {
                if toaster.center.borrow_mut().show(id) {
                    dom::add_class(&element, "show");
                }
            }
        })
        .forget();

        let this = self.this.clone();
        Timeout::new(timings.auto_dismiss_ms, move || {
            if let Some(toaster) = this.upgrade() {
                toaster.dismiss(id);
            }
        })
        .forget();

        Ok(id)
    }

    /// Slide a toast out and remove it after the removal delay.
    pub fn dismiss(&self, id: NotificationId) {
        if !self.center.borrow_mut().dismiss(id) {
            return;
        }
        if let Some(toast) = self.toasts.borrow().get(&id) {
            dom::remove_class(&toast.element, "show");
        }

        let delay = self.center.borrow().timings().remove_delay_ms;
        let this = self.this.clone();
        Timeout::new(delay, move || {
            if let Some(toaster) = this.upgrade() {
                toaster.remove(id);
            }
        })
        .forget();
    }

    fn remove(&self, id: NotificationId) {
        if !self.center.borrow_mut().remove(id) {
            return;
        }
        let toast = self.toasts.borrow_mut().remove(&id);
        if let Some(toast) = toast {
            toast.element.remove();
        }
    }

    fn build(&self, message: &str, kind: NotificationKind) -> Result<Element> {
        let element = self
            .document
            .create_element("div")
            .host_err("create notification")?;
        element.set_class_name(&kind.class_name());

        let icon = self.document.create_element("i").host_err("create icon")?;
        icon.set_class_name(&format!("fas {}", kind.icon_class()));

        // Text content, never markup
        let text = self.document.create_element("span").host_err("create span")?;
        text.set_text_content(Some(message));

        let close = self
            .document
            .create_element("button")
            .host_err("create close button")?;
        close.set_class_name("notification-close");
        close.set_text_content(Some("\u{00d7}"));

        for child in [&icon, &text, &close] {
            element.append_child(child).host_err("build notification")?;
        }
        Ok(element)
    }
}

//! Global error reporting
//!
//! Uncaught script errors and unhandled promise rejections go to the
//! tracing log instead of only the browser's default console output.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, PromiseRejectionEvent, Window};

pub fn install(window: &Window) {
    EventListener::new(window, "error", |event| {
        if let Some(e) = event.dyn_ref::<ErrorEvent>() {
            tracing::error!("Uncaught error: {} ({:?})", e.message(), e.error());
        }
    })
    .forget();

    EventListener::new(window, "unhandledrejection", |event| {
        if let Some(e) = event.dyn_ref::<PromiseRejectionEvent>() {
            tracing::error!("Unhandled promise rejection: {:?}", e.reason());
        }
    })
    .forget();
}

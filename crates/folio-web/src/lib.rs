//! Folio Web - portfolio page behavior in the browser
//!
//! Binds the `folio-core` scroll controller and page effects to the live
//! DOM through `web-sys` and `gloo`.

#[cfg(target_arch = "wasm32")]
mod diagnostics;
mod dom;
pub mod effects;
pub mod host;
pub mod page;
pub mod toast;

pub use host::{DomHost, DomNav};
pub use page::{mount, mount_when_ready};

use folio_core::NotificationKind;
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Some(window) = web_sys::window() {
        diagnostics::install(&window);
    }

    if let Err(e) = mount_when_ready(folio_core::FolioConfig::embedded()) {
        tracing::error!("Failed to mount portfolio: {}", e);
    }
}

/// Show a toast from page script. `kind` is `success`, `error` or `info`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: &str) -> bool {
    page::notify(message, NotificationKind::from_name(kind))
}

//! Small DOM helpers shared by the page modules

use folio_core::{FolioError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Convert a web-sys failure into a `FolioError` naming the operation.
pub(crate) trait JsResultExt<T> {
    fn host_err(self, what: &str) -> Result<T>;
}

impl<T> JsResultExt<T> for std::result::Result<T, JsValue> {
    fn host_err(self, what: &str) -> Result<T> {
        self.map_err(|e| FolioError::Host(format!("{}: {:?}", what, e)))
    }
}

/// All elements matching `selector`, in document order.
///
/// An invalid selector yields no elements.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        tracing::warn!("Invalid selector '{}'", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Set an inline style property, ignoring elements that have no style.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub(crate) fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

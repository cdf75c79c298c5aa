//! web-sys bindings: element lookup, listeners, and effect application for
//! each controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule owns the element handles and timers for one controller and
//! forwards browser events into the matching `state` machine. Nothing here
//! decides behavior; it only translates effects into DOM mutations.

pub mod lightbox;
pub mod modal;
pub mod navigator;
pub mod render;
pub mod timer;
pub mod trail;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, NodeList};

use crate::error::SiteError;

pub fn document() -> Result<Document, SiteError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SiteError::MissingElement("document".to_owned()))
}

pub fn page_body(document: &Document) -> Result<HtmlElement, SiteError> {
    document.body().ok_or_else(|| SiteError::MissingElement("body".to_owned()))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(format!("#{id}")))
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Result<Element, SiteError> {
    root.query_selector(selector)?
        .ok_or_else(|| SiteError::MissingElement(selector.to_owned()))
}

/// Every element in the document matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect()
}

pub fn as_html(element: Element) -> Result<HtmlElement, SiteError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|other| SiteError::Js(format!("not an HTML element: {other:?}")))
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    report("class toggle", result);
}

/// Whether `event` was dispatched on `element` itself rather than a descendant.
pub fn targets(event: &Event, element: &Element) -> bool {
    event.target().is_some_and(|target| {
        let target: &JsValue = target.as_ref();
        let element: &JsValue = element.as_ref();
        target == element
    })
}

/// Log a failed browser call at debug level. These are cosmetic mutations
/// whose failure leaves the page usable.
pub fn report<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::debug!("{context} failed: {err:?}");
    }
}

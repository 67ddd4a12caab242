//! DOM Helpers
//!
//! Thin wrappers around `web_sys` used by the animation tasks.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{ShopError, ShopResult};

pub fn document() -> ShopResult<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ShopError::MissingElement("document".to_string()))
}

pub fn element_by_id(id: &str) -> ShopResult<HtmlElement> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| ShopError::MissingElement(format!("#{}", id)))
}

pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// An element appended to `<body>` for the lifetime of this value
pub struct TransientNode {
    el: HtmlElement,
}

impl TransientNode {
    pub fn spawn(class: &str) -> ShopResult<Self> {
        let doc = document()?;
        let el = doc
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| ShopError::MissingElement("div".to_string()))?;
        el.set_class_name(class);
        let body = doc.body().ok_or_else(|| ShopError::MissingElement("body".to_string()))?;
        body.append_child(&el)
            .map_err(|_| ShopError::MissingElement("body".to_string()))?;
        Ok(Self { el })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.el
    }

    pub fn set_style(&self, property: &str, value: &str) {
        set_style(&self.el, property, value);
    }
}

impl Drop for TransientNode {
    fn drop(&mut self) {
        self.el.remove();
    }
}

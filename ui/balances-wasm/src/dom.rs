//! DOM element bindings.
//!
//! The page markup is the protocol surface: fixed ids and classes
//! (`#tokenList`, `#connect-wallet-button`, `.network-switcher`, ...).
//! Every element is optional at startup; handlers that cannot work without
//! one raise when they actually run.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    doc().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

// ── Elements struct ──

/// All DOM element references used by the balance UI.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    /// Container receiving one row per catalog token.
    pub token_list: Option<Element>,
    /// Shown while disconnected; opens the connect modal.
    pub connect_wallet_button: Option<HtmlElement>,
    /// Anchor that also opens the connect modal from the page header.
    pub connect_modal_anchor: Option<Element>,
    /// Dropdown lists offering one entry per configured chain.
    pub network_switchers: Vec<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once after the module loads.
    pub fn bind() -> Elements {
        Elements {
            token_list: by_id("tokenList"),
            connect_wallet_button: by_id_typed::<HtmlElement>("connect-wallet-button"),
            connect_modal_anchor: query(r##"[data-bs-target="#connectModal"]"##),
            network_switchers: query_all(".network-switcher"),
        }
    }
}

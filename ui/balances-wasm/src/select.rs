//! Token selector: click handling on the rendered list.
//!
//! Presentation-only. Runs synchronously inside the event handler and has
//! no recovery path: a missing DOM element or token record raises, which
//! the panic hook surfaces in the console.

use crate::dom::{self, Elements};
use crate::state;
use tl_balance_core::format::format_quantity_short;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlImageElement, MouseEvent};

pub fn bind_token_list(els: &Elements) {
    let Some(list) = &els.token_list else {
        return;
    };

    let list2 = list.clone();
    let cb = Closure::wrap(Box::new(move |event: MouseEvent| {
        // Clicks on the bare container select nothing.
        let on_container = match (event.target(), event.current_target()) {
            (Some(target), Some(current)) => {
                JsValue::from(target) == JsValue::from(current)
            }
            _ => true,
        };
        if on_container {
            return;
        }
        select_token(&list2, &event).expect("token selection");
    }) as Box<dyn FnMut(_)>);
    list.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}

fn select_token(list: &Element, event: &MouseEvent) -> Result<(), JsValue> {
    let target: Element = event
        .target()
        .and_then(|t| t.dyn_into().ok())
        .ok_or_else(|| JsValue::from_str("click target is not an element"))?;

    let row = target
        .closest(&format!("#{} > div", list.id()))?
        .ok_or_else(|| JsValue::from_str("could not locate the clicked token row"))?;

    let symbol = row
        .query_selector(".span-crypto-name")?
        .and_then(|el| el.text_content())
        .ok_or_else(|| JsValue::from_str("could not get the token symbol to select"))?;

    let token = state::find_token(&symbol)
        .ok_or_else(|| JsValue::from_str("could not find the token in the list of tokens"))?;

    let balance_el = dom::query(".crypto-card-text")
        .ok_or_else(|| JsValue::from_str("could not find the balance element"))?;
    dom::set_text(
        &balance_el,
        &format!("{} {}", format_quantity_short(&token.quantity), token.symbol),
    );

    let menu = dom::by_id("dropdownMenu_selectToken")
        .ok_or_else(|| JsValue::from_str("could not get the select-token menu"))?;

    let image: HtmlImageElement = menu
        .query_selector("img")?
        .and_then(|el| el.dyn_into().ok())
        .ok_or_else(|| JsValue::from_str("could not get the selected-token image"))?;
    image.set_src(&token.image);
    image.remove_attribute("height")?;
    image.style().set_property("max-height", "30px")?;
    image.style().set_property("width", "auto")?;

    let symbol_slot = menu
        .query_selector(".crypto-name")?
        .ok_or_else(|| JsValue::from_str("could not get the selected-token symbol slot"))?;
    dom::set_text(&symbol_slot, &token.symbol.0);

    Ok(())
}

//! Network switcher rendering and chain switching.
//!
//! One selectable entry per configured chain. Switching is delegated to
//! the wallet bridge; a rejected switch is logged and nothing is rolled
//! back or retried.

use crate::dom::{self, Elements};
use crate::session;
use crate::state;
use gloo_console::warn;
use tl_balance_core::chains::DIRECTORY;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlImageElement};

/// Populate every `.network-switcher` dropdown and set its current label.
pub fn render_switchers(els: &Elements) {
    for switcher in &els.network_switchers {
        dom::set_inner_html(switcher, "");
        update_switcher_label(switcher);

        for chain in DIRECTORY {
            let entry = dom::create_element("li");
            dom::set_inner_html(
                &entry,
                &format!(
                    r##"
      <li class="d-flex align-items-center mb-2">
        <img src="{icon}" alt="" width="40" style="padding-left: 10px; min-height: 30px;">
        <a class="dropdown-item" href="#">{name}</a>
      </li>
    "##,
                    icon = chain.icon,
                    name = chain.name,
                ),
            );

            let switcher2 = switcher.clone();
            let target = chain.id;
            let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                let switcher3 = switcher2.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match session::switch_chain(target).await {
                        Ok(reported) => {
                            state::reset_chain(Some(reported));
                            update_switcher_label(&switcher3);
                        }
                        Err(error) => warn!("chain switch rejected", error),
                    }
                });
            }) as Box<dyn FnMut(_)>);
            entry
                .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .unwrap();
            cb.forget();

            switcher.append_child(&entry).unwrap();
        }
    }
}

/// Refresh every switcher's button label and icon from the chain tracker.
pub fn update_switcher_labels(els: &Elements) {
    for switcher in &els.network_switchers {
        update_switcher_label(switcher);
    }
}

fn update_switcher_label(switcher: &Element) {
    // Button and icon live next to the dropdown, under the same parent.
    let Some(parent) = switcher.parent_element() else {
        return;
    };

    if let Some(button) = parent
        .query_selector("a.crypto-custom-btn_link")
        .ok()
        .flatten()
    {
        dom::set_text(&button, state::chain_display_name());
    }

    if let (Some(icon), Some(info)) = (
        parent
            .query_selector("img.crypto-custom-btn_icon")
            .ok()
            .flatten(),
        state::chain_info(),
    ) {
        if let Some(icon) = icon.dyn_ref::<HtmlImageElement>() {
            icon.set_src(info.icon);
        }
    }
}

//! Wallet session bindings.
//!
//! The page's wallet-connection library exposes a global `walletBridge`
//! object (modal, session, chain switching). It is consumed here, never
//! implemented: session negotiation belongs to the library.

use crate::dom::Elements;
use crate::network;
use crate::refresh;
use crate::state;
use tl_api_types::{AccountAddress, ChainId};
use tl_chain_client::SessionEvent;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Open the wallet-connect modal.
    #[wasm_bindgen(js_namespace = walletBridge, js_name = openModal)]
    pub fn open_modal();

    #[wasm_bindgen(js_namespace = walletBridge, js_name = connectedAccount)]
    fn bridge_connected_account() -> Option<String>;

    #[wasm_bindgen(js_namespace = walletBridge, js_name = currentChainId)]
    fn bridge_current_chain_id() -> Option<u32>;

    /// Ask the wallet to switch networks; resolves to the new chain id.
    #[wasm_bindgen(js_namespace = walletBridge, js_name = switchChain, catch)]
    async fn bridge_switch_chain(chain_id: u32) -> Result<JsValue, JsValue>;

    /// Subscribe to session notifications (event name per call).
    #[wasm_bindgen(js_namespace = walletBridge, js_name = onSessionEvent)]
    fn bridge_on_session_event(callback: &js_sys::Function);
}

pub fn connected_account() -> Option<AccountAddress> {
    bridge_connected_account().map(AccountAddress)
}

pub fn current_chain_id() -> Option<ChainId> {
    bridge_current_chain_id().map(|id| ChainId(id.into()))
}

pub async fn switch_chain(chain: ChainId) -> Result<ChainId, JsValue> {
    let reported = bridge_switch_chain(chain.0 as u32).await?;
    // Wallets echo the chain id they actually landed on.
    Ok(reported
        .as_f64()
        .map(|id| ChainId(id as u64))
        .unwrap_or(chain))
}

/// Re-derive the chain tracker from what the wallet currently reports.
pub fn reset_chain() {
    state::reset_chain(current_chain_id());
}

/// Wire the connect button and the header modal anchor; hide the button
/// while a session exists.
pub fn bind_connect_buttons(els: &Elements) {
    if let Some(anchor) = &els.connect_modal_anchor {
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            open_modal();
        }) as Box<dyn FnMut(_)>);
        anchor
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    let Some(button) = &els.connect_wallet_button else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
        open_modal();
    }) as Box<dyn FnMut(_)>);
    button
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();

    if connected_account().is_some() {
        set_connect_button_visible(els, false);
    }
}

fn set_connect_button_visible(els: &Elements, visible: bool) {
    if let Some(button) = &els.connect_wallet_button {
        let display = if visible { "initial" } else { "none" };
        let _ = button.style().set_property("display", display);
    }
}

/// React to wallet notifications: refresh on connect and on every chain
/// change, toggle the connect button with the session.
pub fn subscribe_session_events(els: &Elements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |name: String| {
        let Some(event) = SessionEvent::parse(&name) else {
            return;
        };
        let els3 = els2.clone();
        match event {
            SessionEvent::AccountConnected => {
                set_connect_button_visible(&els3, false);
                wasm_bindgen_futures::spawn_local(async move {
                    refresh::refetch_balances(&els3).await;
                });
            }
            SessionEvent::AccountDisconnected => {
                set_connect_button_visible(&els3, true);
            }
            SessionEvent::ModalClosed | SessionEvent::ChainChanged => {
                reset_chain();
                network::update_switcher_labels(&els3);
                wasm_bindgen_futures::spawn_local(async move {
                    refresh::refetch_balances(&els3).await;
                });
            }
        }
    }) as Box<dyn FnMut(String)>);
    bridge_on_session_event(cb.as_ref().unchecked_ref());
    cb.forget();
}

//! TokenLens browser frontend.
//!
//! Pure Rust + WASM rendition of the wallet-connect button and the token
//! balance list. Each concern lives in its own module; the balance logic
//! itself comes from `tl-balance-core`.

pub mod dom;
pub mod network;
pub mod refresh;
pub mod render;
pub mod select;
pub mod session;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await;
    Ok(())
}

/// Main initialisation sequence.
async fn init() {
    let els = dom::Elements::bind();

    session::reset_chain();
    session::bind_connect_buttons(&els);
    session::subscribe_session_events(&els);
    select::bind_token_list(&els);
    network::render_switchers(&els);

    refresh::refetch_balances(&els).await;
}

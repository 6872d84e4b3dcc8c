//! Refresh trigger: clear the list, re-fetch every balance, re-render.

use crate::dom::{self, Elements};
use crate::render;
use crate::session;
use crate::state;
use gloo_console::info;
use tl_balance_core::refresh::refresh_balances;
use tl_chain_evmrpc::EvmRpcSource;

/// One full refresh cycle. The await of the joint fetch is the only
/// suspend point; overlapping refreshes race and the later render wins.
pub async fn refetch_balances(els: &Elements) {
    if let Some(list) = &els.token_list {
        dom::set_inner_html(list, "");
    }

    let account = session::connected_account();
    if account.is_none() {
        info!("Not connected to Web3 Wallet");
    }

    let chain = state::chain_id();
    let tokens = state::tokens();
    let source = EvmRpcSource::new();

    let refreshed = refresh_balances(&source, account.as_ref(), chain, &tokens).await;

    state::set_tokens(refreshed.clone());

    if let Some(list) = &els.token_list {
        for token in &refreshed {
            render::append_token_row(list, token);
        }
    }
}

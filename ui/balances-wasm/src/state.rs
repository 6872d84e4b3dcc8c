//! Shared UI state: the chain tracker and the last-fetched token set.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Both fields are updated synchronously right before or after the one
//! suspend point of a refresh.

use std::cell::RefCell;
use tl_api_types::ChainId;
use tl_balance_core::catalog;
use tl_balance_core::chains::{ChainInfo, ChainTracker};
use tl_balance_core::token::Token;

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    pub chain: ChainTracker,
    pub tokens: Vec<Token>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            chain: ChainTracker::default(),
            tokens: catalog::default_tokens(),
        }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn chain_id() -> ChainId {
    with(|s| s.chain.chain_id())
}

pub fn reset_chain(reported: Option<ChainId>) {
    with_mut(|s| s.chain.reset(reported));
}

pub fn chain_display_name() -> &'static str {
    with(|s| s.chain.display_name())
}

pub fn chain_info() -> Option<&'static ChainInfo> {
    with(|s| s.chain.info())
}

pub fn explorer_url() -> Option<&'static str> {
    with(|s| s.chain.explorer_url())
}

pub fn tokens() -> Vec<Token> {
    with(|s| s.tokens.clone())
}

pub fn set_tokens(tokens: Vec<Token>) {
    with_mut(|s| s.tokens = tokens);
}

pub fn find_token(symbol: &str) -> Option<Token> {
    with(|s| {
        s.tokens
            .iter()
            .find(|token| token.symbol.0 == symbol)
            .cloned()
    })
}
